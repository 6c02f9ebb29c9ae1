use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{handle_expense_command, ExpenseCommands};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::error::ExpenseResult;
use expense_tracker::logging::{init_logging, LogTarget};
use expense_tracker::storage::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Terminal-based expense tracker",
    long_about = "Record dated expenses, compare spending against a budget, and \
                  chart spending by category. Expenses are kept in a flat JSON file."
)]
struct Cli {
    /// Backing expenses file (overrides the configured location)
    #[arg(long, global = true, env = "EXPENSE_TRACKER_FILE")]
    file: Option<PathBuf>,

    /// Log at the configured level instead of warnings only
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Show current configuration and paths
    Config {
        /// Write the settings file if it does not exist yet
        #[arg(long)]
        init: bool,
    },
}

/// Resolve the data directory, settings and backing file
///
/// With an explicit `--file` nothing else on disk is needed, so a base
/// directory that cannot be resolved falls back to default settings.
fn resolve(
    file: Option<PathBuf>,
) -> ExpenseResult<(ExpenseResult<ExpensePaths>, Settings, ExpenseStore)> {
    match (ExpensePaths::new(), file) {
        (Ok(paths), file) => {
            let settings = Settings::load_or_create(&paths)?;
            let store =
                ExpenseStore::new(file.unwrap_or_else(|| settings.expenses_path(&paths)));
            Ok((Ok(paths), settings, store))
        }
        (Err(e), Some(file)) => {
            Ok((Err(e), Settings::default(), ExpenseStore::new(file)))
        }
        (Err(e), None) => Err(e),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (paths, settings, store) = resolve(cli.file.clone())?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            if let Ok(paths) = &paths {
                init_logging(&settings.log_level, LogTarget::File(paths.log_file()))?;
            }
            expense_tracker::tui::run_tui(&store, &settings)?;
        }
        Commands::Expense(cmd) => {
            let level = if cli.verbose {
                settings.log_level.as_str()
            } else {
                "warn"
            };
            init_logging(level, LogTarget::Stderr)?;
            handle_expense_command(&store, &settings, cmd)?;
        }
        Commands::Config { init } => {
            let paths = paths?;
            if init {
                if paths.settings_file().exists() {
                    println!(
                        "Settings already exist at {}",
                        paths.settings_file().display()
                    );
                } else {
                    settings.save(&paths)?;
                    println!("Wrote settings to {}", paths.settings_file().display());
                }
                return Ok(());
            }

            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Expenses file:  {}", store.path().display());
            println!("Log file:       {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Log level:       {}", settings.log_level);
        }
    }

    Ok(())
}
