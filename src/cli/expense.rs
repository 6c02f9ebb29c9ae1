//! Expense CLI commands
//!
//! Each invocation is its own session: it loads the backing file, runs one
//! action, and saves only when the action changes the table.

use chrono::Local;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_budget_summary, format_expense_table};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Expense, Money, DATE_FORMAT};
use crate::services::{Action, ActionOutcome, Session};
use crate::storage::ExpenseStore;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Add an expense and save it to the backing file
    Add {
        /// Category (Food, Transport, Entertainment, Utilities, Other)
        #[arg(short, long)]
        category: String,
        /// Amount, zero or more with up to two decimals (e.g. "250.50")
        #[arg(short, long)]
        amount: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Free-form description
        #[arg(short = 'D', long, default_value = "")]
        description: String,
    },
    /// Show all expenses
    #[command(alias = "ls")]
    List,
    /// Show total spent and remaining budget
    Summary {
        /// Budget to compare spending against
        #[arg(short, long, default_value = "0")]
        budget: String,
    },
    /// Show spending per category as a bar chart
    #[command(alias = "visualize")]
    Chart,
}

/// Handle an expense command
pub fn handle_expense_command(
    store: &ExpenseStore,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let (mut session, first_run) = Session::load(store)?;
    if first_run {
        tracing::debug!(path = %store.path().display(), "starting with an empty table");
    }

    match cmd {
        ExpenseCommands::Add {
            category,
            amount,
            date,
            description,
        } => {
            let category = category
                .parse::<Category>()
                .map_err(|e| ExpenseError::Validation(e.to_string()))?;
            let date = date
                .unwrap_or_else(|| Local::now().date_naive().format(DATE_FORMAT).to_string());
            let expense = Expense::from_input(&date, category, &amount, &description)?;

            report(session.apply(Action::AddExpense(expense), store)?, settings);
            report(session.apply(Action::Save, store)?, settings);
        }

        ExpenseCommands::List => {
            print!(
                "{}",
                format_expense_table(&session.expenses, &settings.date_format)
            );
        }

        ExpenseCommands::Summary { budget } => {
            let budget = Money::parse(&budget).map_err(|e| {
                ExpenseError::Validation(format!("Invalid budget '{}': {}", budget, e))
            })?;
            session.apply(Action::SetBudget(budget), store)?;
            print!(
                "{}",
                format_budget_summary(&session.summary(), &settings.currency_symbol)
            );
        }

        ExpenseCommands::Chart => {
            report(session.apply(Action::Visualize, store)?, settings);
        }
    }

    Ok(())
}

/// Print an action outcome
fn report(outcome: ActionOutcome, settings: &Settings) {
    match outcome {
        ActionOutcome::Updated => {}
        ActionOutcome::Success(message) => println!("{}", message),
        ActionOutcome::Warning(message) => println!("Warning: {}", message),
        ActionOutcome::Chart(chart) => {
            print!("{}", chart.format_terminal(&settings.currency_symbol))
        }
    }
}
