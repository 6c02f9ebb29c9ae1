//! Terminal setup and teardown
//!
//! Initializes and restores the terminal, including a panic hook that puts
//! the terminal back before the panic message is printed.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::config::Settings;
use crate::services::Session;
use crate::storage::ExpenseStore;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;
use super::widgets::notification::Notification;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
///
/// The expense file is read before the terminal is touched, so a malformed
/// file is reported on the normal screen.
pub fn run_tui(store: &ExpenseStore, settings: &Settings) -> Result<()> {
    let (session, first_run) = Session::load(store)?;
    tracing::info!(
        path = %store.path().display(),
        records = session.expenses.len(),
        first_run,
        "starting TUI"
    );

    let mut terminal = init_terminal()?;

    let mut app = App::new(store, settings, session);
    if first_run {
        app.notify(Notification::success(format!(
            "Starting a new expense file at {}",
            store.path().display()
        )));
    }

    let events = EventHandler::default();

    let result = run_loop(&mut terminal, &mut app, &events);

    restore_terminal()?;
    result
}

fn run_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        handle_event(app, events.next()?)?;
    }
    Ok(())
}
