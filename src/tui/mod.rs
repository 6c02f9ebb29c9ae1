//! Terminal User Interface module
//!
//! A single-screen TUI built on ratatui: a sidebar form for the budget and
//! new expenses, the summary and expense table on the right, and an optional
//! category chart.

pub mod app;
pub mod event;
pub mod form;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
