//! Display formatting for terminal output
//!
//! Provides plain-text renderings of the expense table, the budget summary
//! and chart helpers for the CLI.

pub mod expense;
pub mod report;
pub mod summary;

pub use expense::format_expense_table;
pub use summary::format_budget_summary;
