//! Expense Tracker - terminal-based expense tracking
//!
//! This library provides the core functionality for the expense tracker: dated
//! expense records kept in a flat JSON file, a budget summary computed from
//! them, and a per-category bar chart.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Money, categories, expense records and the expense table
//! - `storage`: JSON file storage
//! - `services`: Session state, action handlers and the budget summary
//! - `reports`: Per-category chart
//! - `display`: Plain-text formatting for the CLI
//! - `cli`: CLI command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_tracker::models::{Category, Expense};
//! use expense_tracker::services::Session;
//! use expense_tracker::storage::ExpenseStore;
//!
//! let store = ExpenseStore::new("expenses.json");
//! let (mut session, _first_run) = Session::load(&store)?;
//! session.add_expense(Expense::from_input("2024-01-01", Category::Food, "250.50", "Lunch")?)?;
//! session.save(&store)?;
//! # Ok::<(), expense_tracker::ExpenseError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::ExpenseError;
