//! Core data models for the expense tracker
//!
//! This module contains the data structures that represent the domain:
//! money amounts, the fixed category set, expense records and the table
//! that holds them.

pub mod category;
pub mod expense;
pub mod money;

pub use category::{Category, UnknownCategory};
pub use expense::{Expense, ExpenseTable, DATE_FORMAT};
pub use money::{Money, MoneyParseError};
