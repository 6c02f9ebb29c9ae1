//! Storage layer for the expense tracker
//!
//! Provides the JSON backing file and the load/save store on top of it.

pub mod expenses;
pub mod file_io;

pub use expenses::{ExpenseStore, LoadOutcome};
pub use file_io::{read_json, write_json_atomic};
