//! Expense store backed by a flat JSON file
//!
//! The file holds a JSON array of records. The in-memory table and the file
//! only synchronize through [`ExpenseStore::load`] and [`ExpenseStore::save`].

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::ExpenseResult;
use crate::models::ExpenseTable;

use super::file_io::{read_json, write_json_atomic};

/// Result of loading the backing file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file existed and was parsed
    Loaded(ExpenseTable),
    /// No file yet; start from an empty table
    FirstRun,
}

impl LoadOutcome {
    /// The loaded table, or an empty one on first run
    pub fn into_table(self) -> ExpenseTable {
        match self {
            Self::Loaded(table) => table,
            Self::FirstRun => ExpenseTable::new(),
        }
    }

    pub fn is_first_run(&self) -> bool {
        matches!(self, Self::FirstRun)
    }
}

/// Load/save access to the backing expenses file
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store for the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the backing file
    ///
    /// A missing file is [`LoadOutcome::FirstRun`]; a malformed one is an
    /// [`ExpenseError::Parse`](crate::error::ExpenseError::Parse). Records
    /// are typed on the way in (a real date, a known category, an amount in
    /// range) but not checked further, so a negative amount loads as written.
    pub fn load(&self) -> ExpenseResult<LoadOutcome> {
        match read_json::<ExpenseTable, _>(&self.path)? {
            Some(table) => {
                info!(path = %self.path.display(), records = table.len(), "loaded expenses");
                Ok(LoadOutcome::Loaded(table))
            }
            None => {
                debug!(path = %self.path.display(), "no expenses file, starting empty");
                Ok(LoadOutcome::FirstRun)
            }
        }
    }

    /// Overwrite the backing file with `table`, in its current order
    pub fn save(&self, table: &ExpenseTable) -> ExpenseResult<()> {
        write_json_atomic(&self.path, table)?;
        info!(path = %self.path.display(), records = table.len(), "saved expenses");
        Ok(())
    }
}
