//! Expense record and the ordered expense table
//!
//! An expense is a flat record of date, category, amount and description. The
//! table keeps records in insertion order and permits duplicates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::money::Money;
use crate::error::{ExpenseError, ExpenseResult};

/// Format used for dates on disk and in form input
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single expense record
///
/// Field names match the keys of the backing JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    #[serde(rename = "Date")]
    pub date: NaiveDate,

    #[serde(rename = "Category")]
    pub category: Category,

    /// Non-negative amount
    #[serde(rename = "Amount")]
    pub amount: Money,

    #[serde(rename = "Description", default)]
    pub description: String,
}

impl Expense {
    /// Create a new expense, rejecting negative amounts
    pub fn new(
        date: NaiveDate,
        category: Category,
        amount: Money,
        description: impl Into<String>,
    ) -> ExpenseResult<Self> {
        let expense = Self {
            date,
            category,
            amount,
            description: description.into(),
        };
        expense.validate()?;
        Ok(expense)
    }

    /// Build an expense from raw form input
    ///
    /// The date must be `YYYY-MM-DD`, the amount a non-negative decimal with
    /// at most two decimal places. The description may be empty.
    pub fn from_input(
        date: &str,
        category: Category,
        amount: &str,
        description: &str,
    ) -> ExpenseResult<Self> {
        let date = date.trim();
        if date.is_empty() {
            return Err(ExpenseError::Validation("Date is required".into()));
        }
        let date = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| {
            ExpenseError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", date))
        })?;

        let amount = if amount.trim().is_empty() {
            Money::zero()
        } else {
            Money::parse(amount).map_err(|e| ExpenseError::Validation(e.to_string()))?
        };

        Self::new(date, category, amount, description)
    }

    /// Check the widget-level constraints
    pub fn validate(&self) -> ExpenseResult<()> {
        if self.amount.is_negative() {
            return Err(ExpenseError::Validation(format!(
                "Amount must be zero or more, got {}",
                self.amount
            )));
        }
        Ok(())
    }
}

/// Ordered table of expense records
///
/// Serializes as a bare JSON array of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseTable {
    records: Vec<Expense>,
}

impl ExpenseTable {
    /// Column names, in display and file order
    pub const COLUMNS: [&'static str; 4] = ["Date", "Category", "Amount", "Description"];

    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed column list
    pub fn columns(&self) -> &'static [&'static str] {
        &Self::COLUMNS
    }

    /// Append a record to the end of the table
    pub fn push(&mut self, expense: Expense) {
        self.records.push(expense);
    }

    pub fn records(&self) -> &[Expense] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expense> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&Expense> {
        self.records.last()
    }

    /// Sum of all amounts; zero for an empty table
    pub fn total(&self) -> Money {
        self.records.iter().map(|e| e.amount).sum()
    }
}

impl<'a> IntoIterator for &'a ExpenseTable {
    type Item = &'a Expense;
    type IntoIter = std::slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lunch() -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            Category::Food,
            Money::from_cents(25050),
            "Lunch",
        )
        .unwrap()
    }

    #[test]
    fn test_from_input() {
        let expense = Expense::from_input("2024-01-01", Category::Food, "250.50", "Lunch").unwrap();
        assert_eq!(expense, lunch());
    }

    #[test]
    fn test_from_input_empty_amount_is_zero() {
        let expense = Expense::from_input("2024-03-05", Category::Other, "", "").unwrap();
        assert!(expense.amount.is_zero());
        assert!(expense.description.is_empty());
    }

    #[test]
    fn test_from_input_rejects_bad_fields() {
        assert!(Expense::from_input("", Category::Food, "1", "")
            .unwrap_err()
            .is_validation());
        assert!(Expense::from_input("2024-02-30", Category::Food, "1", "")
            .unwrap_err()
            .is_validation());
        assert!(Expense::from_input("2024-01-01", Category::Food, "-5", "")
            .unwrap_err()
            .is_validation());
        assert!(Expense::from_input("2024-01-01", Category::Food, "ten", "")
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(lunch()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "Date": "2024-01-01",
                "Category": "Food",
                "Amount": 250.5,
                "Description": "Lunch"
            })
        );
    }

    #[test]
    fn test_missing_description_defaults_to_empty() {
        let expense: Expense =
            serde_json::from_str(r#"{"Date": "2024-01-01", "Category": "Other", "Amount": 3}"#)
                .unwrap();
        assert_eq!(expense.description, "");
        assert_eq!(expense.amount.cents(), 300);
    }

    #[test]
    fn test_table_push_appends_and_allows_duplicates() {
        let mut table = ExpenseTable::new();
        assert!(table.is_empty());
        assert_eq!(table.columns(), &["Date", "Category", "Amount", "Description"]);

        table.push(lunch());
        table.push(lunch());

        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0], table.records()[1]);
    }

    #[test]
    fn test_table_total() {
        let mut table = ExpenseTable::new();
        assert_eq!(table.total(), Money::zero());

        table.push(lunch());
        table.push(
            Expense::from_input("2024-01-02", Category::Transport, "19.99", "Bus").unwrap(),
        );
        assert_eq!(table.total().cents(), 25050 + 1999);
    }
}
