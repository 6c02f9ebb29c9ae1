//! Expense table display formatting
//!
//! Renders the full expense table for terminal output.

use tabled::settings::{object::Columns, Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::{Expense, ExpenseTable};

/// One printed row of the expense table
#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl ExpenseRow {
    fn new(index: usize, expense: &Expense, date_format: &str) -> Self {
        Self {
            index,
            date: expense.date.format(date_format).to_string(),
            category: expense.category.to_string(),
            amount: expense.amount.to_string(),
            description: expense.description.clone(),
        }
    }
}

/// Format the whole table, one row per record in insertion order
pub fn format_expense_table(table: &ExpenseTable, date_format: &str) -> String {
    if table.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = table
        .iter()
        .enumerate()
        .map(|(i, expense)| ExpenseRow::new(i + 1, expense, date_format))
        .collect();

    let mut output = Table::new(rows);
    output
        .with(Style::rounded())
        .modify(Columns::single(3), Alignment::right());

    format!("{}\n{} record(s)\n", output, table.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_empty_table() {
        assert_eq!(
            format_expense_table(&ExpenseTable::new(), "%Y-%m-%d"),
            "No expenses recorded.\n"
        );
    }

    #[test]
    fn test_rows_in_insertion_order() {
        let mut table = ExpenseTable::new();
        table.push(Expense::from_input("2024-02-01", Category::Transport, "12", "Taxi").unwrap());
        table.push(Expense::from_input("2024-01-01", Category::Food, "250.50", "Lunch").unwrap());

        let output = format_expense_table(&table, "%Y-%m-%d");

        for column in ExpenseTable::COLUMNS {
            assert!(output.contains(column));
        }
        let taxi = output.find("Taxi").unwrap();
        let lunch = output.find("Lunch").unwrap();
        assert!(taxi < lunch);
        assert!(output.contains("250.50"));
        assert!(output.ends_with("2 record(s)\n"));
    }

    #[test]
    fn test_custom_date_format() {
        let mut table = ExpenseTable::new();
        table.push(Expense::from_input("2024-01-31", Category::Other, "1", "").unwrap());

        let output = format_expense_table(&table, "%d/%m/%Y");
        assert!(output.contains("31/01/2024"));
    }
}
