//! Budget summary
//!
//! Derived figures shown in the metrics panel. Always computed from the
//! current session state; nothing here is stored.

use crate::models::{ExpenseTable, Money};

/// Total spent against the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetSummary {
    pub budget: Money,
    /// Sum of all amounts in the table
    pub total_spent: Money,
    /// `budget - total_spent`, negative when overspent
    pub remaining: Money,
}

impl BudgetSummary {
    /// Compute the summary for `table` against `budget`
    pub fn compute(table: &ExpenseTable, budget: Money) -> Self {
        let total_spent = table.total();
        Self {
            budget,
            total_spent,
            remaining: budget - total_spent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Expense};

    #[test]
    fn test_empty_table() {
        let summary = BudgetSummary::compute(&ExpenseTable::new(), Money::from_cents(100000));

        assert_eq!(summary.total_spent, Money::zero());
        assert_eq!(summary.remaining, Money::from_cents(100000));
    }

    #[test]
    fn test_remaining_goes_negative() {
        let mut table = ExpenseTable::new();
        table.push(Expense::from_input("2024-01-01", Category::Food, "30", "").unwrap());

        let summary = BudgetSummary::compute(&table, Money::from_cents(1000));

        assert_eq!(summary.total_spent.cents(), 3000);
        assert_eq!(summary.remaining.cents(), -2000);
    }
}
