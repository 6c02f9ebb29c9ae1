//! Session state and action handlers
//!
//! A [`Session`] holds the expense table and the budget for one interactive
//! session. Each user action has a handler that runs against the session and
//! reports what the interface should show. The backing file is only touched
//! by [`Session::load`] and [`Session::save`].

use tracing::{debug, info};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseTable, Money};
use crate::reports::CategoryChart;
use crate::storage::ExpenseStore;

use super::summary::BudgetSummary;

/// Message shown after a successful add
pub const ADDED_MESSAGE: &str = "Expense added!";
/// Message shown after a successful save
pub const SAVED_MESSAGE: &str = "Expenses saved to JSON!";
/// Warning shown when visualizing an empty table
pub const NOTHING_TO_VISUALIZE: &str = "No expenses to visualize!";

/// A user action against the session
#[derive(Debug, Clone)]
pub enum Action {
    SetBudget(Money),
    AddExpense(Expense),
    Save,
    Visualize,
}

/// What the interface should show after an action
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// State changed, nothing to announce
    Updated,
    Success(String),
    Warning(String),
    Chart(CategoryChart),
}

/// State for one interactive session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Records in insertion order
    pub expenses: ExpenseTable,
    /// Never persisted; zero at the start of every session
    pub budget: Money,
}

impl Session {
    /// Create a session over an existing table with a zero budget
    pub fn new(expenses: ExpenseTable) -> Self {
        Self {
            expenses,
            budget: Money::zero(),
        }
    }

    /// Start a session from the backing file
    ///
    /// Returns the session and whether this was a first run (no file yet).
    pub fn load(store: &ExpenseStore) -> ExpenseResult<(Self, bool)> {
        let outcome = store.load()?;
        let first_run = outcome.is_first_run();
        Ok((Self::new(outcome.into_table()), first_run))
    }

    /// Dispatch an action to its handler
    pub fn apply(&mut self, action: Action, store: &ExpenseStore) -> ExpenseResult<ActionOutcome> {
        match action {
            Action::SetBudget(amount) => self.set_budget(amount),
            Action::AddExpense(expense) => self.add_expense(expense),
            Action::Save => self.save(store),
            Action::Visualize => Ok(self.visualize()),
        }
    }

    /// Set the budget; negative budgets are rejected
    pub fn set_budget(&mut self, amount: Money) -> ExpenseResult<ActionOutcome> {
        if amount.is_negative() {
            return Err(ExpenseError::Validation(format!(
                "Budget must be zero or more, got {}",
                amount
            )));
        }
        debug!(budget = %amount, "budget updated");
        self.budget = amount;
        Ok(ActionOutcome::Updated)
    }

    /// Append an expense to the end of the table
    pub fn add_expense(&mut self, expense: Expense) -> ExpenseResult<ActionOutcome> {
        expense.validate()?;
        info!(
            date = %expense.date,
            category = %expense.category,
            amount = %expense.amount,
            "expense added"
        );
        self.expenses.push(expense);
        Ok(ActionOutcome::Success(ADDED_MESSAGE.to_string()))
    }

    /// Write the full table to the backing file
    pub fn save(&self, store: &ExpenseStore) -> ExpenseResult<ActionOutcome> {
        store.save(&self.expenses)?;
        Ok(ActionOutcome::Success(SAVED_MESSAGE.to_string()))
    }

    /// Build the category chart, or warn when there is nothing to plot
    pub fn visualize(&self) -> ActionOutcome {
        match CategoryChart::generate(&self.expenses) {
            Some(chart) => {
                debug!(bars = chart.bars.len(), "chart generated");
                ActionOutcome::Chart(chart)
            }
            None => ActionOutcome::Warning(NOTHING_TO_VISUALIZE.to_string()),
        }
    }

    /// Current budget summary
    pub fn summary(&self) -> BudgetSummary {
        BudgetSummary::compute(&self.expenses, self.budget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, ExpenseStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.json"));
        (temp_dir, store)
    }

    fn lunch() -> Expense {
        Expense::from_input("2024-01-01", Category::Food, "250.50", "Lunch").unwrap()
    }

    #[test]
    fn test_first_run_starts_empty_with_zero_budget() {
        let (_temp_dir, store) = create_test_store();

        let (session, first_run) = Session::load(&store).unwrap();

        assert!(first_run);
        assert!(session.expenses.is_empty());
        assert_eq!(session.budget, Money::zero());
    }

    #[test]
    fn test_add_appends_last() {
        let mut session = Session::default();
        session
            .add_expense(Expense::from_input("2024-01-02", Category::Other, "1", "").unwrap())
            .unwrap();

        let outcome = session.add_expense(lunch()).unwrap();

        assert_eq!(outcome, ActionOutcome::Success(ADDED_MESSAGE.to_string()));
        assert_eq!(session.expenses.len(), 2);
        assert_eq!(session.expenses.last(), Some(&lunch()));
    }

    #[test]
    fn test_add_rejects_negative_amount() {
        let mut session = Session::default();
        let mut expense = lunch();
        expense.amount = Money::from_cents(-1);

        assert!(session.add_expense(expense).unwrap_err().is_validation());
        assert!(session.expenses.is_empty());
    }

    #[test]
    fn test_budget_example() {
        let (_temp_dir, store) = create_test_store();
        let mut session = Session::default();

        session
            .apply(Action::SetBudget(Money::from_cents(100000)), &store)
            .unwrap();
        session.apply(Action::AddExpense(lunch()), &store).unwrap();

        let summary = session.summary();
        assert_eq!(summary.total_spent, Money::from_cents(25050));
        assert_eq!(summary.remaining, Money::from_cents(74950));

        let outcome = session.apply(Action::Save, &store).unwrap();
        assert_eq!(outcome, ActionOutcome::Success(SAVED_MESSAGE.to_string()));

        let (reloaded, first_run) = Session::load(&store).unwrap();
        assert!(!first_run);
        assert_eq!(reloaded.expenses.records(), &[lunch()]);
        assert_eq!(reloaded.budget, Money::zero());
    }

    #[test]
    fn test_set_budget_rejects_negative() {
        let mut session = Session::default();
        assert!(session
            .set_budget(Money::from_cents(-100))
            .unwrap_err()
            .is_validation());
        assert_eq!(session.budget, Money::zero());
    }

    #[test]
    fn test_unsaved_edits_do_not_reach_file() {
        let (_temp_dir, store) = create_test_store();
        let mut session = Session::default();
        session.add_expense(lunch()).unwrap();

        let (reloaded, first_run) = Session::load(&store).unwrap();
        assert!(first_run);
        assert!(reloaded.expenses.is_empty());
    }

    #[test]
    fn test_visualize() {
        let mut session = Session::default();
        assert_eq!(
            session.visualize(),
            ActionOutcome::Warning(NOTHING_TO_VISUALIZE.to_string())
        );

        session.add_expense(lunch()).unwrap();
        match session.visualize() {
            ActionOutcome::Chart(chart) => {
                assert_eq!(chart.bars.len(), 1);
                assert_eq!(chart.bars[0].category, Category::Food);
            }
            other => panic!("expected chart, got {:?}", other),
        }
    }
}
