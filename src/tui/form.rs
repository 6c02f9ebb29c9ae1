//! Sidebar form state
//!
//! Holds the budget input and the add-expense fields, with tab navigation
//! between them and conversion of the raw input into domain values.

use chrono::Local;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Expense, Money, DATE_FORMAT};
use crate::tui::widgets::input::TextInput;

/// Which field is currently focused in the sidebar form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    Budget,
    #[default]
    Date,
    Category,
    Amount,
    Description,
}

impl FormField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Budget => Self::Date,
            Self::Date => Self::Category,
            Self::Category => Self::Amount,
            Self::Amount => Self::Description,
            Self::Description => Self::Budget,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Budget => Self::Description,
            Self::Date => Self::Budget,
            Self::Category => Self::Date,
            Self::Amount => Self::Category,
            Self::Description => Self::Amount,
        }
    }

    /// Whether the field belongs to the add-expense group
    pub fn is_expense_field(self) -> bool {
        !matches!(self, Self::Budget)
    }
}

/// State for the sidebar form
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    /// Currently focused field
    pub focused_field: FormField,

    pub budget_input: TextInput,

    pub date_input: TextInput,

    /// Selected category; cycled with Left/Right
    pub category: Category,

    pub amount_input: TextInput,

    pub description_input: TextInput,

    /// Error message to display under the form
    pub error_message: Option<String>,
}

impl Default for ExpenseFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseFormState {
    /// Create a new form with today's date and a zero budget
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        let mut state = Self {
            focused_field: FormField::Date,
            budget_input: TextInput::new()
                .label("Budget")
                .placeholder("0.00")
                .content("0"),
            date_input: TextInput::new()
                .label("Date")
                .placeholder("YYYY-MM-DD")
                .content(today.format(DATE_FORMAT).to_string()),
            category: Category::default(),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            description_input: TextInput::new()
                .label("Description")
                .placeholder("Optional note"),
            error_message: None,
        };
        state.update_focus();
        state
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.set_focus(self.focused_field.next());
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.set_focus(self.focused_field.prev());
    }

    /// Set focus to a specific field
    pub fn set_focus(&mut self, field: FormField) {
        self.focused_field = field;
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.budget_input.focused = self.focused_field == FormField::Budget;
        self.date_input.focused = self.focused_field == FormField::Date;
        self.amount_input.focused = self.focused_field == FormField::Amount;
        self.description_input.focused = self.focused_field == FormField::Description;
    }

    /// Get the focused text input, or `None` on the category selector
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            FormField::Budget => Some(&mut self.budget_input),
            FormField::Date => Some(&mut self.date_input),
            FormField::Category => None,
            FormField::Amount => Some(&mut self.amount_input),
            FormField::Description => Some(&mut self.description_input),
        }
    }

    /// Parse the budget field; an empty field means zero
    pub fn parse_budget(&self) -> ExpenseResult<Money> {
        let raw = self.budget_input.value().trim();
        if raw.is_empty() {
            return Ok(Money::zero());
        }
        let budget = Money::parse(raw)
            .map_err(|e| ExpenseError::Validation(format!("Budget: {}", e)))?;
        if budget.is_negative() {
            return Err(ExpenseError::Validation(
                "Budget must be zero or more".to_string(),
            ));
        }
        Ok(budget)
    }

    /// Build an expense from the current field values
    pub fn build_expense(&self) -> ExpenseResult<Expense> {
        Expense::from_input(
            self.date_input.value(),
            self.category,
            self.amount_input.value(),
            self.description_input.value(),
        )
    }

    /// Prepare for the next entry; date and category are kept
    pub fn reset_after_add(&mut self) {
        self.amount_input.clear();
        self.description_input.clear();
        self.error_message = None;
        self.set_focus(FormField::Amount);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}
