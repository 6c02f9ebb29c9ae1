//! Application state for the TUI
//!
//! The App struct holds the session plus everything needed for rendering and
//! handling events. Every user action goes through [`App::dispatch`], which
//! runs the matching session handler and turns the outcome into what the
//! screen shows.

use crate::config::Settings;
use crate::reports::CategoryChart;
use crate::services::{Action, ActionOutcome, Session};
use crate::storage::ExpenseStore;

use super::form::{ExpenseFormState, FormField};
use super::widgets::notification::{Notification, NotificationQueue};

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Sidebar,
    Main,
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    /// Quit requested with unsaved changes
    ConfirmQuit,
}

/// Main application state
pub struct App<'a> {
    /// Backing file
    pub store: &'a ExpenseStore,

    /// Application settings
    pub settings: &'a Settings,

    /// Expense table and budget
    pub session: Session,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Sidebar form state
    pub form: ExpenseFormState,

    /// Selected row in the expense table
    pub selected_expense_index: usize,

    /// Chart from the last visualize action; cleared when the table changes
    pub chart: Option<CategoryChart>,

    /// Toast notifications
    pub notifications: NotificationQueue,

    /// Table changed since the last load or save
    pub unsaved_changes: bool,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(store: &'a ExpenseStore, settings: &'a Settings, session: Session) -> Self {
        Self {
            store,
            settings,
            session,
            should_quit: false,
            focused_panel: FocusedPanel::default(),
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            form: ExpenseFormState::new(),
            selected_expense_index: 0,
            chart: None,
            notifications: NotificationQueue::new(),
            unsaved_changes: false,
        }
    }

    /// Quit immediately
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Quit, asking first when there are unsaved changes
    pub fn request_quit(&mut self) {
        if self.unsaved_changes {
            self.open_dialog(ActiveDialog::ConfirmQuit);
        } else {
            self.quit();
        }
    }

    /// Show a notification
    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Run an action against the session and reflect the outcome
    ///
    /// Errors become error notifications; the session keeps running.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let changes_table = matches!(action, Action::AddExpense(_));
        let saves = matches!(action, Action::Save);

        match self.session.apply(action, self.store) {
            Ok(outcome) => {
                if changes_table {
                    self.unsaved_changes = true;
                    self.chart = None;
                }
                if saves {
                    self.unsaved_changes = false;
                }
                self.show_outcome(outcome);
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "action failed");
                self.notify(Notification::from(&e));
                false
            }
        }
    }

    fn show_outcome(&mut self, outcome: ActionOutcome) {
        match outcome {
            ActionOutcome::Updated => {}
            ActionOutcome::Success(message) => self.notify(Notification::success(message)),
            ActionOutcome::Warning(message) => {
                self.chart = None;
                self.notify(Notification::warning(message));
            }
            ActionOutcome::Chart(chart) => self.chart = Some(chart),
        }
    }

    /// Add the expense described by the form
    pub fn submit_expense(&mut self) {
        match self.form.build_expense() {
            Ok(expense) => {
                if self.dispatch(Action::AddExpense(expense)) {
                    self.form.reset_after_add();
                    self.selected_expense_index = self.session.expenses.len().saturating_sub(1);
                }
            }
            Err(e) => {
                self.form.set_error(e.to_string());
                self.notify(Notification::from(&e));
            }
        }
    }

    /// Apply the budget field to the session
    ///
    /// Invalid input leaves the current budget in place and shows the error
    /// under the form.
    pub fn apply_budget_input(&mut self) {
        match self.form.parse_budget() {
            Ok(budget) => {
                if self.dispatch(Action::SetBudget(budget)) {
                    self.form.clear_error();
                }
            }
            Err(e) => self.form.set_error(e.to_string()),
        }
    }

    /// Write the table to the backing file
    pub fn save(&mut self) {
        self.dispatch(Action::Save);
    }

    /// Build the category chart
    pub fn visualize(&mut self) {
        self.dispatch(Action::Visualize);
    }

    /// Start editing the sidebar form at `field`
    pub fn start_editing(&mut self, field: FormField) {
        self.focused_panel = FocusedPanel::Sidebar;
        self.input_mode = InputMode::Editing;
        self.form.set_focus(field);
    }

    /// Stop editing and return to normal mode
    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Toggle focus between sidebar and main panel
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Sidebar => FocusedPanel::Main,
            FocusedPanel::Main => FocusedPanel::Sidebar,
        };
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Move table selection up
    pub fn move_up(&mut self) {
        self.selected_expense_index = self.selected_expense_index.saturating_sub(1);
    }

    /// Move table selection down
    pub fn move_down(&mut self) {
        if self.selected_expense_index + 1 < self.session.expenses.len() {
            self.selected_expense_index += 1;
        }
    }

    /// Drop notifications that have been shown long enough
    pub fn tick(&mut self) {
        self.notifications.remove_expired();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::services::session::{ADDED_MESSAGE, NOTHING_TO_VISUALIZE, SAVED_MESSAGE};
    use tempfile::TempDir;

    fn setup() -> (TempDir, ExpenseStore, Settings) {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.json"));
        (temp_dir, store, Settings::default())
    }

    fn fill_lunch(app: &mut App) {
        app.form.date_input.set_value("2024-01-01");
        app.form.category = crate::models::Category::Food;
        app.form.amount_input.set_value("250.50");
        app.form.description_input.set_value("Lunch");
    }

    #[test]
    fn test_submit_expense_adds_and_marks_unsaved() {
        let (_temp_dir, store, settings) = setup();
        let mut app = App::new(&store, &settings, Session::default());
        fill_lunch(&mut app);

        app.submit_expense();

        assert_eq!(app.session.expenses.len(), 1);
        assert!(app.unsaved_changes);
        assert_eq!(app.notifications.current().unwrap().message, ADDED_MESSAGE);
        assert!(app.form.amount_input.value().is_empty());
    }

    #[test]
    fn test_submit_invalid_expense_keeps_table() {
        let (_temp_dir, store, settings) = setup();
        let mut app = App::new(&store, &settings, Session::default());
        app.form.date_input.set_value("not a date");

        app.submit_expense();

        assert!(app.session.expenses.is_empty());
        assert!(app.form.error_message.is_some());
        assert!(!app.unsaved_changes);
    }

    #[test]
    fn test_save_clears_unsaved_flag() {
        let (_temp_dir, store, settings) = setup();
        let mut app = App::new(&store, &settings, Session::default());
        fill_lunch(&mut app);
        app.submit_expense();

        app.save();

        assert!(!app.unsaved_changes);
        assert!(store.path().exists());
        assert_eq!(app.notifications.current().unwrap().message, SAVED_MESSAGE);
    }

    #[test]
    fn test_budget_input() {
        let (_temp_dir, store, settings) = setup();
        let mut app = App::new(&store, &settings, Session::default());

        app.form.budget_input.set_value("1000");
        app.apply_budget_input();
        assert_eq!(app.session.budget, Money::from_cents(100000));

        app.form.budget_input.set_value("oops");
        app.apply_budget_input();
        assert_eq!(app.session.budget, Money::from_cents(100000));
        assert!(app.form.error_message.is_some());
    }

    #[test]
    fn test_visualize_empty_warns() {
        let (_temp_dir, store, settings) = setup();
        let mut app = App::new(&store, &settings, Session::default());

        app.visualize();

        assert!(app.chart.is_none());
        assert_eq!(
            app.notifications.current().unwrap().message,
            NOTHING_TO_VISUALIZE
        );
    }

    #[test]
    fn test_adding_clears_stale_chart() {
        let (_temp_dir, store, settings) = setup();
        let mut app = App::new(&store, &settings, Session::default());
        fill_lunch(&mut app);
        app.submit_expense();
        app.visualize();
        assert!(app.chart.is_some());

        fill_lunch(&mut app);
        app.submit_expense();
        assert!(app.chart.is_none());
    }

    #[test]
    fn test_request_quit_asks_when_unsaved() {
        let (_temp_dir, store, settings) = setup();
        let mut app = App::new(&store, &settings, Session::default());

        fill_lunch(&mut app);
        app.submit_expense();
        app.request_quit();
        assert!(!app.should_quit);
        assert_eq!(app.active_dialog, ActiveDialog::ConfirmQuit);

        app.close_dialog();
        app.save();
        app.request_quit();
        assert!(app.should_quit);
    }

    #[test]
    fn test_selection_bounds() {
        let (_temp_dir, store, settings) = setup();
        let mut app = App::new(&store, &settings, Session::default());
        app.move_down();
        assert_eq!(app.selected_expense_index, 0);

        fill_lunch(&mut app);
        app.submit_expense();
        fill_lunch(&mut app);
        app.submit_expense();
        assert_eq!(app.selected_expense_index, 1);

        app.move_down();
        assert_eq!(app.selected_expense_index, 1);
        app.move_up();
        app.move_up();
        assert_eq!(app.selected_expense_index, 0);
    }
}
