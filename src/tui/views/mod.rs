//! TUI Views module
//!
//! The sidebar form, the summary metrics, the expense table, the category
//! chart and the status bar.

pub mod chart;
pub mod expenses;
pub mod sidebar;
pub mod status_bar;
pub mod summary;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{toast_rect, AppLayout, MainLayout};
use super::widgets::notification::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    sidebar::render(frame, app, layout.sidebar);

    let main = MainLayout::new(layout.main, app.chart.is_some());
    summary::render(frame, app, main.summary);
    expenses::render(frame, app, main.expenses);
    if let (Some(area), Some(category_chart)) = (main.chart, app.chart.as_ref()) {
        chart::render(frame, category_chart, &app.settings.currency_symbol, area);
    }

    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.notifications.current() {
        let area = toast_rect(40, 4, layout.main);
        frame.render_widget(NotificationWidget::new(notification), area);
    }

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::ConfirmQuit => dialogs::confirm::render(
            frame,
            &format!(
                "{} expense(s) have not been saved.",
                app.session.expenses.len()
            ),
        ),
        ActiveDialog::None => {}
    }
}
