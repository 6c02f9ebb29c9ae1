//! Budget summary view
//!
//! Three metrics side by side: budget, total spent, remaining.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;

/// Render the summary metrics
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let summary = app.session.summary();
    let symbol = app.settings.currency_symbol.as_str();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let metrics = [
        ("Budget", summary.budget.format_with_symbol(symbol), Color::White),
        (
            "Total Spent",
            summary.total_spent.format_with_symbol(symbol),
            Color::Yellow,
        ),
        (
            "Budget Remaining",
            summary.remaining.format_with_symbol(symbol),
            Color::White,
        ),
    ];

    for ((label, value, color), chunk) in metrics.into_iter().zip(chunks.iter()) {
        let block = Block::default()
            .title(format!(" {} ", label))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let line = Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));

        frame.render_widget(Paragraph::new(line).block(block), *chunk);
    }
}
