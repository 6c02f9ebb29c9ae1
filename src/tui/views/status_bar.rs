//! Status bar view
//!
//! Shows the backing file, record count, unsaved marker and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, InputMode};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![];

    let (mode, mode_color) = match app.input_mode {
        InputMode::Normal => (" NORMAL ", Color::Blue),
        InputMode::Editing => (" EDIT ", Color::Green),
    };
    spans.push(Span::styled(
        mode,
        Style::default()
            .fg(Color::Black)
            .bg(mode_color)
            .add_modifier(Modifier::BOLD),
    ));

    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        app.store.path().display().to_string(),
        Style::default().fg(Color::Cyan),
    ));

    spans.push(Span::raw(" │ "));
    spans.push(Span::styled(
        format!("{} record(s)", app.session.expenses.len()),
        Style::default().fg(Color::White),
    ));

    if app.unsaved_changes {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            "[unsaved]",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
    }

    let hints = " q:Quit  ?:Help  s:Save  v:Chart ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
