//! Help dialog
//!
//! Keyboard shortcuts, grouped by mode

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 80, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        heading("Global Keys"),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("?", "Show this help"),
        key_line("s / Ctrl+s", "Save expenses to JSON"),
        key_line("v", "Visualize expenses by category"),
        key_line("c / Esc", "Hide the chart"),
        key_line("Tab", "Switch panel focus"),
        Line::from(""),
        heading("Form"),
        Line::from(""),
        key_line("a / n", "Start a new expense"),
        key_line("b", "Edit the budget"),
        key_line("Enter / i", "Edit the selected field"),
        key_line("j / k", "Move between fields"),
        Line::from(""),
        heading("While Editing"),
        Line::from(""),
        key_line("Tab / S-Tab", "Next / previous field"),
        key_line("← / →", "Change category"),
        key_line("Enter", "Add expense or apply budget"),
        key_line("Esc", "Stop editing"),
        Line::from(""),
        heading("Expense Table"),
        Line::from(""),
        key_line("j / k", "Move selection down/up"),
        key_line("g / G", "Go to top/bottom"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )]),
    ]
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
