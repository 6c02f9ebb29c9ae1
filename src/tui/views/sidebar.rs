//! Sidebar view
//!
//! Budget field on top, the add-expense form below it.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::Category;
use crate::tui::app::{App, FocusedPanel, InputMode};
use crate::tui::form::FormField;
use crate::tui::widgets::input::TextInput;

const LABEL_WIDTH: usize = 13;

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Budget
            Constraint::Min(8),    // Add expense
        ])
        .split(area);

    render_budget(frame, app, chunks[0]);
    render_expense_form(frame, app, chunks[1]);
}

fn border_color(app: &App, group_active: bool) -> Color {
    if app.focused_panel != FocusedPanel::Sidebar {
        Color::DarkGray
    } else if group_active {
        Color::Cyan
    } else {
        Color::White
    }
}

fn render_budget(frame: &mut Frame, app: &mut App, area: Rect) {
    let active = app.form.focused_field == FormField::Budget;
    let block = Block::default()
        .title(" Budget ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(app, active)));

    let line = input_line(
        &app.form.budget_input,
        app.input_mode == InputMode::Editing,
        &app.settings.currency_symbol,
    );
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_expense_form(frame: &mut Frame, app: &mut App, area: Rect) {
    let active = app.form.focused_field.is_expense_field();
    let block = Block::default()
        .title(" Add Expense ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(app, active)));

    let editing = app.input_mode == InputMode::Editing;
    let form = &app.form;

    let mut lines = vec![
        input_line(&form.date_input, editing, ""),
        Line::from(""),
        category_line(form.category, form.focused_field == FormField::Category),
        Line::from(""),
        input_line(&form.amount_input, editing, &app.settings.currency_symbol),
        Line::from(""),
        input_line(&form.description_input, editing, ""),
        Line::from(""),
    ];

    if let Some(ref error) = form.error_message {
        lines.push(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        )));
        lines.push(Line::from(""));
    }

    let hints = if editing {
        "Enter:Add  Tab:Next  Esc:Done"
    } else {
        "a:Add  b:Budget  s:Save  v:Chart"
    };
    lines.push(Line::from(Span::styled(
        hints,
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn label_span(label: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    Span::styled(format!("{:<width$}", format!("{}:", label), width = LABEL_WIDTH), style)
}

/// One labelled input line, with a block cursor while it is being edited
fn input_line(input: &TextInput, editing: bool, prefix: &str) -> Line<'static> {
    let mut spans = vec![label_span(&input.label, input.focused)];

    if !prefix.is_empty() {
        spans.push(Span::styled(
            prefix.to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    }

    if input.focused && editing {
        let (before, at, after) = input.split_at_cursor();
        let cursor_style = Style::default().bg(Color::White).fg(Color::Black);
        spans.push(Span::raw(before));
        spans.push(Span::styled(
            at.map(String::from).unwrap_or_else(|| " ".to_string()),
            cursor_style,
        ));
        spans.push(Span::raw(after));
    } else if input.content.is_empty() {
        spans.push(Span::styled(
            input.placeholder.clone(),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(
            input.content.clone(),
            Style::default().fg(Color::White),
        ));
    }

    Line::from(spans)
}

fn category_line(category: Category, focused: bool) -> Line<'static> {
    let value_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let arrow_style = Style::default().fg(if focused { Color::Cyan } else { Color::DarkGray });

    Line::from(vec![
        label_span("Category", focused),
        Span::styled("◀ ", arrow_style),
        Span::styled(category.name(), value_style),
        Span::styled(" ▶", arrow_style),
    ])
}
