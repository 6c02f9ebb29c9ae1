//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, App, FocusedPanel, InputMode};
use super::event::Event;
use super::form::FormField;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Windows reports releases as well as presses
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => {
                app.request_quit();
                return Ok(());
            }
            KeyCode::Char('s') => {
                app.save();
                return Ok(());
            }
            _ => {}
        }
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Editing => handle_editing_key(app, key),
    }
}

/// Ctrl or Alt held with the key
fn is_chord(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char(_) if is_chord(key) => {}
        KeyCode::Char('q') | KeyCode::Char('Q') => app.request_quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Tab => app.toggle_panel_focus(),

        KeyCode::Char('s') => app.save(),
        KeyCode::Char('v') => app.visualize(),
        KeyCode::Char('c') | KeyCode::Esc => app.chart = None,

        KeyCode::Char('a') | KeyCode::Char('n') => app.start_editing(FormField::Date),
        KeyCode::Char('b') => app.start_editing(FormField::Budget),

        _ => match app.focused_panel {
            FocusedPanel::Sidebar => handle_sidebar_key(app, key),
            FocusedPanel::Main => handle_main_panel_key(app, key),
        },
    }

    Ok(())
}

/// Handle keys when the sidebar is focused but not being edited
fn handle_sidebar_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('i') => {
            let field = app.form.focused_field;
            app.start_editing(field);
        }
        KeyCode::Char('j') | KeyCode::Down => app.form.next_field(),
        KeyCode::Char('k') | KeyCode::Up => app.form.prev_field(),
        KeyCode::Char('l') | KeyCode::Right => app.focused_panel = FocusedPanel::Main,
        _ => {}
    }
}

/// Handle keys when the main panel is focused
fn handle_main_panel_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.selected_expense_index = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.selected_expense_index = app.session.expenses.len().saturating_sub(1);
        }
        KeyCode::Char('h') | KeyCode::Left => app.focused_panel = FocusedPanel::Sidebar,
        _ => {}
    }
}

/// Handle keys while editing the sidebar form
fn handle_editing_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let field = app.form.focused_field;

    match key.code {
        // Unbound chords must not type their letter
        KeyCode::Char(_) if is_chord(key) => {}
        KeyCode::Esc => {
            if field == FormField::Budget {
                app.apply_budget_input();
            }
            app.stop_editing();
        }
        KeyCode::Tab | KeyCode::Down => {
            if field == FormField::Budget {
                app.apply_budget_input();
            }
            app.form.next_field();
        }
        KeyCode::BackTab | KeyCode::Up => {
            if field == FormField::Budget {
                app.apply_budget_input();
            }
            app.form.prev_field();
        }
        KeyCode::Enter => {
            if field == FormField::Budget {
                app.apply_budget_input();
            } else {
                app.submit_expense();
            }
        }
        KeyCode::Left if field == FormField::Category => {
            app.form.category = app.form.category.prev();
        }
        KeyCode::Right | KeyCode::Char(' ') if field == FormField::Category => {
            app.form.category = app.form.category.next();
        }
        code => {
            if let Some(input) = app.form.focused_input() {
                match code {
                    KeyCode::Char(c) => input.insert(c),
                    KeyCode::Backspace => input.backspace(),
                    KeyCode::Delete => input.delete(),
                    KeyCode::Left => input.move_left(),
                    KeyCode::Right => input.move_right(),
                    KeyCode::Home => input.move_start(),
                    KeyCode::End => input.move_end(),
                    _ => {}
                }
                app.form.clear_error();
            }
        }
    }

    Ok(())
}

/// Handle keys when a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => {
            // Close help on any key
            app.close_dialog();
        }
        ActiveDialog::ConfirmQuit => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                app.close_dialog();
                app.quit();
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                app.close_dialog();
                app.save();
                if !app.unsaved_changes {
                    app.quit();
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.close_dialog();
            }
            _ => {}
        },
        ActiveDialog::None => {}
    }
    Ok(())
}
