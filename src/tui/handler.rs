//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, App, FocusedField};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key_event(app, key),
        Event::Key(_) | Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Dialogs are modal
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    if handle_global_key(app, key) {
        return Ok(());
    }

    match app.focused {
        FocusedField::Kind => handle_kind_key(app, key),
        FocusedField::Category | FocusedField::Amount => handle_text_key(app, key),
        FocusedField::Table => handle_table_key(app, key),
    }

    Ok(())
}

/// Keys that work regardless of focus; returns true if the key was consumed
fn handle_global_key(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => app.quit(),
            KeyCode::Char('d') => app.delete_selected(),
            KeyCode::Char('e') => app.export(),
            _ => return false,
        }
        return true;
    }

    match key.code {
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::F(1) => app.open_dialog(ActiveDialog::Help),
        _ => return false,
    }

    true
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Alert(_) => {
            if matches!(
                key.code,
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')
            ) {
                app.close_dialog();
            }
        }
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Handle keys on the Income/Expense selector
fn handle_kind_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down | KeyCode::Char(' ') => {
            app.form.toggle_kind();
        }
        KeyCode::Char('i') | KeyCode::Char('I') => {
            app.form.kind = crate::models::TransactionKind::Income;
        }
        KeyCode::Char('e') | KeyCode::Char('E') => {
            app.form.kind = crate::models::TransactionKind::Expense;
        }
        KeyCode::Enter => app.add_transaction(),
        _ => {}
    }
}

/// Handle keys in the Category and Amount fields
fn handle_text_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Enter {
        app.add_transaction();
        return;
    }

    let Some(input) = app.form.input_mut(app.focused) else {
        return;
    };

    let plain = !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

    match key.code {
        KeyCode::Char(c) if plain => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}

/// Handle keys in the transaction table
fn handle_table_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.move_first(),
        KeyCode::Char('G') | KeyCode::End => app.move_last(),
        KeyCode::Char(' ') => app.selection.toggle_cursor(),
        KeyCode::Esc => app.selection.clear(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('e') => app.export(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}
