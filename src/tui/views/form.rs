//! Transaction entry form
//!
//! Type selector, Category and Amount fields, and the Add action.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::TransactionKind;
use crate::tui::app::{App, FocusedField};
use crate::tui::widgets::TextInput;

/// State for the entry form
#[derive(Debug, Clone)]
pub struct EntryFormState {
    /// Selected transaction type
    pub kind: TransactionKind,

    /// Category input
    pub category_input: TextInput,

    /// Amount input
    pub amount_input: TextInput,

    /// Whether the type selector has focus
    pub kind_focused: bool,
}

impl Default for EntryFormState {
    fn default() -> Self {
        Self::new(TransactionKind::default())
    }
}

impl EntryFormState {
    /// Create a new form with the given type preselected
    pub fn new(kind: TransactionKind) -> Self {
        Self {
            kind,
            category_input: TextInput::new()
                .label("Category")
                .placeholder("e.g. Groceries"),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            kind_focused: false,
        }
    }

    /// Update which input has focus
    pub fn set_focus(&mut self, field: FocusedField) {
        self.kind_focused = field == FocusedField::Kind;
        self.category_input.focused = field == FocusedField::Category;
        self.amount_input.focused = field == FocusedField::Amount;
    }

    /// The text input for a field, if it is one
    pub fn input_mut(&mut self, field: FocusedField) -> Option<&mut TextInput> {
        match field {
            FocusedField::Category => Some(&mut self.category_input),
            FocusedField::Amount => Some(&mut self.amount_input),
            FocusedField::Kind | FocusedField::Table => None,
        }
    }

    /// Switch between Income and Expense
    pub fn toggle_kind(&mut self) {
        self.kind = self.kind.toggle();
    }

    /// Clear Category and Amount after a successful add
    pub fn clear_inputs(&mut self) {
        self.category_input.clear();
        self.amount_input.clear();
    }
}

/// Render the entry form
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let border_color = if app.focused.is_form() {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Add Transaction ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(20)])
        .split(rows[0]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(20)])
        .split(rows[1]);

    render_kind_selector(frame, &app.form, top[0]);
    frame.render_widget(&app.form.category_input, top[1]);
    frame.render_widget(&app.form.amount_input, bottom[0]);

    let hint = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Add Transaction"),
    ]);
    frame.render_widget(Paragraph::new(hint), bottom[1]);
}

/// Render the Income/Expense selector
fn render_kind_selector(frame: &mut Frame, form: &EntryFormState, area: Rect) {
    let label_style = if form.kind_focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let mut spans = vec![Span::styled("Type", label_style), Span::raw(": ")];

    for kind in TransactionKind::ALL {
        let style = if kind == form.kind {
            let color = match kind {
                TransactionKind::Income => Color::Green,
                TransactionKind::Expense => Color::Red,
            };
            let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
            if form.kind_focused {
                style.add_modifier(Modifier::REVERSED)
            } else {
                style
            }
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", kind), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_flags() {
        let mut form = EntryFormState::default();
        form.set_focus(FocusedField::Amount);
        assert!(form.amount_input.focused);
        assert!(!form.category_input.focused);
        assert!(!form.kind_focused);

        form.set_focus(FocusedField::Kind);
        assert!(form.kind_focused);
        assert!(form.input_mut(FocusedField::Kind).is_none());
        assert!(form.input_mut(FocusedField::Category).is_some());
    }

    #[test]
    fn test_toggle_and_clear() {
        let mut form = EntryFormState::new(TransactionKind::Expense);
        form.toggle_kind();
        assert_eq!(form.kind, TransactionKind::Income);

        form.category_input.insert('x');
        form.amount_input.insert('1');
        form.clear_inputs();
        assert_eq!(form.category_input.value(), "");
        assert_eq!(form.amount_input.value(), "");
        assert_eq!(form.kind, TransactionKind::Income);
    }
}
