//! Transaction table view
//!
//! Lists the ledger in insertion order with the current selection marked.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::TransactionKind;
use crate::tui::app::{App, FocusedField};

/// Render the transaction table
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focused == FocusedField::Table;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(format!(" Transactions ({}) ", app.ledger.len()))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if app.ledger.is_empty() {
        let text = Paragraph::new("No transactions. Fill in the form and press Enter.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(2),  // Selection marker
        Constraint::Length(10), // Type
        Constraint::Min(20),    // Category
        Constraint::Length(16), // Amount
    ];

    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("Type").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = app
        .ledger
        .transactions()
        .iter()
        .enumerate()
        .map(|(row, txn)| {
            let selected = app.selection.contains(row);
            let marker = if selected { "*" } else { "" };

            let kind_style = match txn.kind {
                TransactionKind::Income => Style::default().fg(Color::Green),
                TransactionKind::Expense => Style::default().fg(Color::Red),
            };

            let row_style = if selected {
                Style::default().bg(Color::Blue)
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(marker).style(Style::default().fg(Color::Yellow)),
                Cell::from(txn.kind.as_str()).style(kind_style),
                Cell::from(truncate_string(&txn.category, 40)),
                Cell::from(txn.amount_display()),
            ])
            .style(row_style)
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(if is_focused {
            Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default()
        })
        .highlight_symbol("> ");

    let mut state = TableState::default();
    state.select(app.selection.cursor());

    frame.render_stateful_widget(table, area, &mut state);
}

/// Truncate a string to a maximum number of characters
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
