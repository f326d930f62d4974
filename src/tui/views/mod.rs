//! TUI Views module
//!
//! The single screen: title, entry form, transaction table, action bar and
//! status bar, with any active dialog drawn on top.

pub mod form;
pub mod status_bar;
pub mod table;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Application title shown in the header
pub const TITLE: &str = "Personal Finance Manager";

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, layout.header);
    form::render(frame, app, layout.form);
    table::render(frame, app, layout.table);
    render_actions(frame, layout.actions);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match &app.active_dialog {
        ActiveDialog::Alert(alert) => dialogs::alert::render(frame, alert),
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::None => {}
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

fn render_actions(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Yellow);
    let hints = Line::from(vec![
        Span::styled(" [Ctrl+D]", key),
        Span::raw(" Delete Selected  "),
        Span::styled("[Ctrl+E]", key),
        Span::raw(" Export to CSV  "),
        Span::styled("[F1]", key),
        Span::raw(" Help  "),
        Span::styled("[Ctrl+Q]", key),
        Span::raw(" Quit"),
    ]);

    frame.render_widget(Paragraph::new(hints), area);
}
