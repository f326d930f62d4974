//! Alert dialog
//!
//! Modal message box shown after a ledger action

use ratatui::Frame;

use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::{Alert, AlertWidget};

/// Render an alert dialog
pub fn render(frame: &mut Frame, alert: &Alert) {
    let area = centered_rect_fixed(dialog_width(alert), 7, frame.area());

    frame.render_widget(AlertWidget::new(alert), area);
}

/// Message width plus borders and padding, kept between 30 and 70 columns
fn dialog_width(alert: &Alert) -> u16 {
    u16::try_from(alert.message.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(6)
        .clamp(30, 70)
}
