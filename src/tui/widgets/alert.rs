//! Alert widget
//!
//! A bordered message box used for the modal alerts shown after ledger
//! actions (validation errors, warnings, export success).

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::error::{LedgerError, Severity};

/// Type of alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Error message
    Error,
}

impl AlertKind {
    /// Get the color for this alert kind
    pub fn color(&self) -> Color {
        match self {
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }

    /// Get the icon/prefix for this alert kind
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "+",
            Self::Warning => "!",
            Self::Error => "x",
        }
    }

    /// Get the title for this alert kind
    pub fn title(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

impl From<Severity> for AlertKind {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Error => Self::Error,
            Severity::Warning => Self::Warning,
        }
    }
}

/// A modal alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    /// The alert message
    pub message: String,
    /// Type of alert
    pub kind: AlertKind,
}

impl Alert {
    /// Create a new alert
    pub fn new(message: impl Into<String>, kind: AlertKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// Create a success alert
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, AlertKind::Success)
    }
}

impl From<&LedgerError> for Alert {
    fn from(err: &LedgerError) -> Self {
        Self::new(err.to_string(), err.severity().into())
    }
}

/// Widget for rendering an alert
pub struct AlertWidget<'a> {
    alert: &'a Alert,
}

impl<'a> AlertWidget<'a> {
    /// Create a new alert widget
    pub fn new(alert: &'a Alert) -> Self {
        Self { alert }
    }
}

impl<'a> Widget for AlertWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.alert.kind.color();
        let icon = self.alert.kind.icon();
        let title = self.alert.kind.title();

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} {} ", icon, title))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.alert.message.as_str(),
                Style::default().fg(Color::White),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("[Enter]", Style::default().fg(Color::Green)),
                Span::raw(" OK"),
            ]),
        ];

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
