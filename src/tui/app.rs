//! Application state for the TUI
//!
//! The App struct owns the ledger and all UI state. Event handlers receive
//! it explicitly; there is no global state.

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::settings::Settings;
use crate::error::LedgerError;
use crate::ledger::Ledger;
use crate::models::Selection;

use super::views::form::EntryFormState;
use super::widgets::Alert;

/// Which part of the screen has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedField {
    /// The Income/Expense selector
    Kind,
    /// Category text field
    #[default]
    Category,
    /// Amount text field
    Amount,
    /// The transaction table
    Table,
}

impl FocusedField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Kind => Self::Category,
            Self::Category => Self::Amount,
            Self::Amount => Self::Table,
            Self::Table => Self::Kind,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Kind => Self::Table,
            Self::Category => Self::Kind,
            Self::Amount => Self::Category,
            Self::Table => Self::Amount,
        }
    }

    /// Whether this field is part of the entry form
    pub fn is_form(self) -> bool {
        !matches!(self, Self::Table)
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Alert(Alert),
    Help,
}

/// Main application state
pub struct App {
    /// The transactions recorded this session
    pub ledger: Ledger,

    /// Application settings
    pub settings: Settings,

    /// Activity log, if enabled
    pub audit: Option<AuditLogger>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Which field has focus
    pub focused: FocusedField,

    /// Entry form state
    pub form: EntryFormState,

    /// Selected table rows
    pub selection: Selection,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Status message to display
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance with an empty ledger
    pub fn new(settings: Settings, audit: Option<AuditLogger>) -> Self {
        let mut app = Self {
            ledger: Ledger::new(),
            form: EntryFormState::new(settings.default_kind),
            settings,
            audit,
            should_quit: false,
            focused: FocusedField::default(),
            selection: Selection::new(),
            active_dialog: ActiveDialog::default(),
            status_message: None,
        };
        app.set_focus(FocusedField::default());
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Move keyboard focus
    pub fn set_focus(&mut self, field: FocusedField) {
        self.focused = field;
        self.form.set_focus(field);
    }

    /// Focus the next field
    pub fn focus_next(&mut self) {
        self.set_focus(self.focused.next());
    }

    /// Focus the previous field
    pub fn focus_prev(&mut self) {
        self.set_focus(self.focused.prev());
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Show a modal alert
    pub fn show_alert(&mut self, alert: Alert) {
        self.open_dialog(ActiveDialog::Alert(alert));
    }

    /// Show an error as a modal alert
    pub fn show_error(&mut self, err: &LedgerError) {
        self.show_alert(Alert::from(err));
    }

    /// Move the table cursor up, selecting that row
    pub fn move_up(&mut self) {
        self.selection.move_up(self.ledger.len());
    }

    /// Move the table cursor down, selecting that row
    pub fn move_down(&mut self) {
        self.selection.move_down(self.ledger.len());
    }

    /// Jump to the first row
    pub fn move_first(&mut self) {
        if !self.ledger.is_empty() {
            self.selection.select_only(0);
        }
    }

    /// Jump to the last row
    pub fn move_last(&mut self) {
        if !self.ledger.is_empty() {
            self.selection.select_only(self.ledger.len() - 1);
        }
    }

    /// Add a transaction from the entry form
    pub fn add_transaction(&mut self) {
        let result = self
            .ledger
            .add(
                self.form.kind,
                self.form.category_input.value(),
                self.form.amount_input.value(),
            )
            .map(|txn| (format!("Added {}", txn), AuditEntry::add(txn)));

        match result {
            Ok((status, entry)) => {
                self.form.clear_inputs();
                self.set_focus(FocusedField::Category);
                self.set_status(status);
                self.record(entry);
            }
            Err(e) => {
                if e.is_validation() {
                    self.clear_status();
                }
                self.show_error(&e);
            }
        }
    }

    /// Delete the selected table rows
    pub fn delete_selected(&mut self) {
        match self.ledger.delete_selected(&self.selection) {
            Ok(removed) => {
                self.selection.reset(self.ledger.len());
                self.set_status(format!("Deleted {} transaction(s)", removed.len()));
                self.record(AuditEntry::delete(&removed));
            }
            Err(e) => self.show_error(&e),
        }
    }

    /// Export the ledger to the configured CSV file
    pub fn export(&mut self) {
        match self.ledger.export(&self.settings.export_path) {
            Ok(summary) => {
                self.show_alert(Alert::success(format!(
                    "Transactions exported to {}.",
                    summary.path.display()
                )));
                self.record(AuditEntry::export(&summary));
            }
            Err(e) => self.show_error(&e),
        }
    }

    /// Append an entry to the activity log; failures only reach the status bar
    fn record(&mut self, entry: AuditEntry) {
        let failure = self
            .audit
            .as_ref()
            .and_then(|logger| logger.log(&entry).err());

        if let Some(e) = failure {
            self.set_status(format!("Activity log unavailable: {}", e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::TransactionKind;
    use crate::tui::widgets::AlertKind;
    use tempfile::TempDir;

    fn app_in(temp_dir: &TempDir) -> App {
        let settings = Settings {
            export_path: temp_dir.path().join("transactions.csv"),
            ..Settings::default()
        };
        let audit = AuditLogger::new(temp_dir.path().join("audit.log"));
        App::new(settings, Some(audit))
    }

    fn fill_form(app: &mut App, kind: TransactionKind, category: &str, amount: &str) {
        app.form.kind = kind;
        app.form.category_input = app.form.category_input.clone().content(category);
        app.form.amount_input = app.form.amount_input.clone().content(amount);
    }

    fn alert_kind(app: &App) -> Option<AlertKind> {
        match &app.active_dialog {
            ActiveDialog::Alert(alert) => Some(alert.kind),
            _ => None,
        }
    }

    #[test]
    fn test_focus_cycle() {
        assert_eq!(FocusedField::Kind.next(), FocusedField::Category);
        assert_eq!(FocusedField::Table.next(), FocusedField::Kind);
        assert_eq!(FocusedField::Kind.prev(), FocusedField::Table);
        assert!(FocusedField::Amount.is_form());
        assert!(!FocusedField::Table.is_form());
    }

    #[test]
    fn test_add_transaction_clears_inputs() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_in(&temp_dir);
        fill_form(&mut app, TransactionKind::Expense, "Rent", "950");

        app.add_transaction();

        assert_eq!(app.ledger.len(), 1);
        assert_eq!(app.form.category_input.value(), "");
        assert_eq!(app.form.amount_input.value(), "");
        assert_eq!(app.form.kind, TransactionKind::Expense);
        assert_eq!(app.status_message.as_deref(), Some("Added Expense Rent 950.0"));
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_invalid_amount_shows_error_and_keeps_input() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_in(&temp_dir);
        fill_form(&mut app, TransactionKind::Income, "Salary", "lots");

        app.add_transaction();

        assert!(app.ledger.is_empty());
        assert_eq!(alert_kind(&app), Some(AlertKind::Error));
        assert_eq!(app.form.amount_input.value(), "lots");
    }

    #[test]
    fn test_delete_without_selection_warns() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_in(&temp_dir);
        fill_form(&mut app, TransactionKind::Income, "Salary", "10");
        app.add_transaction();

        app.delete_selected();

        assert_eq!(app.ledger.len(), 1);
        assert_eq!(alert_kind(&app), Some(AlertKind::Warning));
    }

    #[test]
    fn test_delete_selected_row() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_in(&temp_dir);
        for (category, amount) in [("A", "1"), ("B", "2"), ("C", "3")] {
            fill_form(&mut app, TransactionKind::Expense, category, amount);
            app.add_transaction();
        }

        app.move_down();
        app.move_down();
        app.delete_selected();

        let remaining: Vec<_> = app
            .ledger
            .transactions()
            .iter()
            .map(|t| t.category.clone())
            .collect();
        assert_eq!(remaining, vec!["A", "C"]);
        assert!(app.selection.is_empty());
        assert_eq!(app.selection.cursor(), Some(1));
    }

    #[test]
    fn test_export_success_and_audit() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_in(&temp_dir);
        fill_form(&mut app, TransactionKind::Income, "Salary", "2000");
        app.add_transaction();

        app.export();

        assert_eq!(alert_kind(&app), Some(AlertKind::Success));
        assert!(temp_dir.path().join("transactions.csv").exists());

        let entries = app.audit.as_ref().unwrap().read_all().unwrap();
        let ops: Vec<_> = entries.iter().map(|e| e.operation).collect();
        assert_eq!(ops, vec![Operation::Add, Operation::Export]);
    }

    #[test]
    fn test_export_empty_warns() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_in(&temp_dir);

        app.export();

        assert_eq!(alert_kind(&app), Some(AlertKind::Warning));
        assert!(!temp_dir.path().join("transactions.csv").exists());
    }

    #[test]
    fn test_audit_disabled() {
        let mut app = App::new(Settings::default(), None);
        fill_form(&mut app, TransactionKind::Income, "Salary", "5");
        app.add_transaction();
        assert_eq!(app.ledger.len(), 1);
        assert!(app.status_message.is_some());
    }
}
