//! Custom error types for the finance ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. The user-facing variants double as the
//! messages shown in alert dialogs.

use thiserror::Error;

/// How an error is presented to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Something the user must fix before the action can succeed
    Error,
    /// The action had nothing to act on
    Warning,
}

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Category or amount left blank on the entry form
    #[error("Please fill in all fields.")]
    MissingField,

    /// Amount text is not a finite number
    #[error("Amount must be a number.")]
    InvalidAmount(String),

    /// Delete requested with no rows selected
    #[error("No transaction selected.")]
    NothingSelected,

    /// Export requested with no transactions recorded
    #[error("No transactions to export.")]
    EmptyLedger,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV encoding errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LedgerError {
    /// The alert severity this error is shown with
    pub fn severity(&self) -> Severity {
        match self {
            Self::NothingSelected | Self::EmptyLedger => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Check if this is a form validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingField | Self::InvalidAmount(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            LedgerError::MissingField.to_string(),
            "Please fill in all fields."
        );
        assert_eq!(
            LedgerError::InvalidAmount("abc".into()).to_string(),
            "Amount must be a number."
        );
        assert_eq!(
            LedgerError::NothingSelected.to_string(),
            "No transaction selected."
        );
        assert_eq!(
            LedgerError::EmptyLedger.to_string(),
            "No transactions to export."
        );
    }

    #[test]
    fn test_severity() {
        assert_eq!(LedgerError::MissingField.severity(), Severity::Error);
        assert_eq!(LedgerError::NothingSelected.severity(), Severity::Warning);
        assert_eq!(LedgerError::EmptyLedger.severity(), Severity::Warning);
        assert_eq!(LedgerError::Io("disk".into()).severity(), Severity::Error);
        assert!(LedgerError::InvalidAmount("x".into()).is_validation());
        assert!(!LedgerError::EmptyLedger.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ledger_err: LedgerError = io_err.into();
        assert!(matches!(ledger_err, LedgerError::Io(_)));
    }
}
