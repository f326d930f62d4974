//! Transaction model
//!
//! A transaction is a single income or expense entry. It has no identity
//! beyond its position in the ledger.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::LedgerError;

/// Whether a transaction brings money in or takes it out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TransactionKind {
    /// Money coming in
    #[default]
    Income,
    /// Money going out
    Expense,
}

impl TransactionKind {
    /// All kinds, in the order the form offers them
    pub const ALL: [TransactionKind; 2] = [Self::Income, Self::Expense];

    /// The other kind (used by the form's toggle)
    pub fn toggle(self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }

    /// Label as shown in the table and the export
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Income or expense
    pub kind: TransactionKind,

    /// Free-form category label
    pub category: String,

    /// Amount as entered
    pub amount: f64,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(kind: TransactionKind, category: impl Into<String>, amount: f64) -> Self {
        Self {
            kind,
            category: category.into(),
            amount,
        }
    }

    /// Amount formatted the way it is displayed and exported
    pub fn amount_display(&self) -> String {
        format_amount(self.amount)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.kind, self.category, self.amount_display())
    }
}

/// Parse user-entered amount text
///
/// Surrounding whitespace is ignored. Anything that is not a finite number is
/// rejected.
pub fn parse_amount(input: &str) -> Result<f64, LedgerError> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(LedgerError::InvalidAmount(trimmed.to_string())),
    }
}

/// Format an amount using the shortest representation that round-trips,
/// keeping one decimal place for whole numbers (`50` is shown as `50.0`).
pub fn format_amount(amount: f64) -> String {
    if amount.is_finite() && amount.fract() == 0.0 && amount.abs() < 1e16 {
        format!("{:.1}", amount)
    } else {
        format!("{}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(TransactionKind::Income.to_string(), "Income");
        assert_eq!(TransactionKind::Expense.to_string(), "Expense");
    }

    #[test]
    fn test_kind_toggle() {
        assert_eq!(TransactionKind::default(), TransactionKind::Income);
        assert_eq!(TransactionKind::Income.toggle(), TransactionKind::Expense);
        assert_eq!(TransactionKind::Expense.toggle(), TransactionKind::Income);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.5").unwrap(), 12.5);
        assert_eq!(parse_amount("  100 ").unwrap(), 100.0);
        assert_eq!(parse_amount("-3").unwrap(), -3.0);
        assert_eq!(parse_amount("1e3").unwrap(), 1000.0);
    }

    #[test]
    fn test_parse_amount_rejects_non_numbers() {
        assert!(matches!(
            parse_amount("abc"),
            Err(LedgerError::InvalidAmount(_))
        ));
        assert!(parse_amount("12,50").is_err());
        assert!(parse_amount("NaN").is_err());
        assert!(parse_amount("inf").is_err());
        assert!(parse_amount("").is_err());
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(50.0), "50.0");
        assert_eq!(format_amount(12.5), "12.5");
        assert_eq!(format_amount(-7.0), "-7.0");
        assert_eq!(format_amount(0.1), "0.1");
        assert_eq!(format_amount(1234.56), "1234.56");
    }

    #[test]
    fn test_transaction_display() {
        let txn = Transaction::new(TransactionKind::Expense, "Groceries", 42.0);
        assert_eq!(txn.to_string(), "Expense Groceries 42.0");
    }
}
