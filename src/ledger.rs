//! The transaction ledger
//!
//! An ordered, in-memory list of transactions for the current session.
//! Insertion order is display order, so a table row index is also the
//! position of its transaction in the ledger.

use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};
use crate::export::export_transactions_csv;
use crate::models::{parse_amount, Selection, Transaction, TransactionKind};

/// Outcome of a successful export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Where the file was written
    pub path: PathBuf,
    /// Number of transaction rows (header excluded)
    pub rows: usize,
}

/// In-memory transaction ledger
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate form input and append a new transaction
    ///
    /// Category and amount are required; the amount must parse as a finite
    /// number. On error the ledger is left untouched.
    pub fn add(
        &mut self,
        kind: TransactionKind,
        category: &str,
        amount: &str,
    ) -> LedgerResult<&Transaction> {
        let category = category.trim();
        if category.is_empty() || amount.trim().is_empty() {
            return Err(LedgerError::MissingField);
        }

        let amount = parse_amount(amount)?;
        self.push(Transaction::new(kind, category, amount));

        Ok(&self.transactions[self.transactions.len() - 1])
    }

    /// Append an already-built transaction
    pub fn push(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Remove the selected rows and return the removed transactions in order
    ///
    /// Rows past the end of the ledger are ignored; if no selected row maps
    /// to a transaction the selection counts as empty.
    pub fn delete_selected(&mut self, selection: &Selection) -> LedgerResult<Vec<Transaction>> {
        if !selection.rows().any(|row| row < self.len()) {
            return Err(LedgerError::NothingSelected);
        }

        let mut removed = Vec::with_capacity(selection.len());
        let mut kept = Vec::with_capacity(self.transactions.len());

        for (row, txn) in std::mem::take(&mut self.transactions).into_iter().enumerate() {
            if selection.contains(row) {
                removed.push(txn);
            } else {
                kept.push(txn);
            }
        }

        self.transactions = kept;
        Ok(removed)
    }

    /// Write every transaction to a CSV file at `path`
    ///
    /// Nothing is written when the ledger is empty.
    pub fn export<P: AsRef<Path>>(&self, path: P) -> LedgerResult<ExportSummary> {
        if self.is_empty() {
            return Err(LedgerError::EmptyLedger);
        }

        let path = path.as_ref();
        let rows = export_transactions_csv(&self.transactions, path)?;

        Ok(ExportSummary {
            path: path.to_path_buf(),
            rows,
        })
    }

    /// All transactions in display order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Transaction at a display row
    pub fn get(&self, row: usize) -> Option<&Transaction> {
        self.transactions.get(row)
    }

    /// Number of transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the ledger has no transactions
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
