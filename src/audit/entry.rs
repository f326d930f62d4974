//! Audit entry data structures
//!
//! Defines the operations that are recorded and the entry format itself.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ledger::ExportSummary;
use crate::models::Transaction;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// A transaction was added
    Add,
    /// One or more transactions were deleted
    Delete,
    /// The ledger was exported to CSV
    Export,
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Transactions added or removed
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transactions: Vec<Transaction>,

    /// Export destination
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Number of rows affected
    pub count: usize,
}

impl AuditEntry {
    /// Entry for a transaction appended to the ledger
    pub fn add(transaction: &Transaction) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Add,
            transactions: vec![transaction.clone()],
            path: None,
            count: 1,
        }
    }

    /// Entry for rows removed from the ledger
    pub fn delete(removed: &[Transaction]) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            transactions: removed.to_vec(),
            path: None,
            count: removed.len(),
        }
    }

    /// Entry for a completed export
    pub fn export(summary: &ExportSummary) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Export,
            transactions: Vec::new(),
            path: Some(summary.path.clone()),
            count: summary.rows,
        }
    }
}
