//! Activity log for the finance ledger
//!
//! Records every add, delete and export in an append-only log.
//!
//! - `AuditEntry`: a single log entry with timestamp, operation and the
//!   affected transactions.
//! - `AuditLogger`: writes entries to the log file as JSON lines (JSONL).
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_ledger::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let txn = ledger.add(kind, "Groceries", "42")?;
//! logger.log(&AuditEntry::add(txn))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
