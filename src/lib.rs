//! finance-ledger - Terminal-based personal finance ledger
//!
//! Records income and expense entries for the current session, lists them
//! in a table, deletes selected rows and exports everything to CSV.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and read-only settings
//! - `error`: Custom error types
//! - `models`: Transactions and table selection
//! - `ledger`: The in-memory ledger and its add / delete / export operations
//! - `export`: CSV writing
//! - `audit`: Activity log
//! - `tui`: The terminal form, table and dialogs
//!
//! # Example
//!
//! ```rust,no_run
//! use finance_ledger::ledger::Ledger;
//! use finance_ledger::models::TransactionKind;
//!
//! let mut ledger = Ledger::new();
//! ledger.add(TransactionKind::Expense, "Groceries", "42.50")?;
//! ledger.export("transactions.csv")?;
//! # Ok::<(), finance_ledger::LedgerError>(())
//! ```

pub mod audit;
pub mod config;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod tui;

pub use error::{LedgerError, LedgerResult};
pub use ledger::Ledger;
