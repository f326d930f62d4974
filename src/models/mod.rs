//! Core data models for the finance ledger
//!
//! The ledger's only entity is the transaction; the selection tracks which
//! table rows the user has picked.

pub mod selection;
pub mod transaction;

pub use selection::Selection;
pub use transaction::{format_amount, parse_amount, Transaction, TransactionKind};
