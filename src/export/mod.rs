//! Export module for the finance ledger
//!
//! The only export format is CSV, which spreadsheets open directly.

pub mod csv;

pub use self::csv::{export_transactions_csv, write_transactions_csv, CSV_HEADER};
