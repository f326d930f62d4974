//! Configuration module for the finance ledger
//!
//! This module provides:
//! - Platform path resolution for the settings file and activity log
//! - Read-only user settings

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
