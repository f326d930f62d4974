//! User settings for the finance ledger
//!
//! Settings are read from `config.json` in the base directory if it exists.
//! Every field has a default, so a partial file is fine. The application
//! never writes this file itself.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::TransactionKind;

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Where "Export to CSV" writes (relative paths resolve against the
    /// working directory)
    #[serde(default = "default_export_path")]
    pub export_path: PathBuf,

    /// Whether add/delete/export are recorded in the activity log (off
    /// unless enabled in `config.json`)
    #[serde(default = "default_audit_log")]
    pub audit_log: bool,

    /// Type preselected on the entry form
    #[serde(default)]
    pub default_kind: TransactionKind,
}

fn default_export_path() -> PathBuf {
    PathBuf::from("transactions.csv")
}

fn default_audit_log() -> bool {
    false
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            export_path: default_export_path(),
            audit_log: default_audit_log(),
            default_kind: TransactionKind::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_default(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents).map_err(|e| {
            LedgerError::Config(format!(
                "Failed to parse settings file {}: {}",
                settings_path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.export_path, PathBuf::from("transactions.csv"));
        assert!(!settings.audit_log);
        assert_eq!(settings.default_kind, TransactionKind::Income);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_default(&paths).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{ "export_path": "out/ledger.csv", "default_kind": "Expense" }"#,
        )
        .unwrap();

        let settings = Settings::load_or_default(&paths).unwrap();
        assert_eq!(settings.export_path, PathBuf::from("out/ledger.csv"));
        assert_eq!(settings.default_kind, TransactionKind::Expense);
        assert!(!settings.audit_log);
    }

    #[test]
    fn test_audit_log_opt_in() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{ "audit_log": true }"#).unwrap();

        let settings = Settings::load_or_default(&paths).unwrap();
        assert!(settings.audit_log);
        assert_eq!(settings.export_path, PathBuf::from("transactions.csv"));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let err = Settings::load_or_default(&paths).unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }
}
