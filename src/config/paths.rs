//! Path management for the finance ledger
//!
//! Resolves where the settings file and activity log live.
//!
//! ## Path Resolution Order
//!
//! 1. Platform config directory from `directories` (e.g. `~/.config/finance-ledger`
//!    on Linux, `%APPDATA%\finance-ledger\config` on Windows)
//! 2. `./.finance-ledger` when no home directory can be determined

use std::path::PathBuf;

use directories::ProjectDirs;

const APP_NAME: &str = "finance-ledger";

/// Manages all paths used by the finance ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    /// Base directory for settings and logs
    base_dir: PathBuf,
}

impl LedgerPaths {
    /// Create a new LedgerPaths instance using the platform config directory
    pub fn new() -> Self {
        let base_dir = ProjectDirs::from("", "", APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(format!(".{}", APP_NAME)));

        Self { base_dir }
    }

    /// Create LedgerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the activity log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }
}

impl Default for LedgerPaths {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
    }

    #[test]
    fn test_default_path_names_app() {
        let paths = LedgerPaths::new();
        let settings_file = paths.settings_file();
        assert!(settings_file.to_string_lossy().contains(APP_NAME));
        assert_eq!(settings_file.parent(), paths.audit_log().parent());
    }
}
