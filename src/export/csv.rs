//! CSV Export functionality
//!
//! Writes the ledger as `Type,Category,Amount` rows. Files are written to a
//! temporary sibling and renamed into place so a failed export never leaves a
//! half-written file behind.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;

/// Header row of every export
pub const CSV_HEADER: [&str; 3] = ["Type", "Category", "Amount"];

/// Line terminator for the current platform
fn platform_terminator() -> csv::Terminator {
    if cfg!(windows) {
        csv::Terminator::CRLF
    } else {
        csv::Terminator::Any(b'\n')
    }
}

/// Write transactions as CSV to any writer
///
/// Returns the number of data rows written (the header is not counted).
pub fn write_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> LedgerResult<usize> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(platform_terminator())
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;

    for txn in transactions {
        let amount = txn.amount_display();
        csv_writer.write_record([txn.kind.as_str(), txn.category.as_str(), amount.as_str()])?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(format!("Failed to flush CSV data: {}", e)))?;

    Ok(transactions.len())
}

/// Export transactions to a CSV file atomically (write to temp, then rename)
pub fn export_transactions_csv<P: AsRef<Path>>(
    transactions: &[Transaction],
    path: P,
) -> LedgerResult<usize> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Export(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path);
    let result = write_then_rename(transactions, &temp_path, path);
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}

/// Write to `temp_path`, sync it, then move it over `path`
///
/// The caller removes `temp_path` if any step fails.
fn write_then_rename(
    transactions: &[Transaction],
    temp_path: &Path,
    path: &Path,
) -> LedgerResult<usize> {
    let file = File::create(temp_path).map_err(|e| {
        LedgerError::Export(format!(
            "Failed to create file {}: {}",
            temp_path.display(),
            e
        ))
    })?;

    let mut writer = BufWriter::new(file);
    let written = write_transactions_csv(transactions, &mut writer)?;

    let file = writer
        .into_inner()
        .map_err(|e| LedgerError::Export(format!("Failed to flush data: {}", e)))?;

    file.sync_all()
        .map_err(|e| LedgerError::Export(format!("Failed to sync data: {}", e)))?;

    fs::rename(temp_path, path).map_err(|e| {
        LedgerError::Export(format!(
            "Failed to write {}: {}",
            path.display(),
            e
        ))
    })?;

    Ok(written)
}

/// `transactions.csv` -> `transactions.csv.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use tempfile::TempDir;

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::new(TransactionKind::Income, "Salary", 2500.0),
            Transaction::new(TransactionKind::Expense, "Groceries", 84.3),
        ]
    }

    #[test]
    fn test_write_transactions_csv() {
        let mut output = Vec::new();
        let count = write_transactions_csv(&sample(), &mut output).unwrap();
        assert_eq!(count, 2);

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Type,Category,Amount",
                "Income,Salary,2500.0",
                "Expense,Groceries,84.3"
            ]
        );
    }

    #[test]
    fn test_platform_line_endings() {
        let mut output = Vec::new();
        write_transactions_csv(&sample(), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        if cfg!(windows) {
            assert!(text.ends_with("84.3\r\n"));
        } else {
            assert!(text.ends_with("84.3\n"));
            assert!(!text.contains('\r'));
        }
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let txns = vec![Transaction::new(
            TransactionKind::Expense,
            "Food, \"fancy\"",
            12.0,
        )];
        let mut output = Vec::new();
        write_transactions_csv(&txns, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Expense,\"Food, \"\"fancy\"\"\",12.0"));

        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[1], "Food, \"fancy\"");
    }

    #[test]
    fn test_export_to_file_replaces_existing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.csv");
        fs::write(&path, "stale contents\nmore\nlines\nhere\n").unwrap();

        export_transactions_csv(&sample(), &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.starts_with("Type,Category,Amount"));
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_export_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("ledger.csv");

        export_transactions_csv(&sample(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_failed_export_removes_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        // A non-empty directory in the way makes the final rename fail
        let path = temp_dir.path().join("transactions.csv");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep.txt"), "x").unwrap();

        let err = export_transactions_csv(&sample(), &path).unwrap_err();

        assert!(matches!(err, LedgerError::Export(_)));
        assert!(!temp_path_for(&path).exists());
        assert!(path.join("keep.txt").exists());
    }

    #[test]
    fn test_temp_path_for() {
        assert_eq!(
            temp_path_for(Path::new("transactions.csv")),
            PathBuf::from("transactions.csv.tmp")
        );
    }
}
