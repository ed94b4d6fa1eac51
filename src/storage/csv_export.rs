//! Tabular export of the transaction list.

use std::{io, path::Path};

use serde::Serialize;

use crate::{core::utils::ensure_dir, errors::Result, ledger::Transaction};

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    no: usize,
    #[serde(rename = "type")]
    kind: &'static str,
    amount: f64,
    note: &'a str,
    time: &'a str,
}

/// Writes `no,type,amount,note,time` rows to `writer`, numbering from 1.
/// Returns the number of rows written.
pub fn write_csv<W: io::Write>(transactions: &[Transaction], writer: W) -> Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if transactions.is_empty() {
        csv_writer.write_record(["no", "type", "amount", "note", "time"])?;
    }
    for (position, txn) in transactions.iter().enumerate() {
        csv_writer.serialize(ExportRow {
            no: position + 1,
            kind: txn.kind.as_str(),
            amount: txn.amount,
            note: &txn.note,
            time: &txn.timestamp,
        })?;
    }
    csv_writer.flush()?;
    Ok(transactions.len())
}

/// Exports the transaction list to a CSV file at `path`, replacing it.
pub fn export_csv(transactions: &[Transaction], path: &Path) -> Result<usize> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let file = std::fs::File::create(path)?;
    write_csv(transactions, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::TransactionKind;

    #[test]
    fn rows_are_numbered_from_one() {
        let transactions = vec![
            Transaction::with_timestamp(TransactionKind::Income, 100.0, "gift", "01 Jan 08:00"),
            Transaction::with_timestamp(TransactionKind::Expense, 40.0, "a, b", "02 Jan 09:30"),
        ];
        let mut buffer = Vec::new();
        let written = write_csv(&transactions, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(written, 2);
        assert_eq!(lines[0], "no,type,amount,note,time");
        assert!(lines[1].starts_with("1,pemasukan,100"));
        assert!(lines[2].starts_with("2,pengeluaran,40"));
        assert!(lines[2].contains("\"A, b\""));
    }

    #[test]
    fn empty_list_still_writes_header() {
        let mut buffer = Vec::new();
        assert_eq!(write_csv(&[], &mut buffer).unwrap(), 0);
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.trim(), "no,type,amount,note,time");
    }
}
