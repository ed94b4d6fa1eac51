use std::fmt;

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Human-readable creation time format, e.g. `05 Mar 2025 14:02:11`.
pub const TIMESTAMP_FORMAT: &str = "%d %b %Y %H:%M:%S";

/// Placeholder used for missing notes and timestamps.
pub const DEFAULT_NOTE: &str = "-";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    #[serde(rename = "pemasukan")]
    Income,
    #[serde(rename = "pengeluaran")]
    Expense,
}

impl TransactionKind {
    /// Label used in the snapshot file, exports and keyword search.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "pemasukan",
            TransactionKind::Expense => "pengeluaran",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single income or expense entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    #[serde(default = "default_label")]
    pub note: String,
    #[serde(rename = "time", default = "default_label")]
    pub timestamp: String,
}

impl Transaction {
    /// Creates a transaction stamped with the current local time.
    pub fn new(kind: TransactionKind, amount: f64, note: &str) -> Self {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        Self::with_timestamp(kind, amount, note, timestamp)
    }

    pub fn with_timestamp(
        kind: TransactionKind,
        amount: f64,
        note: &str,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            amount,
            note: normalize_note(note),
            timestamp: timestamp.into(),
        }
    }

    /// Contribution of this entry to the running balance.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    /// Lower-cased text matched by keyword search.
    pub fn search_text(&self) -> String {
        format!("{} {} {} {}", self.kind, self.note, self.timestamp, self.amount).to_lowercase()
    }
}

/// Trims a note, falls back to `-` when empty, and capitalizes it
/// (first letter upper case, the rest lower case).
pub fn normalize_note(raw: &str) -> String {
    let mut chars = raw.trim().chars();
    match chars.next() {
        None => DEFAULT_NOTE.to_string(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

fn default_label() -> String {
    DEFAULT_NOTE.to_string()
}
