use thiserror::Error;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Cannot parse amount: {0}")]
    Parse(String),
    #[error("Amount must be greater than zero (got {0})")]
    InvalidAmount(f64),
    #[error("Insufficient balance: requested {requested:.2}, available {available:.2}")]
    InsufficientFunds { requested: f64, available: f64 },
    #[error("Transaction #{index} does not exist (ledger holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Persistence(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        LedgerError::Persistence(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
