//! Ledger domain model: transactions and the balance they produce.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod transaction;

pub use ledger::Ledger;
pub use transaction::{
    normalize_note, Transaction, TransactionKind, DEFAULT_NOTE, TIMESTAMP_FORMAT,
};
