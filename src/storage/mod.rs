pub mod csv_export;
pub mod json_backend;

use crate::{errors::Result, ledger::Ledger};

/// Abstraction over persistence backends holding a single ledger snapshot.
pub trait StorageBackend: Send + Sync {
    /// Loads the stored ledger, falling back to an empty one when the snapshot
    /// is missing or unreadable. Never fails outward.
    fn load(&self) -> Ledger;

    /// Replaces the stored snapshot with `ledger`.
    fn save(&self, ledger: &Ledger) -> Result<()>;

    /// Human-readable location of the snapshot, used in messages.
    fn describe(&self) -> String;
}

pub use csv_export::{export_csv, write_csv};
pub use json_backend::{load_ledger_from_path, save_ledger_to_path, JsonStorage};
