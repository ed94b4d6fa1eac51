use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::{
    core::utils::ensure_dir,
    currency::validate_positive,
    errors::{LedgerError, Result},
    ledger::Ledger,
};

use super::StorageBackend;

const TMP_SUFFIX: &str = "tmp";

/// Stores the whole ledger as one pretty-printed JSON document.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Strict variant of [`StorageBackend::load`]: `Ok(None)` when no snapshot
    /// exists yet, `Err` when it exists but cannot be read or parsed.
    pub fn try_load(&self) -> Result<Option<Ledger>> {
        if !self.path.exists() {
            return Ok(None);
        }
        load_ledger_from_path(&self.path).map(Some)
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> Ledger {
        let mut ledger = match self.try_load() {
            Ok(Some(ledger)) => ledger,
            Ok(None) => {
                debug!(path = %self.path.display(), "no snapshot found, starting empty");
                return Ledger::new();
            }
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "unreadable snapshot, starting empty"
                );
                return Ledger::new();
            }
        };
        if let Some(stale) = ledger.repair_balance() {
            warn!(
                stored = stale,
                computed = ledger.balance(),
                "stored balance disagreed with transactions; using computed balance"
            );
        }
        debug!(
            path = %self.path.display(),
            transactions = ledger.len(),
            "snapshot loaded"
        );
        ledger
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        save_ledger_to_path(ledger, &self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Writes the ledger next to `path` first, then renames it into place so a
/// failed write never truncates the previous snapshot.
pub fn save_ledger_to_path(ledger: &Ledger, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let json = serde_json::to_string_pretty(ledger)?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Reads a snapshot, rejecting one that holds a non-positive amount.
pub fn load_ledger_from_path(path: &Path) -> Result<Ledger> {
    let data = fs::read_to_string(path)?;
    let ledger: Ledger = serde_json::from_str(&data)?;
    for (position, txn) in ledger.transactions().iter().enumerate() {
        validate_positive(txn.amount).map_err(|_| {
            LedgerError::Persistence(format!(
                "transaction #{} has invalid amount {}",
                position + 1,
                txn.amount
            ))
        })?;
    }
    Ok(ledger)
}

pub(crate) fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

pub(crate) fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
