use tracing::{info, warn};

use crate::errors::LedgerError;
use crate::ledger::{Ledger, Transaction};
use crate::storage::StorageBackend;

/// Facade that owns the session's ledger and persists every change.
///
/// A failed save is logged and remembered, never propagated: the in-memory
/// ledger stays authoritative until the next successful save.
pub struct LedgerManager {
    ledger: Ledger,
    storage: Box<dyn StorageBackend>,
    last_save_error: Option<String>,
}

impl LedgerManager {
    /// Loads the stored snapshot (or an empty ledger) from `storage`.
    pub fn open(storage: Box<dyn StorageBackend>) -> Self {
        let ledger = storage.load();
        info!(
            location = %storage.describe(),
            transactions = ledger.len(),
            balance = ledger.balance(),
            "ledger opened"
        );
        Self {
            ledger,
            storage,
            last_save_error: None,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn add_income(&mut self, amount: f64, note: &str) -> Result<Transaction, LedgerError> {
        let added = self.ledger.add_income(amount, note)?.clone();
        info!(amount, note = %added.note, "income recorded");
        self.persist();
        Ok(added)
    }

    pub fn add_expense(&mut self, amount: f64, note: &str) -> Result<Transaction, LedgerError> {
        let added = self.ledger.add_expense(amount, note)?.clone();
        info!(amount, note = %added.note, "expense recorded");
        self.persist();
        Ok(added)
    }

    pub fn edit_transaction(
        &mut self,
        index: usize,
        new_amount: Option<f64>,
        new_note: Option<&str>,
    ) -> Result<Transaction, LedgerError> {
        let edited = self
            .ledger
            .edit_transaction(index, new_amount, new_note)?
            .clone();
        info!(index, amount = edited.amount, note = %edited.note, "transaction edited");
        self.persist();
        Ok(edited)
    }

    pub fn delete_transaction(&mut self, index: usize) -> Result<Transaction, LedgerError> {
        let removed = self.ledger.delete_transaction(index)?;
        info!(index, kind = %removed.kind, amount = removed.amount, "transaction deleted");
        self.persist();
        Ok(removed)
    }

    /// Irreversibly drops all data. Callers gate this behind a confirmation.
    pub fn clear_all(&mut self) {
        self.ledger.clear_all();
        info!("ledger cleared");
        self.persist();
    }

    /// Saves explicitly, returning the failure instead of only recording it.
    pub fn save(&mut self) -> Result<(), LedgerError> {
        match self.storage.save(&self.ledger) {
            Ok(()) => {
                self.last_save_error = None;
                Ok(())
            }
            Err(err) => {
                self.last_save_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Message of the most recent failed save, cleared by the next success.
    pub fn last_save_error(&self) -> Option<&str> {
        self.last_save_error.as_deref()
    }

    fn persist(&mut self) {
        if let Err(err) = self.save() {
            warn!(
                location = %self.storage.describe(),
                error = %err,
                "failed to save ledger; keeping in-memory state"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JsonStorage;
    use std::fs;
    use tempfile::TempDir;

    fn manager_in(temp: &TempDir) -> LedgerManager {
        LedgerManager::open(Box::new(JsonStorage::new(temp.path().join("saldo.json"))))
    }

    #[test]
    fn mutations_are_persisted_immediately() {
        let temp = TempDir::new().unwrap();
        let mut manager = manager_in(&temp);
        manager.add_income(100_000.0, "allowance").unwrap();
        manager.add_expense(30_000.0, "books").unwrap();
        manager.edit_transaction(2, Some(40_000.0), None).unwrap();
        manager.delete_transaction(5).unwrap_err();

        let reopened = manager_in(&temp);
        assert_eq!(reopened.ledger(), manager.ledger());
        assert_eq!(reopened.ledger().balance(), 60_000.0);
    }

    #[test]
    fn failed_operation_does_not_touch_snapshot() {
        let temp = TempDir::new().unwrap();
        let mut manager = manager_in(&temp);
        manager.add_income(10_000.0, "coins").unwrap();
        let before = fs::read_to_string(temp.path().join("saldo.json")).unwrap();

        assert!(manager.add_expense(20_000.0, "toy").is_err());
        let after = fs::read_to_string(temp.path().join("saldo.json")).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn clear_all_persists_empty_snapshot() {
        let temp = TempDir::new().unwrap();
        let mut manager = manager_in(&temp);
        manager.add_income(20_000.0, "allowance").unwrap();
        manager.clear_all();

        let reopened = manager_in(&temp);
        assert!(reopened.ledger().is_empty());
        assert_eq!(reopened.ledger().balance(), 0.0);
        let raw = fs::read_to_string(temp.path().join("saldo.json")).unwrap();
        assert!(raw.contains("\"transactions\": []"), "{raw}");
    }

    #[test]
    fn save_failure_is_recorded_and_state_kept() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("not-a-dir");
        fs::write(&blocker, "file").unwrap();
        let storage = JsonStorage::new(blocker.join("saldo.json"));
        let mut manager = LedgerManager::open(Box::new(storage));

        manager.add_income(5_000.0, "gift").unwrap();
        assert_eq!(manager.ledger().balance(), 5_000.0);
        assert!(manager.last_save_error().is_some());
        assert!(manager.save().is_err());
    }
}
