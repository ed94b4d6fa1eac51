use serde::{Deserialize, Serialize};

use crate::currency::validate_positive;
use crate::errors::{LedgerError, Result};

use super::transaction::{normalize_note, Transaction, TransactionKind};

const BALANCE_TOLERANCE: f64 = 1e-6;

/// Running balance plus the ordered list of transactions that produced it.
///
/// Transactions are addressed by their 1-based position, so deleting an entry
/// renumbers every later one. Every successful mutation leaves
/// `balance == sum(income) - sum(expense)`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Ledger {
    #[serde(rename = "saldo", default)]
    balance: f64,
    #[serde(default)]
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Looks up a transaction by its 1-based position.
    pub fn transaction(&self, index: usize) -> Option<&Transaction> {
        index
            .checked_sub(1)
            .and_then(|position| self.transactions.get(position))
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn add_income(&mut self, amount: f64, note: &str) -> Result<&Transaction> {
        self.push(Transaction::new(TransactionKind::Income, amount, note))
    }

    /// Records an expense; fails without touching state when it would overdraw.
    pub fn add_expense(&mut self, amount: f64, note: &str) -> Result<&Transaction> {
        self.push(Transaction::new(TransactionKind::Expense, amount, note))
    }

    /// Appends an already-built transaction, applying its balance effect.
    /// Amount and funds are checked before anything changes.
    pub fn push(&mut self, transaction: Transaction) -> Result<&Transaction> {
        validate_positive(transaction.amount)?;
        if transaction.kind == TransactionKind::Expense {
            self.ensure_covers(transaction.amount, self.balance)?;
        }
        self.balance += transaction.signed_amount();
        if self.balance.abs() < BALANCE_TOLERANCE {
            self.balance = 0.0;
        }
        self.transactions.push(transaction);
        Ok(&self.transactions[self.transactions.len() - 1])
    }

    /// Replaces the amount and/or note of the transaction at `index`.
    ///
    /// The timestamp is kept. The balance is recomputed from the full list
    /// afterwards. An expense may not grow beyond what the balance covered
    /// before it was recorded.
    pub fn edit_transaction(
        &mut self,
        index: usize,
        new_amount: Option<f64>,
        new_note: Option<&str>,
    ) -> Result<&Transaction> {
        let position = self.position(index)?;
        if let Some(amount) = new_amount {
            validate_positive(amount)?;
            let current = &self.transactions[position];
            if current.kind == TransactionKind::Expense {
                let available = self.balance + current.amount;
                self.ensure_covers(amount, available)?;
            }
        }

        let transaction = &mut self.transactions[position];
        if let Some(amount) = new_amount {
            transaction.amount = amount;
        }
        if let Some(note) = new_note {
            transaction.note = normalize_note(note);
        }
        self.recompute_balance();
        Ok(&self.transactions[position])
    }

    /// Removes the transaction at `index` and reverses its balance effect.
    pub fn delete_transaction(&mut self, index: usize) -> Result<Transaction> {
        let position = self.position(index)?;
        let removed = self.transactions.remove(position);
        self.balance -= removed.signed_amount();
        Ok(removed)
    }

    /// Fails with `InsufficientFunds` when an expense of `amount` would
    /// overdraw the current balance.
    pub fn check_expense(&self, amount: f64) -> Result<()> {
        self.ensure_covers(amount, self.balance)
    }

    /// True when edits or deletes of income left the balance below zero.
    pub fn is_overdrawn(&self) -> bool {
        self.balance < -BALANCE_TOLERANCE
    }

    /// Drops every transaction and resets the balance to zero.
    pub fn clear_all(&mut self) {
        self.balance = 0.0;
        self.transactions.clear();
    }

    /// Balance implied by the transaction list.
    pub fn computed_balance(&self) -> f64 {
        self.transactions
            .iter()
            .map(Transaction::signed_amount)
            .sum()
    }

    pub fn recompute_balance(&mut self) {
        self.balance = self.computed_balance();
    }

    /// Resets a stored balance that disagrees with the transaction list.
    /// Returns the stale value when a repair happened.
    pub fn repair_balance(&mut self) -> Option<f64> {
        let computed = self.computed_balance();
        if (self.balance - computed).abs() > BALANCE_TOLERANCE {
            let stale = self.balance;
            self.balance = computed;
            Some(stale)
        } else {
            None
        }
    }

    fn position(&self, index: usize) -> Result<usize> {
        if index == 0 || index > self.transactions.len() {
            return Err(LedgerError::IndexOutOfRange {
                index,
                len: self.transactions.len(),
            });
        }
        Ok(index - 1)
    }

    fn ensure_covers(&self, requested: f64, available: f64) -> Result<()> {
        if requested > available + BALANCE_TOLERANCE {
            return Err(LedgerError::InsufficientFunds {
                requested,
                available,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invariant(ledger: &Ledger) {
        assert!(
            (ledger.balance() - ledger.computed_balance()).abs() < BALANCE_TOLERANCE,
            "balance {} drifted from computed {}",
            ledger.balance(),
            ledger.computed_balance()
        );
    }

    fn funded_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.add_income(100_000.0, "allowance").unwrap();
        ledger.add_expense(25_000.0, "snacks").unwrap();
        ledger
    }

    #[test]
    fn add_operations_adjust_balance_and_append() {
        let mut ledger = Ledger::new();
        let added = ledger.add_income(50_000.0, "gift").unwrap().clone();
        assert_eq!(ledger.balance(), 50_000.0);
        assert_eq!(ledger.transactions().last(), Some(&added));

        ledger.add_expense(20_000.0, "").unwrap();
        assert_eq!(ledger.balance(), 30_000.0);
        assert_eq!(ledger.transaction(2).unwrap().note, "-");
        assert_invariant(&ledger);
    }

    #[test]
    fn overdrawing_expense_leaves_state_untouched() {
        let mut ledger = funded_ledger();
        let before = ledger.clone();
        let err = ledger.add_expense(75_001.0, "console").unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientFunds { .. }));
        assert_eq!(ledger, before);
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        let mut ledger = Ledger::new();
        assert!(matches!(
            ledger.add_income(0.0, "zero"),
            Err(LedgerError::InvalidAmount(_))
        ));
        assert!(matches!(
            ledger.add_income(-5.0, "negative"),
            Err(LedgerError::InvalidAmount(_))
        ));
        assert!(ledger.is_empty());
    }

    #[test]
    fn edit_recomputes_balance_and_keeps_timestamp() {
        let mut ledger = funded_ledger();
        let stamp = ledger.transaction(1).unwrap().timestamp.clone();
        let edited = ledger
            .edit_transaction(1, Some(120_000.0), Some("pocket money"))
            .unwrap();
        assert_eq!(edited.note, "Pocket money");
        assert_eq!(edited.timestamp, stamp);
        assert_eq!(ledger.balance(), 95_000.0);
        assert_invariant(&ledger);
    }

    #[test]
    fn edit_validates_before_mutating() {
        let mut ledger = funded_ledger();
        let before = ledger.clone();
        assert!(matches!(
            ledger.edit_transaction(3, Some(1.0), None),
            Err(LedgerError::IndexOutOfRange { index: 3, len: 2 })
        ));
        assert!(matches!(
            ledger.edit_transaction(0, None, Some("x")),
            Err(LedgerError::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            ledger.edit_transaction(1, Some(0.0), Some("changed")),
            Err(LedgerError::InvalidAmount(_))
        ));
        assert!(matches!(
            ledger.edit_transaction(2, Some(100_001.0), None),
            Err(LedgerError::InsufficientFunds { .. })
        ));
        assert_eq!(ledger, before);

        ledger.edit_transaction(2, Some(100_000.0), None).unwrap();
        assert_eq!(ledger.balance(), 0.0);
    }

    #[test]
    fn delete_reverses_effect_and_renumbers() {
        let mut ledger = funded_ledger();
        ledger.add_income(10_000.0, "bonus").unwrap();

        let removed = ledger.delete_transaction(2).unwrap();
        assert_eq!(removed.kind, TransactionKind::Expense);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.balance(), 110_000.0);
        assert_eq!(ledger.transaction(2).unwrap().note, "Bonus");
        assert_invariant(&ledger);

        let before = ledger.clone();
        assert!(matches!(
            ledger.delete_transaction(3),
            Err(LedgerError::IndexOutOfRange { index: 3, len: 2 })
        ));
        assert_eq!(ledger, before);
    }

    #[test]
    fn clear_all_resets_state() {
        let mut ledger = funded_ledger();
        ledger.clear_all();
        assert!(ledger.is_empty());
        assert_eq!(ledger.balance(), 0.0);
    }

    #[test]
    fn repair_balance_fixes_stale_snapshot() {
        let mut ledger: Ledger = serde_json::from_str(
            r#"{"saldo": 999, "transactions": [
                {"type": "pemasukan", "amount": 300, "note": "A", "time": "-"},
                {"type": "pengeluaran", "amount": 100, "note": "B", "time": "-"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(ledger.repair_balance(), Some(999.0));
        assert_eq!(ledger.balance(), 200.0);
        assert_eq!(ledger.repair_balance(), None);
    }
}
