use crate::ledger::{Transaction, TransactionKind};

/// Income, expense and net totals over a set of transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
    pub net: f64,
}

/// Per-note income and expense sums.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteSummary {
    pub note: String,
    pub income: f64,
    pub expense: f64,
}

impl NoteSummary {
    pub fn net(&self) -> f64 {
        self.income - self.expense
    }
}

/// Read-only reports derived from a transaction list.
pub struct SummaryService;

impl SummaryService {
    pub fn totals(transactions: &[Transaction]) -> Totals {
        let (income, expense) =
            transactions
                .iter()
                .fold((0.0, 0.0), |(income, expense), txn| match txn.kind {
                    TransactionKind::Income => (income + txn.amount, expense),
                    TransactionKind::Expense => (income, expense + txn.amount),
                });
        Totals {
            income,
            expense,
            net: income - expense,
        }
    }

    /// Groups by note in order of first appearance.
    pub fn group_by_note(transactions: &[Transaction]) -> Vec<NoteSummary> {
        let mut groups: Vec<NoteSummary> = Vec::new();
        for txn in transactions {
            let position = match groups.iter().position(|group| group.note == txn.note) {
                Some(position) => position,
                None => {
                    groups.push(NoteSummary {
                        note: txn.note.clone(),
                        income: 0.0,
                        expense: 0.0,
                    });
                    groups.len() - 1
                }
            };
            let group = &mut groups[position];
            match txn.kind {
                TransactionKind::Income => group.income += txn.amount,
                TransactionKind::Expense => group.expense += txn.amount,
            }
        }
        groups
    }

    /// Case-insensitive keyword search over type, note, time and amount.
    /// Matches carry their 1-based position; a blank keyword matches nothing.
    pub fn search<'a>(
        transactions: &'a [Transaction],
        keyword: &str,
    ) -> Vec<(usize, &'a Transaction)> {
        let needle = keyword.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        transactions
            .iter()
            .enumerate()
            .filter(|(_, txn)| txn.search_text().contains(&needle))
            .map(|(position, txn)| (position + 1, txn))
            .collect()
    }

    /// The last `count` transactions in original order, with 1-based positions.
    pub fn recent(transactions: &[Transaction], count: usize) -> Vec<(usize, &Transaction)> {
        let start = transactions.len().saturating_sub(count);
        transactions[start..]
            .iter()
            .enumerate()
            .map(|(offset, txn)| (start + offset + 1, txn))
            .collect()
    }
}
