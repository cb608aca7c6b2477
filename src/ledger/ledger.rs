use serde::{Deserialize, Serialize};

use super::transaction::{Transaction, TransactionKind};
use crate::errors::{LedgerError, Result};

/// Ordered collection of transactions. Insertion order is kept until
/// [`Ledger::sort_by_date`] is called.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps records as-is; no type validation happens here.
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Appends a transaction when `kind` is exactly `income` or `expense`.
    pub fn insert(
        &mut self,
        date: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
        kind: &str,
    ) -> Result<()> {
        if TransactionKind::parse(kind).is_none() {
            tracing::debug!(kind, "rejected transaction with invalid type");
            return Err(LedgerError::InvalidType(kind.to_string()));
        }
        let txn = Transaction::new(date, description, amount, kind);
        tracing::debug!(date = %txn.date, amount, kind, "transaction added");
        self.transactions.push(txn);
        Ok(())
    }

    /// Removes every transaction dated `date` and returns how many went.
    pub fn delete_by_date(&mut self, date: &str) -> Result<usize> {
        let before = self.transactions.len();
        self.transactions.retain(|txn| txn.date != date);
        let removed = before - self.transactions.len();
        if removed == 0 {
            return Err(LedgerError::NotFound(date.to_string()));
        }
        tracing::debug!(date, removed, "transactions deleted");
        Ok(removed)
    }

    /// Permanently drops every transaction whose type is not `kind`.
    ///
    /// When nothing matches the ledger is left empty and
    /// [`LedgerError::NoMatch`] is returned. Use [`Ledger::query_by_type`] for
    /// a read-only view.
    pub fn retain_only_type(&mut self, kind: &str) -> Result<usize> {
        let before = self.transactions.len();
        self.transactions.retain(|txn| txn.kind == kind);
        let kept = self.transactions.len();
        tracing::debug!(kind, kept, discarded = before - kept, "ledger filtered by type");
        if kept == 0 {
            return Err(LedgerError::NoMatch(kind.to_string()));
        }
        Ok(kept)
    }

    /// Alias of [`Ledger::retain_only_type`]; destructive.
    pub fn filter_by_type(&mut self, kind: &str) -> Result<usize> {
        self.retain_only_type(kind)
    }

    pub fn query_by_type(&self, kind: &str) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|txn| txn.kind == kind)
            .collect()
    }

    /// Stable ascending sort on the raw date string.
    pub fn sort_by_date(&mut self) {
        self.transactions.sort_by(|a, b| a.date.cmp(&b.date));
    }
}
