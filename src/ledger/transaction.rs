use std::fmt;

use serde::{Deserialize, Serialize};

pub const INCOME: &str = "income";
pub const EXPENSE: &str = "expense";

/// Classification accepted by [`crate::ledger::Ledger::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Parses the exact lowercase spelling; anything else is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            INCOME => Some(Self::Income),
            EXPENSE => Some(Self::Expense),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => INCOME,
            Self::Expense => EXPENSE,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single recorded income or expense.
///
/// The type is kept as the raw string so records loaded from storage survive
/// untouched even when they carry a type the ledger would not accept on
/// insert. Use [`Transaction::kind`] for the validated view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: String,
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Transaction {
    pub fn new(
        date: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            amount,
            kind: kind.into(),
        }
    }

    pub fn kind(&self) -> Option<TransactionKind> {
        TransactionKind::parse(&self.kind)
    }

    /// First seven characters of the date (`YYYY-MM`). Shorter dates are
    /// returned whole.
    pub fn month_key(&self) -> &str {
        match self.date.char_indices().nth(7) {
            Some((idx, _)) => &self.date[..idx],
            None => &self.date,
        }
    }
}
