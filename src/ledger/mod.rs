//! Ledger domain models and in-memory operations.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod transaction;

pub use ledger::Ledger;
pub use transaction::{Transaction, TransactionKind, EXPENSE, INCOME};
