//! Session lifecycle and the services layered over a loaded ledger.

pub mod ledger_manager;
pub mod services;

pub use ledger_manager::LedgerManager;
