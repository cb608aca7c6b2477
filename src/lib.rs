#![doc(test(attr(deny(warnings))))]

//! Finance Core keeps a personal income/expense ledger: transaction records,
//! plain-text and JSON persistence, and totals/monthly reporting.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

pub use crate::core::services::{MonthSelection, MonthlyReport, ReportService, TotalsReport};
pub use crate::core::LedgerManager;
pub use errors::LedgerError;
pub use ledger::{Ledger, Transaction, TransactionKind};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Finance Core tracing initialized.");
    });
}
