pub mod report_service;
pub mod transaction_service;

pub use report_service::{
    MonthSelection, MonthlyReport, MonthlyTotals, ReportService, TotalsReport,
};
pub use transaction_service::TransactionService;

use crate::errors::LedgerError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("{0}")]
    Invalid(String),
}
