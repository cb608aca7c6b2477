//! Menu-driven dispatcher over the ledger core. Nothing below `cli` is used
//! by the library itself.

pub mod io;
pub mod menu;
pub mod output;
pub mod shell;
pub mod table;

pub use shell::run_cli;

use thiserror::Error;

use crate::core::services::ServiceError;
use crate::errors::LedgerError;

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] LedgerError),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("Console IO failed: {0}")]
    Io(#[from] std::io::Error),
}
