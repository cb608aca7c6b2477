//! Business logic helpers for managing transactions from raw user input.

use crate::core::services::{ServiceError, ServiceResult};
use crate::ledger::{Ledger, Transaction};

/// Validated entry points used by the dispatcher.
pub struct TransactionService;

impl TransactionService {
    /// Parses `raw_amount` and appends the transaction. Blank dates and
    /// descriptions are rejected since the text store cannot read them back.
    pub fn add(
        ledger: &mut Ledger,
        date: &str,
        description: &str,
        raw_amount: &str,
        kind: &str,
    ) -> ServiceResult<()> {
        let date = require_field(date, "Date")?;
        let description = require_field(description, "Description")?;
        let amount = parse_amount(raw_amount)?;
        ledger.insert(date, description, amount, kind.trim())?;
        Ok(())
    }

    /// Removes every transaction on `date`, returning the removed count.
    pub fn remove_on(ledger: &mut Ledger, date: &str) -> ServiceResult<usize> {
        Ok(ledger.delete_by_date(date.trim())?)
    }

    /// Destructively keeps only transactions of `kind`.
    pub fn retain_only(ledger: &mut Ledger, kind: &str) -> ServiceResult<usize> {
        Ok(ledger.retain_only_type(kind.trim())?)
    }

    pub fn of_type<'a>(ledger: &'a Ledger, kind: &str) -> Vec<&'a Transaction> {
        ledger.query_by_type(kind.trim())
    }

    /// Returns a snapshot of the ledger's transactions.
    pub fn list(ledger: &Ledger) -> Vec<&Transaction> {
        ledger.iter().collect()
    }
}

fn require_field<'a>(raw: &'a str, label: &str) -> ServiceResult<&'a str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::Invalid(format!("{label} cannot be empty.")));
    }
    Ok(trimmed)
}

fn parse_amount(raw: &str) -> ServiceResult<f64> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ServiceError::Invalid(format!(
            "Invalid amount `{trimmed}`. Please provide a number."
        ))),
    }
}
