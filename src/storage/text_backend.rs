//! Legacy plain-text store: one `<date> <description> <amount> <type>` record
//! per line.
//!
//! Records are read back as a stream of whitespace-separated tokens, four at
//! a time, so a description containing whitespace shifts every later field
//! and stops the load at that record. Only whitespace-free descriptions
//! survive a round trip.

use std::{
    fmt::Write as _,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{
    errors::LedgerError,
    ledger::{Ledger, Transaction},
};

use super::{write_atomic, Result, StorageBackend};

/// Outcome of parsing a text document.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRecords {
    pub transactions: Vec<Transaction>,
    /// Set when parsing stopped before the end of the input.
    pub stopped_at: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TextStorage {
    path: PathBuf,
}

impl TextStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl StorageBackend for TextStorage {
    fn load(&self) -> Ledger {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no ledger file yet, starting empty");
                return Ledger::new();
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "unable to read ledger file, starting empty");
                return Ledger::new();
            }
        };
        let parsed = parse_records(&data);
        if let Some(reason) = &parsed.stopped_at {
            tracing::warn!(
                path = %self.path.display(),
                loaded = parsed.transactions.len(),
                reason = %reason,
                "ledger file partially read"
            );
        }
        Ledger::from_transactions(parsed.transactions)
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        write_atomic(&self.path, &render_records(ledger)?)?;
        tracing::debug!(path = %self.path.display(), count = ledger.len(), "ledger saved");
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

/// Reads records until the input runs out or a record fails to parse.
pub fn parse_records(data: &str) -> ParsedRecords {
    let mut tokens = data.split_whitespace();
    let mut transactions = Vec::new();
    let mut stopped_at = None;

    loop {
        let Some(date) = tokens.next() else {
            break;
        };
        let (Some(description), Some(raw_amount), Some(kind)) =
            (tokens.next(), tokens.next(), tokens.next())
        else {
            stopped_at = Some(format!("incomplete record starting at `{date}`"));
            break;
        };
        let Ok(amount) = raw_amount.parse::<f64>() else {
            stopped_at = Some(format!("invalid amount `{raw_amount}` in record dated `{date}`"));
            break;
        };
        transactions.push(Transaction::new(date, description, amount, kind));
    }

    ParsedRecords {
        transactions,
        stopped_at,
    }
}

/// Renders one line per record. Fails on a record with an empty field, which
/// would shift every later token on reload.
pub fn render_records(ledger: &Ledger) -> Result<String> {
    let mut out = String::new();
    for (idx, txn) in ledger.iter().enumerate() {
        let empty_field = [
            ("date", &txn.date),
            ("description", &txn.description),
            ("type", &txn.kind),
        ]
        .into_iter()
        .find_map(|(name, value)| value.is_empty().then_some(name));
        if let Some(field) = empty_field {
            return Err(LedgerError::Storage(format!(
                "record {} has an empty {field} and cannot be stored as text",
                idx + 1
            )));
        }
        let _ = writeln!(
            out,
            "{} {} {} {}",
            txn.date, txn.description, txn.amount, txn.kind
        );
    }
    Ok(out)
}
