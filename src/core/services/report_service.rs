//! Aggregation helpers for totals and monthly summaries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ledger::{Ledger, TransactionKind};

/// Income, expense, and their difference over the whole ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TotalsReport {
    pub total_income: f64,
    pub total_expense: f64,
    pub net: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MonthlyTotals {
    pub income: f64,
    pub expense: f64,
}

/// Month-key (`YYYY-MM`) to totals, in ascending key order.
pub type MonthlyReport = BTreeMap<String, MonthlyTotals>;

/// Which months appear in a [`MonthlyReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthSelection {
    /// Every month with at least one income or expense.
    #[default]
    AllMonths,
    /// Only months with at least one income; expense-only months are left out.
    IncomeMonths,
}

/// Read-only reporting over a ledger snapshot.
pub struct ReportService;

impl ReportService {
    pub fn totals(ledger: &Ledger) -> TotalsReport {
        let mut report = TotalsReport::default();
        for txn in ledger.iter() {
            match txn.kind() {
                Some(TransactionKind::Income) => report.total_income += txn.amount,
                Some(TransactionKind::Expense) => report.total_expense += txn.amount,
                None => {}
            }
        }
        report.net = report.total_income - report.total_expense;
        report
    }

    pub fn monthly(ledger: &Ledger, selection: MonthSelection) -> MonthlyReport {
        let mut income: BTreeMap<&str, f64> = BTreeMap::new();
        let mut expense: BTreeMap<&str, f64> = BTreeMap::new();
        for txn in ledger.iter() {
            match txn.kind() {
                Some(TransactionKind::Income) => {
                    *income.entry(txn.month_key()).or_insert(0.0) += txn.amount
                }
                Some(TransactionKind::Expense) => {
                    *expense.entry(txn.month_key()).or_insert(0.0) += txn.amount
                }
                None => {}
            }
        }

        let mut months: Vec<&str> = income.keys().copied().collect();
        if selection == MonthSelection::AllMonths {
            months.extend(expense.keys().copied());
        }

        months
            .into_iter()
            .map(|month| {
                let totals = MonthlyTotals {
                    income: income.get(month).copied().unwrap_or(0.0),
                    expense: expense.get(month).copied().unwrap_or(0.0),
                };
                (month.to_string(), totals)
            })
            .collect()
    }
}
