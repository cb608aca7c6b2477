use colored::Colorize;
use std::fmt;

use crate::cli::table::{Table, TableColumn};
use crate::core::services::{MonthlyReport, TotalsReport};
use crate::ledger::Transaction;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

fn apply_style(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    match kind {
        MessageKind::Info => text,
        MessageKind::Success => text.green().to_string(),
        MessageKind::Warning => text.yellow().to_string(),
        MessageKind::Error => format!("Error: {text}").red().to_string(),
        MessageKind::Section => text.bold().to_string(),
    }
}

fn emit(kind: MessageKind, message: impl fmt::Display) {
    let styled = apply_style(kind, message);
    match kind {
        MessageKind::Error => eprintln!("{styled}"),
        _ => println!("{styled}"),
    }
}

pub fn info(message: impl fmt::Display) {
    emit(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    emit(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    emit(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    emit(MessageKind::Error, message);
}

pub fn section(title: impl fmt::Display) {
    emit(MessageKind::Section, title);
}

/// Display form of an amount: `$` prefix, two decimals, sign before the `$`.
pub fn format_amount(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", -amount)
    } else {
        format!("${:.2}", amount)
    }
}

pub fn transactions_table<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> String {
    let mut table = Table::new(vec![
        TableColumn::left("Date", 10),
        TableColumn::left("Description", 11),
        TableColumn::right("Amount", 6),
        TableColumn::left("Type", 4),
    ]);
    for txn in transactions {
        table.add_row(vec![
            txn.date.clone(),
            txn.description.clone(),
            format_amount(txn.amount),
            txn.kind.clone(),
        ]);
    }
    table.render()
}

pub fn totals_summary(report: &TotalsReport) -> String {
    format!(
        "Total Income: {}\nTotal Expense: {}\nNet Savings: {}",
        format_amount(report.total_income),
        format_amount(report.total_expense),
        format_amount(report.net)
    )
}

pub fn monthly_table(report: &MonthlyReport) -> String {
    let mut table = Table::new(vec![
        TableColumn::left("Month", 7),
        TableColumn::right("Total Income", 0),
        TableColumn::right("Total Expense", 0),
    ]);
    for (month, totals) in report {
        table.add_row(vec![
            month.clone(),
            format_amount(totals.income),
            format_amount(totals.expense),
        ]);
    }
    table.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::MonthlyTotals;

    #[test]
    fn amounts_use_two_decimals() {
        assert_eq!(format_amount(3000.0), "$3000.00");
        assert_eq!(format_amount(12.345), "$12.35");
        assert_eq!(format_amount(-4.5), "-$4.50");
    }

    #[test]
    fn totals_summary_lists_three_lines() {
        let report = TotalsReport {
            total_income: 3500.0,
            total_expense: 1200.0,
            net: 2300.0,
        };
        assert_eq!(
            totals_summary(&report),
            "Total Income: $3500.00\nTotal Expense: $1200.00\nNet Savings: $2300.00"
        );
    }

    #[test]
    fn transactions_table_has_header_and_rows() {
        let txns = vec![Transaction::new("2024-01-05", "Salary", 3000.0, "income")];
        let rendered = transactions_table(&txns);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Date"));
        assert!(lines[2].contains("Salary"));
        assert!(lines[2].contains("$3000.00"));
    }

    #[test]
    fn monthly_table_rows_follow_report_order() {
        let mut report = MonthlyReport::new();
        report.insert(
            "2024-02".into(),
            MonthlyTotals {
                income: 500.0,
                expense: 0.0,
            },
        );
        report.insert(
            "2024-01".into(),
            MonthlyTotals {
                income: 3000.0,
                expense: 1200.0,
            },
        );
        let rendered = monthly_table(&report);
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[2].starts_with("2024-01"));
        assert!(lines[3].starts_with("2024-02"));
        assert!(lines[3].ends_with("$0.00"));
    }
}
