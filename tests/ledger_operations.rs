mod common;

use finance_core::{Ledger, LedgerError, ReportService, Transaction};

#[test]
fn invalid_insert_never_changes_length() {
    let mut ledger = common::scenario_ledger();
    for kind in ["Income", "EXPENSE", "transfer", "", "income "] {
        let err = ledger
            .insert("2024-03-01", "Attempt", 1.0, kind)
            .expect_err("type must be rejected");
        assert!(matches!(err, LedgerError::InvalidType(_)), "kind {kind:?}");
        assert_eq!(ledger.len(), 3);
    }
}

#[test]
fn valid_insert_grows_by_one_and_lands_last() {
    let mut ledger = common::scenario_ledger();
    for (idx, kind) in ["income", "expense"].into_iter().enumerate() {
        let before = ledger.len();
        ledger
            .insert("2020-01-01", format!("Entry{idx}"), -5.0, kind)
            .unwrap();
        assert_eq!(ledger.len(), before + 1);
        let last = ledger.transactions().last().unwrap();
        assert_eq!(last.description, format!("Entry{idx}"));
        assert_eq!(last.amount, -5.0);
    }
}

#[test]
fn delete_removes_all_and_only_matching_dates() {
    let mut ledger = common::scenario_ledger();
    ledger.insert("2024-01-10", "Water", 40.0, "expense").unwrap();
    let original: Vec<Transaction> = ledger.transactions().to_vec();

    let removed = ledger.delete_by_date("2024-01-10").unwrap();
    assert_eq!(removed, 2);
    let expected: Vec<Transaction> = original
        .into_iter()
        .filter(|txn| txn.date != "2024-01-10")
        .collect();
    assert_eq!(ledger.transactions(), expected.as_slice());
}

#[test]
fn delete_missing_date_reports_not_found() {
    let mut ledger = common::scenario_ledger();
    let err = ledger.delete_by_date("2024-01-1").unwrap_err();
    assert!(matches!(err, LedgerError::NotFound(ref date) if date == "2024-01-1"));
    assert_eq!(ledger.len(), 3);
}

#[test]
fn delete_then_totals_drop_expense() {
    let mut ledger = common::scenario_ledger();
    ledger.delete_by_date("2024-01-10").unwrap();
    let totals = ReportService::totals(&ledger);
    assert_eq!(totals.total_expense, 0.0);
    assert_eq!(totals.total_income, 3500.0);
    assert_eq!(totals.net, 3500.0);
}

#[test]
fn retain_only_type_keeps_prior_count_of_matches() {
    for kind in ["income", "expense"] {
        let mut ledger = common::scenario_ledger();
        let expected = ledger.query_by_type(kind).len();
        let kept = ledger.retain_only_type(kind).unwrap();
        assert_eq!(kept, expected);
        assert_eq!(ledger.len(), expected);
        assert!(ledger.iter().all(|txn| txn.kind == kind));
    }
}

#[test]
fn retain_only_type_on_empty_ledger_is_no_match() {
    let mut ledger = Ledger::new();
    assert!(matches!(
        ledger.retain_only_type("income"),
        Err(LedgerError::NoMatch(_))
    ));
    assert!(ledger.is_empty());
}

#[test]
fn sort_is_idempotent_and_a_permutation() {
    let mut ledger = Ledger::new();
    let dates = ["2024-03-01", "2023-12-31", "2024-01-15", "2023-12-31", "2024-01-02"];
    for (idx, date) in dates.iter().enumerate() {
        let kind = if idx % 2 == 0 { "income" } else { "expense" };
        ledger
            .insert(*date, format!("Item{idx}"), idx as f64, kind)
            .unwrap();
    }
    let mut before: Vec<String> = ledger.iter().map(|txn| txn.description.clone()).collect();

    ledger.sort_by_date();
    let once = ledger.clone();
    ledger.sort_by_date();
    assert_eq!(ledger, once);

    let sorted_dates: Vec<&str> = ledger.iter().map(|txn| txn.date.as_str()).collect();
    assert!(sorted_dates.windows(2).all(|pair| pair[0] <= pair[1]));

    let mut after: Vec<String> = ledger.iter().map(|txn| txn.description.clone()).collect();
    before.sort();
    after.sort();
    assert_eq!(before, after);

    // Equal dates keep insertion order.
    let ties: Vec<&str> = ledger
        .iter()
        .filter(|txn| txn.date == "2023-12-31")
        .map(|txn| txn.description.as_str())
        .collect();
    assert_eq!(ties, vec!["Item1", "Item3"]);
}
