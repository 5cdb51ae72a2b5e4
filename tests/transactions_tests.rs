// Copyright (c) 2025 Wealthcompass.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use wealthcompass::engine::period::Period;
use wealthcompass::engine::transactions::{expenses_by_category, spending_timeline};
use wealthcompass::models::{Category, Transaction, TxKind};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn tx(id: i64, date: NaiveDate, kind: TxKind, amount: i64, category: &str) -> Transaction {
    Transaction {
        id,
        date,
        kind,
        amount: Decimal::from(amount),
        category: Category::parse(kind, category),
        description: None,
    }
}

fn scenario_ledger() -> Vec<Transaction> {
    vec![
        tx(1, d(2024, 1, 1), TxKind::Expense, 50, "Food"),
        tx(2, d(2024, 1, 3), TxKind::Expense, 30, "Food"),
        tx(3, d(2024, 1, 1), TxKind::Income, 1000, "Salary"),
    ]
}

#[test]
fn expenses_by_category_scenario() {
    let ledger = scenario_ledger();
    let interval = Period::SevenDays.resolve(d(2024, 1, 7));
    let data = expenses_by_category(&ledger, &interval);
    assert_eq!(data.len(), 1);
    assert_eq!(data[0].category, "Food");
    assert_eq!(data[0].value, Decimal::from(80));
}

#[test]
fn income_never_counts_as_expense() {
    let ledger = scenario_ledger();
    let interval = Period::AllTime.resolve(d(2024, 1, 7));
    let total: Decimal = expenses_by_category(&ledger, &interval)
        .iter()
        .map(|c| c.value)
        .sum();
    assert_eq!(total, Decimal::from(80));
}

#[test]
fn category_totals_cover_all_in_range_expenses() {
    let ledger = vec![
        tx(1, d(2024, 2, 1), TxKind::Expense, 10, "Food"),
        tx(2, d(2024, 2, 2), TxKind::Expense, 20, "Housing"),
        tx(3, d(2024, 2, 3), TxKind::Expense, 30, "Food"),
        tx(4, d(2023, 12, 1), TxKind::Expense, 99, "Food"), // out of range
    ];
    let interval = Period::ThirtyDays.resolve(d(2024, 2, 10));
    let data = expenses_by_category(&ledger, &interval);
    let total: Decimal = data.iter().map(|c| c.value).sum();
    assert_eq!(total, Decimal::from(60));
    // Sorted by value descending for deterministic output
    assert_eq!(data[0].category, "Food");
    assert_eq!(data[1].category, "Housing");
}

#[test]
fn unknown_labels_bucket_into_other() {
    let ledger = vec![
        tx(1, d(2024, 1, 2), TxKind::Expense, 5, "Groceries"),
        tx(2, d(2024, 1, 3), TxKind::Expense, 7, "Subscriptions"),
    ];
    let interval = Period::SevenDays.resolve(d(2024, 1, 7));
    let data = expenses_by_category(&ledger, &interval);
    assert_eq!(data.len(), 1);
    assert_eq!(data[0].category, "Other");
    assert_eq!(data[0].value, Decimal::from(12));
}

#[test]
fn empty_ledger_yields_empty_results_not_errors() {
    let ledger: Vec<Transaction> = Vec::new();
    let interval = Period::ThirtyDays.resolve(d(2024, 1, 7));
    assert!(expenses_by_category(&ledger, &interval).is_empty());
    // Bounded interval still zero-fills every day
    let timeline = spending_timeline(&ledger, &interval);
    assert_eq!(timeline.len(), 30);
    assert!(timeline.iter().all(|e| e.amount.is_zero()));
    // Unbounded interval has nothing to anchor on
    let all = Period::AllTime.resolve(d(2024, 1, 7));
    assert!(spending_timeline(&ledger, &all).is_empty());
}

#[test]
fn timeline_scenario_zero_filled() {
    let ledger = scenario_ledger();
    let interval = Period::SevenDays.resolve(d(2024, 1, 7));
    let data = spending_timeline(&ledger, &interval);
    assert_eq!(data.len(), 7);
    for (i, entry) in data.iter().enumerate() {
        assert_eq!(entry.date, d(2024, 1, 1 + i as u32));
    }
    assert_eq!(data[0].amount, Decimal::from(50));
    assert_eq!(data[1].amount, Decimal::ZERO);
    assert_eq!(data[2].amount, Decimal::from(30));
    assert!(data[3..].iter().all(|e| e.amount.is_zero()));
}

#[test]
fn timeline_sums_same_day_expenses() {
    let ledger = vec![
        tx(1, d(2024, 1, 5), TxKind::Expense, 10, "Food"),
        tx(2, d(2024, 1, 5), TxKind::Expense, 15, "Fuel"),
    ];
    let interval = Period::SevenDays.resolve(d(2024, 1, 7));
    let data = spending_timeline(&ledger, &interval);
    assert_eq!(data[4].amount, Decimal::from(25));
}

#[test]
fn unbounded_timeline_anchors_at_earliest_expense() {
    let ledger = vec![
        tx(1, d(2024, 1, 3), TxKind::Expense, 30, "Food"),
        tx(2, d(2024, 1, 6), TxKind::Expense, 20, "Food"),
        tx(3, d(2023, 12, 1), TxKind::Income, 500, "Salary"),
    ];
    let interval = Period::AllTime.resolve(d(2024, 1, 7));
    let data = spending_timeline(&ledger, &interval);
    assert_eq!(data.first().map(|e| e.date), Some(d(2024, 1, 3)));
    assert_eq!(data.len(), 5);
}

#[test]
fn aggregators_are_idempotent() {
    let ledger = scenario_ledger();
    let interval = Period::SevenDays.resolve(d(2024, 1, 7));
    assert_eq!(
        expenses_by_category(&ledger, &interval),
        expenses_by_category(&ledger, &interval)
    );
    assert_eq!(
        spending_timeline(&ledger, &interval),
        spending_timeline(&ledger, &interval)
    );
}
