// Copyright (c) 2025 Wealthcompass.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use wealthcompass::engine::networth::net_worth_series;
use wealthcompass::engine::period::TimeRange;
use wealthcompass::models::NetWorthSnapshot;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn snap(id: i64, date: NaiveDate, value: i64) -> NetWorthSnapshot {
    NetWorthSnapshot {
        id,
        date,
        value: Decimal::from(value),
    }
}

#[test]
fn filters_to_range_and_sorts_ascending() {
    // Deliberately unordered input
    let snapshots = vec![
        snap(3, d(2024, 6, 10), 5200),
        snap(1, d(2024, 6, 1), 5000),
        snap(2, d(2024, 6, 5), 5100),
        snap(4, d(2024, 1, 1), 4000), // outside 1M
    ];
    let data = net_worth_series(&snapshots, TimeRange::Month, d(2024, 6, 15));
    let dates: Vec<NaiveDate> = data.iter().map(|p| p.date).collect();
    assert_eq!(dates, vec![d(2024, 6, 1), d(2024, 6, 5), d(2024, 6, 10)]);
    assert_eq!(data[0].value, Decimal::from(5000));
}

#[test]
fn no_gap_filling_between_sparse_snapshots() {
    let snapshots = vec![snap(1, d(2024, 6, 1), 5000), snap(2, d(2024, 6, 14), 5300)];
    let data = net_worth_series(&snapshots, TimeRange::Month, d(2024, 6, 15));
    assert_eq!(data.len(), 2);
}

#[test]
fn all_range_includes_the_full_history() {
    let snapshots = vec![snap(1, d(2019, 1, 1), 100), snap(2, d(2024, 6, 1), 9000)];
    let data = net_worth_series(&snapshots, TimeRange::All, d(2024, 6, 15));
    assert_eq!(data.len(), 2);
    assert_eq!(data[0].date, d(2019, 1, 1));
}

#[test]
fn empty_in_range_set_yields_empty_series() {
    let snapshots = vec![snap(1, d(2020, 1, 1), 100)];
    let data = net_worth_series(&snapshots, TimeRange::Week, d(2024, 6, 15));
    assert!(data.is_empty());
    assert!(net_worth_series(&[], TimeRange::All, d(2024, 6, 15)).is_empty());
}

#[test]
fn same_day_duplicates_pass_through() {
    let snapshots = vec![snap(1, d(2024, 6, 10), 5000), snap(2, d(2024, 6, 10), 5050)];
    let data = net_worth_series(&snapshots, TimeRange::Week, d(2024, 6, 15));
    assert_eq!(data.len(), 2);
    assert_eq!(data[0].value, Decimal::from(5000));
    assert_eq!(data[1].value, Decimal::from(5050));
}

#[test]
fn future_snapshots_are_excluded() {
    let snapshots = vec![snap(1, d(2024, 6, 20), 9999)];
    let data = net_worth_series(&snapshots, TimeRange::All, d(2024, 6, 15));
    assert!(data.is_empty());
}
