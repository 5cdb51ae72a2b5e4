// Copyright (c) 2025 Wealthcompass.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use wealthcompass::engine::EngineError;
use wealthcompass::engine::currency::RateTable;

fn setup() -> RateTable {
    let mut table = RateTable::new("USD");
    table.insert("EUR", Decimal::new(90, 2)); // 0.90
    table.insert("INR", Decimal::from(83));
    table
}

#[test]
fn identity_conversion_is_exact() {
    let table = setup();
    let amt = Decimal::new(12345, 2);
    assert_eq!(table.convert(amt, "USD", "USD").unwrap(), amt);
    // Same-currency conversion needs no rate at all
    assert_eq!(table.convert(amt, "XYZ", "XYZ").unwrap(), amt);
}

#[test]
fn converts_through_the_base() {
    let table = setup();
    // 90 EUR -> USD = 90 / 0.90 = 100; -> INR = 100 * 83 = 8300
    let res = table.convert(Decimal::from(90), "EUR", "INR").unwrap();
    assert_eq!(format!("{:.2}", res.round_dp(2)), "8300.00");
}

#[test]
fn base_to_quote_and_back() {
    let table = setup();
    let res = table.convert(Decimal::from(100), "USD", "EUR").unwrap();
    assert_eq!(res, Decimal::from(90));
    let back = table.convert(res, "EUR", "USD").unwrap();
    assert_eq!(back, Decimal::from(100));
}

#[test]
fn round_trip_stays_within_tolerance() {
    let table = setup();
    let amt = Decimal::new(133742, 2);
    let there = table.convert(amt, "EUR", "INR").unwrap();
    let back = table.convert(there, "INR", "EUR").unwrap();
    let drift = (back - amt).abs();
    assert!(drift < Decimal::new(1, 8), "round-trip drift {}", drift);
}

#[test]
fn missing_rate_is_an_error_not_a_passthrough() {
    let table = setup();
    let err = table.convert(Decimal::from(100), "USD", "XYZ").unwrap_err();
    assert_eq!(
        err,
        EngineError::MissingRate {
            code: "XYZ".to_string()
        }
    );
    assert!(table.convert(Decimal::from(100), "XYZ", "USD").is_err());
}

#[test]
fn zero_rate_is_treated_as_missing() {
    let mut table = RateTable::new("USD");
    table.insert("BAD", Decimal::ZERO);
    assert!(table.convert(Decimal::from(10), "BAD", "USD").is_err());
}

#[test]
fn codes_are_case_insensitive() {
    let table = setup();
    let res = table.convert(Decimal::from(90), "eur", "usd").unwrap();
    assert_eq!(res, Decimal::from(100));
}
