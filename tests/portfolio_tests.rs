// Copyright (c) 2025 Wealthcompass.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use wealthcompass::engine::portfolio::{allocation, class_allocation, performance, summary};
use wealthcompass::models::{AssetClass, Holding};

fn holding(symbol: &str, class: AssetClass, qty: i64, avg_buy: i64, current: i64) -> Holding {
    Holding {
        id: 0,
        symbol: symbol.to_string(),
        name: symbol.to_string(),
        class,
        quantity: Decimal::from(qty),
        avg_buy_price: Decimal::from(avg_buy),
        current_price: Decimal::from(current),
        currency: "USD".to_string(),
    }
}

#[test]
fn allocation_excludes_zero_value_holdings() {
    let holdings = vec![
        holding("BTC", AssetClass::Crypto, 1, 20000, 30000),
        holding("ETH", AssetClass::Crypto, 0, 1000, 2000),
    ];
    let data = allocation(&holdings);
    assert_eq!(data.len(), 1);
    assert_eq!(data[0].name, "BTC");
    assert_eq!(data[0].value, Decimal::from(30000));
    assert_eq!(data[0].percentage, Decimal::ONE_HUNDRED);
}

#[test]
fn allocation_percentages_sum_to_one_hundred() {
    let holdings = vec![
        holding("BTC", AssetClass::Crypto, 1, 0, 30000),
        holding("ETH", AssetClass::Crypto, 5, 0, 2000),
        holding("SOL", AssetClass::Crypto, 100, 0, 150),
    ];
    let data = allocation(&holdings);
    let total: Decimal = data.iter().map(|s| s.percentage).sum();
    let drift = (total - Decimal::ONE_HUNDRED).abs();
    assert!(drift < Decimal::new(1, 6), "percentages sum to {}", total);
    // Value descending
    assert_eq!(data[0].name, "BTC");
    assert_eq!(data[1].name, "SOL");
    assert_eq!(data[2].name, "ETH");
}

#[test]
fn all_zero_portfolio_yields_empty_allocation() {
    let holdings = vec![
        holding("ETH", AssetClass::Crypto, 0, 1000, 2000),
        holding("DOGE", AssetClass::Crypto, 500, 1, 0),
    ];
    assert!(allocation(&holdings).is_empty());
    assert!(allocation(&[]).is_empty());
}

#[test]
fn class_allocation_groups_by_asset_class() {
    let holdings = vec![
        holding("USD", AssetClass::Cash, 5000, 1, 1),
        holding("BTC", AssetClass::Crypto, 1, 20000, 30000),
        holding("ETH", AssetClass::Crypto, 5, 1000, 2000),
        holding("Watch", AssetClass::Other, 1, 4000, 5000),
    ];
    let data = class_allocation(&holdings);
    assert_eq!(data.len(), 3);
    assert_eq!(data[0].name, "Crypto");
    assert_eq!(data[0].value, Decimal::from(40000));
    assert_eq!(data[1].name, "Cash");
    assert_eq!(data[2].name, "Other");
    let total: Decimal = data.iter().map(|s| s.percentage).sum();
    assert!((total - Decimal::ONE_HUNDRED).abs() < Decimal::new(1, 6));
}

#[test]
fn performance_keeps_positions_with_any_exposure() {
    let holdings = vec![
        holding("BTC", AssetClass::Crypto, 1, 20000, 30000),
        holding("ETH", AssetClass::Crypto, 0, 1000, 2000), // no exposure at all
        holding("FTT", AssetClass::Crypto, 10, 30, 0),     // invested, now worthless
    ];
    let data = performance(&holdings);
    assert_eq!(data.len(), 2);
    assert_eq!(data[0].name, "BTC");
    assert_eq!(data[0].invested, Decimal::from(20000));
    assert_eq!(data[0].current, Decimal::from(30000));
    assert_eq!(data[1].name, "FTT");
    assert_eq!(data[1].current, Decimal::ZERO);
}

#[test]
fn summary_scenario() {
    let holdings = vec![
        holding("BTC", AssetClass::Crypto, 1, 20000, 30000),
        holding("ETH", AssetClass::Crypto, 0, 1000, 2000),
    ];
    let s = summary(&holdings);
    assert_eq!(s.total_value, Decimal::from(30000));
    assert_eq!(s.total_gain, Decimal::from(10000));
    assert_eq!(s.total_gain_percent, Decimal::from(50));
}

#[test]
fn summary_with_nothing_invested() {
    let s = summary(&[]);
    assert_eq!(s.total_value, Decimal::ZERO);
    assert_eq!(s.total_gain, Decimal::ZERO);
    assert_eq!(s.total_gain_percent, Decimal::ZERO);

    // Value without cost basis: gain percent stays 0 rather than dividing by 0
    let gifted = vec![holding("BTC", AssetClass::Crypto, 1, 0, 30000)];
    let s2 = summary(&gifted);
    assert_eq!(s2.total_value, Decimal::from(30000));
    assert_eq!(s2.total_gain, Decimal::from(30000));
    assert_eq!(s2.total_gain_percent, Decimal::ZERO);
}

#[test]
fn portfolio_aggregation_is_idempotent() {
    let holdings = vec![
        holding("BTC", AssetClass::Crypto, 1, 20000, 30000),
        holding("ETH", AssetClass::Crypto, 5, 1000, 2000),
    ];
    assert_eq!(allocation(&holdings), allocation(&holdings));
    assert_eq!(performance(&holdings), performance(&holdings));
    assert_eq!(summary(&holdings), summary(&holdings));
}
