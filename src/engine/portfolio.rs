// Copyright (c) 2025 Wealthcompass.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::Holding;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationSlice {
    pub name: String,
    pub value: Decimal,
    pub percentage: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformancePoint {
    pub name: String,
    pub invested: Decimal,
    pub current: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_value: Decimal,
    pub total_gain: Decimal,
    pub total_gain_percent: Decimal,
}

fn slices(entries: Vec<(String, Decimal)>) -> Vec<AllocationSlice> {
    // Non-positive valuations are always excluded, so an all-zero portfolio
    // yields an empty list rather than zero-percent rows.
    let qualifying: Vec<(String, Decimal)> = entries
        .into_iter()
        .filter(|(_, value)| *value > Decimal::ZERO)
        .collect();
    let total: Decimal = qualifying.iter().map(|(_, v)| *v).sum();
    let mut out: Vec<AllocationSlice> = qualifying
        .into_iter()
        .map(|(name, value)| AllocationSlice {
            name,
            percentage: value / total * Decimal::ONE_HUNDRED,
            value,
        })
        .collect();
    out.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.name.cmp(&b.name)));
    out
}

/// Per-instrument share of total portfolio value, value descending.
pub fn allocation(holdings: &[Holding]) -> Vec<AllocationSlice> {
    let entries = holdings
        .iter()
        .map(|h| (h.symbol.clone(), h.value()))
        .collect();
    let out = slices(entries);
    debug!(instruments = out.len(), "computed allocation");
    out
}

/// Same contract grouped by asset class (cash / crypto / other).
pub fn class_allocation(holdings: &[Holding]) -> Vec<AllocationSlice> {
    let mut by_class: BTreeMap<&'static str, Decimal> = BTreeMap::new();
    for h in holdings {
        *by_class.entry(h.class.as_str()).or_insert(Decimal::ZERO) += h.value();
    }
    slices(
        by_class
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect(),
    )
}

/// Invested vs current valuation per holding, filtered to holdings that have
/// either, ordered by current value descending.
pub fn performance(holdings: &[Holding]) -> Vec<PerformancePoint> {
    let mut out: Vec<PerformancePoint> = holdings
        .iter()
        .map(|h| PerformancePoint {
            name: h.symbol.clone(),
            invested: h.invested(),
            current: h.value(),
        })
        .filter(|p| p.invested > Decimal::ZERO || p.current > Decimal::ZERO)
        .collect();
    out.sort_by(|a, b| b.current.cmp(&a.current).then_with(|| a.name.cmp(&b.name)));
    out
}

/// Total value and gain across all holdings. Gain percent is 0 when nothing
/// is invested.
pub fn summary(holdings: &[Holding]) -> PortfolioSummary {
    let total_value: Decimal = holdings.iter().map(Holding::value).sum();
    let total_invested: Decimal = holdings.iter().map(Holding::invested).sum();
    let total_gain = total_value - total_invested;
    let total_gain_percent = if total_invested > Decimal::ZERO {
        total_gain / total_invested * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };
    PortfolioSummary {
        total_value,
        total_gain,
        total_gain_percent,
    }
}
