// Copyright (c) 2025 Wealthcompass.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::period::DateInterval;
use crate::models::{Transaction, TxKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySpend {
    pub date: NaiveDate,
    pub amount: Decimal,
}

/// Sums expense amounts per category inside the interval. Categories with no
/// matching transactions are omitted. Output is sorted by value descending
/// (category name breaking ties) purely for determinism; callers may re-sort.
pub fn expenses_by_category(ledger: &[Transaction], interval: &DateInterval) -> Vec<CategoryTotal> {
    let mut totals: HashMap<&'static str, Decimal> = HashMap::new();
    for tx in ledger {
        if tx.kind == TxKind::Expense && interval.contains(tx.date) {
            *totals.entry(tx.category.as_str()).or_insert(Decimal::ZERO) += tx.amount;
        }
    }
    let mut out: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(category, value)| CategoryTotal {
            category: category.to_string(),
            value,
        })
        .collect();
    out.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.category.cmp(&b.category)));
    debug!(buckets = out.len(), "aggregated expenses by category");
    out
}

/// Daily expense totals across the interval, zero-filled: exactly one entry
/// per calendar day, ascending, so charts render a continuous line. An
/// unbounded interval is anchored at the earliest expense on record; with no
/// expenses at all the timeline is empty.
pub fn spending_timeline(ledger: &[Transaction], interval: &DateInterval) -> Vec<DailySpend> {
    let start = match interval.start {
        Some(s) => s,
        None => match ledger
            .iter()
            .filter(|t| t.kind == TxKind::Expense && t.date <= interval.end)
            .map(|t| t.date)
            .min()
        {
            Some(earliest) => earliest,
            None => return Vec::new(),
        },
    };
    if start > interval.end {
        return Vec::new();
    }

    let mut by_day: HashMap<NaiveDate, Decimal> = HashMap::new();
    for tx in ledger {
        if tx.kind == TxKind::Expense && tx.date >= start && tx.date <= interval.end {
            *by_day.entry(tx.date).or_insert(Decimal::ZERO) += tx.amount;
        }
    }

    let mut out = Vec::new();
    let mut day = start;
    loop {
        out.push(DailySpend {
            date: day,
            amount: by_day.get(&day).copied().unwrap_or(Decimal::ZERO),
        });
        if day >= interval.end {
            break;
        }
        let Some(next) = day.succ_opt() else { break };
        day = next;
    }
    out
}
