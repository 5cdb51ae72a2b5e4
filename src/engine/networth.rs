// Copyright (c) 2025 Wealthcompass.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::period::TimeRange;
use crate::models::NetWorthSnapshot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotPoint {
    pub date: NaiveDate,
    pub value: Decimal,
}

/// Snapshots falling inside the resolved range, ascending by date. No
/// synthetic gap-filling: the series is sparse by nature, reflecting only
/// real captures. Same-day duplicates pass through in input order.
pub fn net_worth_series(
    snapshots: &[NetWorthSnapshot],
    range: TimeRange,
    now: NaiveDate,
) -> Vec<SnapshotPoint> {
    let interval = range.resolve(now);
    let mut out: Vec<SnapshotPoint> = snapshots
        .iter()
        .filter(|s| interval.contains(s.date))
        .map(|s| SnapshotPoint {
            date: s.date,
            value: s.value,
        })
        .collect();
    out.sort_by_key(|p| p.date);
    out
}
