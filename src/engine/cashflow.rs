// Copyright (c) 2025 Wealthcompass.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Transaction, TxKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCashFlow {
    pub income: Decimal,
    pub expenses: Decimal,
    pub savings_rate: Decimal, // percent
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyFlow {
    pub month: String, // YYYY-MM
    pub income: Decimal,
    pub expenses: Decimal,
}

/// Income, expenses, and savings rate for one calendar month (year + month
/// match, not a rolling window). Savings rate is 0 when income is 0,
/// regardless of expenses.
pub fn monthly_cash_flow(ledger: &[Transaction], year: i32, month: u32) -> MonthlyCashFlow {
    let mut income = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;
    for tx in ledger {
        if tx.date.year() != year || tx.date.month() != month {
            continue;
        }
        match tx.kind {
            TxKind::Income => income += tx.amount,
            TxKind::Expense => expenses += tx.amount,
        }
    }
    let savings_rate = if income > Decimal::ZERO {
        (income - expenses) / income * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };
    MonthlyCashFlow {
        income,
        expenses,
        savings_rate,
    }
}

/// Per-month income/expense pairs for the last `months` calendar months
/// ending at `now`'s month, ascending and zero-filled for silent months.
pub fn cash_flow_trend(ledger: &[Transaction], months: u32, now: NaiveDate) -> Vec<MonthlyFlow> {
    let mut buckets: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
    let mut cursor = NaiveDate::from_ymd_opt(now.year(), now.month(), 1);
    for _ in 0..months {
        let Some(first) = cursor else { break };
        buckets.insert(
            format!("{:04}-{:02}", first.year(), first.month()),
            (Decimal::ZERO, Decimal::ZERO),
        );
        cursor = first.checked_sub_months(Months::new(1));
    }

    for tx in ledger {
        let key = format!("{:04}-{:02}", tx.date.year(), tx.date.month());
        if let Some(entry) = buckets.get_mut(&key) {
            match tx.kind {
                TxKind::Income => entry.0 += tx.amount,
                TxKind::Expense => entry.1 += tx.amount,
            }
        }
    }

    // BTreeMap keys are YYYY-MM strings, so iteration order is chronological.
    buckets
        .into_iter()
        .map(|(month, (income, expenses))| MonthlyFlow {
            month,
            income,
            expenses,
        })
        .collect()
}
