// Copyright (c) 2025 Wealthcompass.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Income => "income",
            TxKind::Expense => "expense",
        }
    }

    pub fn parse(s: &str) -> Option<TxKind> {
        match s {
            "income" => Some(TxKind::Income),
            "expense" => Some(TxKind::Expense),
            _ => None,
        }
    }
}

/// Closed category sets per transaction kind. Unknown labels bucket into
/// `Other` so aggregation never fragments on free-form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncomeCategory {
    Salary,
    Freelance,
    Dividends,
    Other,
}

impl From<&str> for IncomeCategory {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "salary" => IncomeCategory::Salary,
            "freelance" => IncomeCategory::Freelance,
            "dividends" => IncomeCategory::Dividends,
            _ => IncomeCategory::Other,
        }
    }
}

impl IncomeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncomeCategory::Salary => "Salary",
            IncomeCategory::Freelance => "Freelance",
            IncomeCategory::Dividends => "Dividends",
            IncomeCategory::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Housing,
    Food,
    Transport,
    Utilities,
    Fuel,
    Entertainment,
    Shopping,
    Health,
    Other,
}

impl From<&str> for ExpenseCategory {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "housing" => ExpenseCategory::Housing,
            "food" => ExpenseCategory::Food,
            "transport" => ExpenseCategory::Transport,
            "utilities" => ExpenseCategory::Utilities,
            "fuel" => ExpenseCategory::Fuel,
            "entertainment" => ExpenseCategory::Entertainment,
            "shopping" => ExpenseCategory::Shopping,
            "health" => ExpenseCategory::Health,
            _ => ExpenseCategory::Other,
        }
    }
}

impl ExpenseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Housing => "Housing",
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Fuel => "Fuel",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Health => "Health",
            ExpenseCategory::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Category {
    Income(IncomeCategory),
    Expense(ExpenseCategory),
}

impl Category {
    /// Canonicalizes a free-form label against the closed set for `kind`.
    pub fn parse(kind: TxKind, label: &str) -> Category {
        match kind {
            TxKind::Income => Category::Income(IncomeCategory::from(label)),
            TxKind::Expense => Category::Expense(ExpenseCategory::from(label)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Income(c) => c.as_str(),
            Category::Expense(c) => c.as_str(),
        }
    }
}

/// A ledger entry. Append-only: entries are created and deleted, never
/// updated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    pub kind: TxKind,
    pub amount: Decimal, // non-negative, base currency units
    pub category: Category,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Cash,
    Crypto,
    Other,
}

impl From<&str> for AssetClass {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "cash" => AssetClass::Cash,
            "crypto" => AssetClass::Crypto,
            _ => AssetClass::Other,
        }
    }
}

impl AssetClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetClass::Cash => "Cash",
            AssetClass::Crypto => "Crypto",
            AssetClass::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    pub id: i64,
    pub symbol: String,
    pub name: String,
    pub class: AssetClass,
    pub quantity: Decimal, // invariant: >= 0
    pub avg_buy_price: Decimal,
    pub current_price: Decimal,
    pub currency: String,
}

impl Holding {
    pub fn value(&self) -> Decimal {
        self.quantity * self.current_price
    }

    pub fn invested(&self) -> Decimal {
        self.quantity * self.avg_buy_price
    }
}

/// A net-worth data point, already currency-normalized at capture time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetWorthSnapshot {
    pub id: i64,
    pub date: NaiveDate,
    pub value: Decimal,
}
