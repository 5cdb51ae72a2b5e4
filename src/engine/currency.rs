// Copyright (c) 2025 Wealthcompass.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::EngineError;

/// A point-in-time snapshot of exchange rates, all expressed relative to one
/// explicit base currency (1 base = rate quote). Refreshed externally; the
/// engine treats staleness as invisible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    base: String,
    rates: HashMap<String, Decimal>,
}

impl RateTable {
    pub fn new(base: &str) -> Self {
        RateTable {
            base: base.to_uppercase(),
            rates: HashMap::new(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn insert(&mut self, code: &str, rate: Decimal) {
        self.rates.insert(code.to_uppercase(), rate);
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Rate for one unit of the base currency in `code`. The base itself
    /// always converts at 1. A zero stored rate is unusable for conversion
    /// and is reported as missing.
    pub fn rate(&self, code: &str) -> Result<Decimal, EngineError> {
        let code = code.to_uppercase();
        if code == self.base {
            return Ok(Decimal::ONE);
        }
        match self.rates.get(&code) {
            Some(r) if !r.is_zero() => Ok(*r),
            _ => Err(EngineError::MissingRate { code }),
        }
    }

    /// Converts `amount` from one currency to another via a single hop
    /// through the base: `amount / rate[from] * rate[to]`.
    pub fn convert(&self, amount: Decimal, from: &str, to: &str) -> Result<Decimal, EngineError> {
        if from.eq_ignore_ascii_case(to) {
            return Ok(amount);
        }
        let from_rate = self.rate(from)?;
        let to_rate = self.rate(to)?;
        let converted = amount / from_rate * to_rate;
        debug!(%amount, from, to, %converted, "converted via base {}", self.base);
        Ok(converted)
    }
}
