// Copyright (c) 2025 Wealthcompass.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The analytics engine: pure functions that turn in-memory snapshots of the
//! ledger, holdings, and rate table into chart-ready series. No I/O, no
//! clock reads, no shared state; "now" is always injected by the caller.

pub mod cashflow;
pub mod currency;
pub mod networth;
pub mod period;
pub mod portfolio;
pub mod transactions;

use thiserror::Error;

/// The engine raises only for malformed input. "No data" is never an error:
/// aggregators return empty or zeroed structures for zero matching records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Requested currency absent from the rate table. Non-fatal: callers
    /// fall back to the unconverted amount with a "rate unavailable" marker.
    #[error("no exchange rate for currency '{code}'")]
    MissingRate { code: String },

    /// Unrecognized period/range token. Fatal to that call only; callers
    /// fall back to a default token.
    #[error("unrecognized period token '{token}'")]
    InvalidPeriod { token: String },
}
