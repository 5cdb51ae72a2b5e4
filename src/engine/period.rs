// Copyright (c) 2025 Wealthcompass.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::EngineError;

/// An inclusive date interval. A `None` start means "no lower bound":
/// aggregators include everything up to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInterval {
    pub start: Option<NaiveDate>,
    pub end: NaiveDate,
}

impl DateInterval {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date <= self.end && self.start.is_none_or(|s| date >= s)
    }
}

/// Symbolic period tokens for expense/spending analytics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    SevenDays,
    ThirtyDays,
    ThreeMonths,
    YearToDate,
    AllTime,
}

impl FromStr for Period {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "7d" => Ok(Period::SevenDays),
            "30d" => Ok(Period::ThirtyDays),
            "3m" => Ok(Period::ThreeMonths),
            "ytd" => Ok(Period::YearToDate),
            "all" => Ok(Period::AllTime),
            other => Err(EngineError::InvalidPeriod {
                token: other.to_string(),
            }),
        }
    }
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::SevenDays => "7d",
            Period::ThirtyDays => "30d",
            Period::ThreeMonths => "3m",
            Period::YearToDate => "ytd",
            Period::AllTime => "all",
        }
    }

    /// Resolves the token into an inclusive interval ending at `now`
    /// (date-truncated). `7d` means a 7-day window including today.
    pub fn resolve(&self, now: NaiveDate) -> DateInterval {
        let start = match self {
            Period::SevenDays => now.checked_sub_days(Days::new(6)),
            Period::ThirtyDays => now.checked_sub_days(Days::new(29)),
            Period::ThreeMonths => now.checked_sub_months(Months::new(3)),
            Period::YearToDate => NaiveDate::from_ymd_opt(now.year(), 1, 1),
            Period::AllTime => None,
        };
        DateInterval { start, end: now }
    }
}

/// Symbolic range tokens for the net-worth trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    Week,
    Month,
    SixMonths,
    Year,
    All,
}

impl FromStr for TimeRange {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "1W" => Ok(TimeRange::Week),
            "1M" => Ok(TimeRange::Month),
            "6M" => Ok(TimeRange::SixMonths),
            "1Y" => Ok(TimeRange::Year),
            "ALL" => Ok(TimeRange::All),
            _ => Err(EngineError::InvalidPeriod {
                token: s.to_string(),
            }),
        }
    }
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Week => "1W",
            TimeRange::Month => "1M",
            TimeRange::SixMonths => "6M",
            TimeRange::Year => "1Y",
            TimeRange::All => "ALL",
        }
    }

    pub fn resolve(&self, now: NaiveDate) -> DateInterval {
        let start = match self {
            TimeRange::Week => now.checked_sub_days(Days::new(6)),
            TimeRange::Month => now.checked_sub_months(Months::new(1)),
            TimeRange::SixMonths => now.checked_sub_months(Months::new(6)),
            TimeRange::Year => now.checked_sub_months(Months::new(12)),
            TimeRange::All => None,
        };
        DateInterval { start, end: now }
    }
}
