use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::time_utils::{format_timestamp, parse_timestamp};

/// A single half-hour traffic count read from the input file.
///
/// Readings are plain values: fields are only reachable through accessors,
/// and analyses copy them rather than handing out mutable references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reading {
    /// Local start of the half-hour period.
    timestamp: NaiveDateTime,
    /// Number of cars counted in the period. Zero is a real observation.
    count: u64,
}

impl Reading {
    pub fn new(timestamp: NaiveDateTime, count: u64) -> Self {
        Self { timestamp, count }
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Calendar date the period falls on.
    pub fn day(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format_timestamp(&self.timestamp), self.count)
    }
}

impl FromStr for Reading {
    type Err = ParseError;

    /// Parse `<timestamp> <count>`, e.g. `2021-12-01T05:00:00 5`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        let [ts, count] = fields.as_slice() else {
            return Err(ParseError::FieldCount(fields.len()));
        };

        let timestamp =
            parse_timestamp(ts).ok_or_else(|| ParseError::Timestamp((*ts).to_string()))?;
        let count = count
            .parse::<u64>()
            .map_err(|_| ParseError::Count((*count).to_string()))?;

        Ok(Self::new(timestamp, count))
    }
}

/// Cars counted on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub count: u64,
}

impl fmt::Display for DailyTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date.format("%Y-%m-%d"), self.count)
    }
}

/// Parameters of one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// How many of the busiest periods to report.
    pub top_n: usize,
    /// How many contiguous readings make up the least-busy window.
    pub window: usize,
}

impl Default for AnalysisOptions {
    /// Top three half hours and a 1.5 hour (three reading) window.
    fn default() -> Self {
        Self { top_n: 3, window: 3 }
    }
}

/// Everything the presenter needs from one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficReport {
    /// Number of readings the report was computed from.
    pub readings_analyzed: usize,
    /// Sum of every reading's count.
    pub total_cars: u64,
    /// Per-day totals in the order each day first appeared in the input.
    pub daily_totals: Vec<DailyTotal>,
    /// Requested size of `top_periods`.
    pub top_n: usize,
    /// Busiest readings, highest count first.
    pub top_periods: Vec<Reading>,
    /// Number of contiguous readings in `least_busy_period`.
    pub window: usize,
    /// Contiguous run of `window` readings with the smallest total.
    pub least_busy_period: Vec<Reading>,
}
