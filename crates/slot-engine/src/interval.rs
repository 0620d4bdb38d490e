//! Occupied-interval parsing and normalization.
//!
//! Raw intervals arrive as pairs of ISO 8601 strings. They are parsed into UTC
//! instants, zero- and negative-length pairs are dropped, and the rest is
//! sorted by start (then end) so the free-slot sweep can walk them in order.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// Naive layouts accepted when a timestamp carries no offset. `%.f` also
/// matches an absent fractional part.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// A half-open time range `[start, end)` in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeInterval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// True when the interval covers no time at all (`start >= end`).
    pub fn is_degenerate(&self) -> bool {
        self.start >= self.end
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Render both bounds as millisecond-precision `Z` timestamps.
    pub fn to_raw(&self) -> RawInterval {
        RawInterval {
            start: format_timestamp(self.start),
            end: format_timestamp(self.end),
        }
    }
}

/// An interval as it crosses the JSON boundary: two unparsed timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInterval {
    pub start: String,
    pub end: String,
}

impl RawInterval {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Parse both bounds. Does not check ordering.
    pub fn parse(&self) -> Result<TimeInterval> {
        Ok(TimeInterval {
            start: parse_timestamp(&self.start)?,
            end: parse_timestamp(&self.end)?,
        })
    }
}

/// Parse an ISO 8601 timestamp into `DateTime<Utc>`.
///
/// Accepts RFC 3339 (any offset, optional fractional seconds) and naive
/// `YYYY-MM-DDTHH:MM[:SS[.fff]]`, which is interpreted as UTC.
///
/// # Errors
/// Returns `SlotError::Parse` when no accepted layout matches.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    let trimmed = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    parse_naive_utc(trimmed)
}

/// Parse a timestamp that must not carry an offset, reading it as UTC.
///
/// # Errors
/// Returns `SlotError::Parse` for anything else, including strings that
/// already end in `Z` or a numeric offset.
pub fn parse_naive_utc(s: &str) -> Result<DateTime<Utc>> {
    let trimmed = s.trim();
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|ndt| ndt.and_utc())
        .ok_or_else(|| SlotError::Parse(format!("'{}' is not a valid timestamp", s)))
}

/// Format an instant the way free slots are reported: `2025-02-21T09:00:00.000Z`.
pub fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Drop degenerate intervals and sort the rest by `(start, end)`.
pub fn normalize_intervals(intervals: impl IntoIterator<Item = TimeInterval>) -> Vec<TimeInterval> {
    let mut kept: Vec<TimeInterval> = intervals
        .into_iter()
        .filter(|interval| !interval.is_degenerate())
        .collect();
    kept.sort_by_key(|interval| (interval.start, interval.end));
    kept
}

/// Parse raw occupied intervals and normalize them for the free-slot sweep.
///
/// # Errors
/// Returns `SlotError::Parse` if any bound of any interval fails to parse.
/// Nothing is returned partially.
pub fn normalize(raw: &[RawInterval]) -> Result<Vec<TimeInterval>> {
    let parsed = raw
        .iter()
        .map(RawInterval::parse)
        .collect::<Result<Vec<_>>>()?;
    let total = parsed.len();
    let normalized = normalize_intervals(parsed);

    tracing::debug!(
        parsed = total,
        discarded = total - normalized.len(),
        "normalized occupied intervals"
    );

    Ok(normalized)
}
