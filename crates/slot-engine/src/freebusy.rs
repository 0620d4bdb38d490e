//! Compute free time slots inside a work-day window.
//!
//! The sweep walks occupied intervals in start order with a cursor that only
//! moves forward. Every stretch the cursor has to jump over is a free slot.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

use crate::config::MAX_HOUR;
use crate::error::{Result, SlotError};
use crate::interval::TimeInterval;

/// The part of one UTC day that is eligible for scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl WorkWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Window from `start_hour:00` to `end_hour:00` UTC on `date`.
    ///
    /// `end_hour` may be 24 (midnight closing the day). A start hour after the
    /// end hour yields an inverted window, which simply has no free slots.
    ///
    /// # Errors
    /// Returns `SlotError::Validation` if either hour is above 24.
    pub fn for_day(date: NaiveDate, start_hour: u32, end_hour: u32) -> Result<Self> {
        for (name, hour) in [("startHour", start_hour), ("endHour", end_hour)] {
            if hour > MAX_HOUR {
                return Err(SlotError::Validation(format!(
                    "'{}' must be between 0 and {}, got {}.",
                    name, MAX_HOUR, hour
                )));
            }
        }
        let midnight = date.and_time(chrono::NaiveTime::MIN).and_utc();
        Ok(Self {
            start: midnight + TimeDelta::hours(i64::from(start_hour)),
            end: midnight + TimeDelta::hours(i64::from(end_hour)),
        })
    }

    /// False for zero-width and inverted windows.
    pub fn is_open(&self) -> bool {
        self.start < self.end
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Find the maximal free intervals in `window` not covered by `occupied`.
///
/// `occupied` must be normalized (see [`crate::interval::normalize`]): no
/// degenerate entries, sorted by start. Intervals may overlap each other and
/// may extend past either side of the window.
///
/// Returns an empty list when the window is fully booked or not open.
pub fn find_free_slots(window: &WorkWindow, occupied: &[TimeInterval]) -> Vec<TimeInterval> {
    if !window.is_open() {
        tracing::debug!(start = %window.start, end = %window.end, "work window is empty");
        return Vec::new();
    }

    let mut free_slots = Vec::new();
    let mut cursor = window.start;

    for busy in occupied {
        let gap_end = busy.start.min(window.end);
        if cursor < gap_end {
            free_slots.push(TimeInterval::new(cursor, gap_end));
        }
        cursor = cursor.max(busy.end);
    }

    // Trailing free slot after the last busy period.
    if cursor < window.end {
        free_slots.push(TimeInterval::new(cursor, window.end));
    }

    tracing::debug!(
        occupied = occupied.len(),
        free = free_slots.len(),
        "computed free slots"
    );

    free_slots
}

/// Merge occupied intervals into disjoint busy blocks clipped to `window`.
///
/// The busy-side counterpart of [`find_free_slots`], for callers that need
/// to show when the day is taken rather than when it is open. Overlapping
/// and touching intervals collapse into one block; intervals entirely
/// outside the window vanish. `occupied` need not be sorted. Together with
/// [`find_free_slots`] the result tiles the window exactly.
pub fn merge_busy_periods(window: &WorkWindow, occupied: &[TimeInterval]) -> Vec<TimeInterval> {
    let mut clipped: Vec<TimeInterval> = occupied
        .iter()
        .filter(|busy| busy.start < window.end && busy.end > window.start)
        .map(|busy| TimeInterval::new(busy.start.max(window.start), busy.end.min(window.end)))
        .collect();
    clipped.sort_by_key(|busy| (busy.start, busy.end));

    let mut merged: Vec<TimeInterval> = Vec::new();
    for busy in clipped {
        if let Some(last) = merged.last_mut() {
            if busy.start <= last.end {
                last.end = last.end.max(busy.end);
                continue;
            }
        }
        merged.push(busy);
    }

    merged
}
