//! Move a date forward to the next business day.
//!
//! Business days are Monday through Friday in the UTC calendar. Public
//! holidays are not considered.

use chrono::{DateTime, Datelike, Days, Utc, Weekday};

use crate::error::{Result, SlotError};
use crate::freebusy::WorkWindow;
use crate::interval::parse_naive_utc;

/// True for Saturday and Sunday.
pub fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}

/// Step one calendar day past `reference`, then keep stepping while the day
/// falls on a weekend. The time of day is preserved.
///
/// # Errors
/// Returns `SlotError::Parse` if the result would leave chrono's date range.
pub fn advance_to_business_day(reference: DateTime<Utc>) -> Result<DateTime<Utc>> {
    let step = |dt: DateTime<Utc>| {
        dt.checked_add_days(Days::new(1))
            .ok_or_else(|| SlotError::Parse(format!("'{}' is out of range", reference)))
    };

    let mut day = step(reference)?;
    while is_weekend(day.weekday()) {
        day = step(day)?;
    }
    Ok(day)
}

/// Work window on the business day following `reference`.
///
/// `reference` is a timestamp without offset (`2025-02-21T10:00:00`) and is
/// read as UTC.
///
/// # Errors
/// `SlotError::Parse` if `reference` is not a naive timestamp,
/// `SlotError::Validation` if an hour is above 24.
pub fn next_business_day(reference: &str, start_hour: u32, end_hour: u32) -> Result<WorkWindow> {
    let instant = parse_naive_utc(reference).map_err(|_| {
        SlotError::Parse(
            "'requested_datetime' must be a valid ISO date without timezone.".to_string(),
        )
    })?;
    let business_day = advance_to_business_day(instant)?;

    tracing::debug!(
        reference = %instant,
        business_day = %business_day.date_naive(),
        "advanced to next business day"
    );

    WorkWindow::for_day(business_day.date_naive(), start_hour, end_hour)
}
