//! Tests for the weekend-skipping business-day advance.

use chrono::{TimeZone, Utc, Weekday};
use slot_engine::business_day::{advance_to_business_day, is_weekend, next_business_day};
use slot_engine::error::SlotError;

fn window_bounds(reference: &str) -> (String, String) {
    let w = next_business_day(reference, 8, 16).unwrap();
    (w.start.to_rfc3339(), w.end.to_rfc3339())
}

#[test]
fn friday_lands_on_monday() {
    // 2025-02-21 is a Friday.
    let (start, end) = window_bounds("2025-02-21T10:00:00");
    assert_eq!(start, "2025-02-24T08:00:00+00:00");
    assert_eq!(end, "2025-02-24T16:00:00+00:00");
}

#[test]
fn saturday_lands_on_monday() {
    let (start, _) = window_bounds("2025-02-22T10:00:00");
    assert_eq!(start, "2025-02-24T08:00:00+00:00");
}

#[test]
fn sunday_lands_on_monday() {
    let (start, _) = window_bounds("2025-02-23T23:59:00");
    assert_eq!(start, "2025-02-24T08:00:00+00:00");
}

#[test]
fn tuesday_lands_on_wednesday() {
    let (start, end) = window_bounds("2025-02-25T17:30:00");
    assert_eq!(start, "2025-02-26T08:00:00+00:00");
    assert_eq!(end, "2025-02-26T16:00:00+00:00");
}

#[test]
fn advance_crosses_month_and_year() {
    // Friday 2025-02-28 → Monday 2025-03-03
    let (start, _) = window_bounds("2025-02-28T09:00:00");
    assert_eq!(start, "2025-03-03T08:00:00+00:00");

    // Wednesday 2025-12-31 → Thursday 2026-01-01 (holidays are not skipped)
    let (start, _) = window_bounds("2025-12-31T09:00:00");
    assert_eq!(start, "2026-01-01T08:00:00+00:00");
}

#[test]
fn advance_keeps_time_of_day() {
    let reference = Utc.with_ymd_and_hms(2025, 2, 21, 13, 45, 0).unwrap();
    let advanced = advance_to_business_day(reference).unwrap();
    assert_eq!(advanced, Utc.with_ymd_and_hms(2025, 2, 24, 13, 45, 0).unwrap());
}

#[test]
fn custom_hours_shape_the_window() {
    let w = next_business_day("2025-02-25T10:00:00", 9, 17).unwrap();
    assert_eq!(w.start, Utc.with_ymd_and_hms(2025, 2, 26, 9, 0, 0).unwrap());
    assert_eq!(w.end, Utc.with_ymd_and_hms(2025, 2, 26, 17, 0, 0).unwrap());
}

#[test]
fn reference_with_zone_designator_is_rejected() {
    let err = next_business_day("2025-02-21T10:00:00Z", 8, 16).unwrap_err();
    assert!(matches!(err, SlotError::Parse(_)));
    assert!(err.to_string().contains("requested_datetime"));
}

#[test]
fn unparseable_reference_is_rejected() {
    assert!(matches!(
        next_business_day("next friday", 8, 16),
        Err(SlotError::Parse(_))
    ));
}

#[test]
fn weekend_detection() {
    assert!(is_weekend(Weekday::Sat));
    assert!(is_weekend(Weekday::Sun));
    assert!(!is_weekend(Weekday::Mon));
    assert!(!is_weekend(Weekday::Fri));
}
