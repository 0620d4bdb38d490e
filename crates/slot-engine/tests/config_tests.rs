//! Tests for engine configuration.

use chrono::{TimeDelta, TimeZone, Utc};
use slot_engine::answer::format_answer_with;
use slot_engine::config::{SlotConfig, DEFAULT_SUGGESTION_LIMIT, MAX_DISPLAY_OFFSET_MINUTES};
use slot_engine::interval::TimeInterval;
use slot_engine::locale::FRENCH;
use slot_engine::error::SlotError;

#[test]
fn defaults() {
    let config = SlotConfig::default();
    assert_eq!(config.suggestion_limit, DEFAULT_SUGGESTION_LIMIT);
    assert_eq!(config.business_day_start_hour, 8);
    assert_eq!(config.business_day_end_hour, 16);
    assert_eq!(config.display_offset().unwrap().num_minutes(), 60);
    assert_eq!(config.default_start_hour, None);
    assert_eq!(config.default_end_hour, None);
    assert!(config.validate().is_ok());
}

#[test]
fn partial_document_keeps_other_defaults() {
    let config =
        SlotConfig::from_json_str(r#"{"suggestion_limit": 5, "default_start_hour": 7, "default_end_hour": 18}"#)
            .unwrap();

    assert_eq!(config.suggestion_limit, 5);
    assert_eq!(config.default_start_hour, Some(7));
    assert_eq!(config.default_end_hour, Some(18));
    assert_eq!(config.business_day_start_hour, 8);
}

#[test]
fn empty_document_is_default() {
    assert_eq!(SlotConfig::from_json_str("{}").unwrap(), SlotConfig::default());
}

#[test]
fn invalid_documents_are_rejected() {
    assert!(matches!(
        SlotConfig::from_json_str("suggestion_limit = 3"),
        Err(SlotError::Parse(_))
    ));
    assert!(matches!(
        SlotConfig::from_json_str(r#"{"suggestion_limit": 0}"#),
        Err(SlotError::Validation(_))
    ));
    assert!(matches!(
        SlotConfig::from_json_str(r#"{"default_end_hour": 30}"#),
        Err(SlotError::Validation(_))
    ));
    assert!(matches!(
        SlotConfig::from_json_str(r#"{"business_day_start_hour": 16, "business_day_end_hour": 8}"#),
        Err(SlotError::Validation(_))
    ));
}

#[test]
fn display_offset_is_bounded_to_one_day() {
    for minutes in [i64::MAX, i64::MIN, 1_000_000_000, MAX_DISPLAY_OFFSET_MINUTES + 1] {
        let json = format!(r#"{{"display_offset_minutes": {}}}"#, minutes);
        assert!(
            matches!(SlotConfig::from_json_str(&json), Err(SlotError::Validation(_))),
            "offset {} accepted",
            minutes
        );

        let unchecked = SlotConfig {
            display_offset_minutes: minutes,
            ..SlotConfig::default()
        };
        assert!(matches!(unchecked.display_offset(), Err(SlotError::Validation(_))));
    }

    let config = SlotConfig::from_json_str(r#"{"display_offset_minutes": -1440}"#).unwrap();
    assert_eq!(config.display_offset().unwrap(), TimeDelta::days(-1));
}

#[test]
fn offset_past_chrono_range_is_an_error() {
    let slot = TimeInterval::new(
        Utc.with_ymd_and_hms(2025, 2, 21, 10, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2025, 2, 21, 11, 0, 0).unwrap(),
    );

    let err = format_answer_with(&[slot], TimeDelta::MAX, &FRENCH).unwrap_err();

    assert!(matches!(err, SlotError::Validation(_)));
}
