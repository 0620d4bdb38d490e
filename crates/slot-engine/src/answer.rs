//! Render suggested slots as a French sentence.
//!
//! ```text
//! le 21 février de 11 heures à 12 heures et de 14 heures à 15 heures
//! ```
//!
//! The date comes from the first slot only. Later slots contribute their hours.

use chrono::{Datelike, TimeDelta, Timelike};

use crate::error::{Result, SlotError};
use crate::interval::TimeInterval;
use crate::locale::{MonthNames, FRENCH};

/// Minutes between UTC and the displayed wall clock (UTC+1).
pub const DISPLAY_OFFSET_MINUTES: i64 = 60;

/// Render `slots` with the default +1 hour offset and French month names.
pub fn format_answer(slots: &[TimeInterval]) -> Result<String> {
    format_answer_with(slots, TimeDelta::minutes(DISPLAY_OFFSET_MINUTES), &FRENCH)
}

/// Render `slots` after shifting them by `offset`, naming months from `months`.
///
/// # Errors
/// Returns `SlotError::Validation` if `slots` is empty or if shifting a slot
/// by `offset` leaves chrono's date range.
pub fn format_answer_with(
    slots: &[TimeInterval],
    offset: TimeDelta,
    months: &MonthNames,
) -> Result<String> {
    if slots.is_empty() {
        return Err(SlotError::Validation(
            "'suggested_slots' is required and should contain an array of slots.".to_string(),
        ));
    }

    let mut sentence = String::new();
    for (index, slot) in slots.iter().enumerate() {
        let shift = |dt: chrono::DateTime<chrono::Utc>| {
            dt.checked_add_signed(offset).ok_or_else(|| {
                SlotError::Validation(format!(
                    "display offset of {} minutes moves '{}' out of range.",
                    offset.num_minutes(),
                    dt
                ))
            })
        };
        let start = shift(slot.start)?;
        let end = shift(slot.end)?;

        if index == 0 {
            sentence.push_str(&format!(
                "le {:02} {} de {} heures à {} heures",
                start.day(),
                months.name_for(&start),
                start.hour(),
                end.hour()
            ));
        } else {
            sentence.push_str(&format!(
                " et de {} heures à {} heures",
                start.hour(),
                end.hour()
            ));
        }
    }

    tracing::debug!(slots = slots.len(), "formatted answer");
    Ok(sentence)
}
