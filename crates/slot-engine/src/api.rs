//! JSON request/response boundary.
//!
//! Each operation takes an already-parsed JSON request body and returns a
//! serializable response. Field names match the wire contract of the
//! scheduling endpoints (`value`, `startHour`, `free_slots`, ...), so a
//! transport layer only has to move bytes.

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::answer::format_answer_with;
use crate::business_day::next_business_day;
use crate::config::{SlotConfig, MAX_HOUR};
use crate::error::{Result, SlotError};
use crate::freebusy::{find_free_slots, WorkWindow};
use crate::interval::{normalize, parse_timestamp, RawInterval, TimeInterval};
use crate::locale::FRENCH;
use crate::suggest::suggest_slots as take_suggestions;

/// Value sent in place of a slot list when the work window is fully booked.
pub const NO_FREE_SLOTS: &str = "0";

/// Free slots as they go on the wire: a list, or `"0"` when there is none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FreeSlots {
    Available(Vec<RawInterval>),
    FullyBooked,
}

impl FreeSlots {
    pub fn from_intervals(slots: &[TimeInterval]) -> Self {
        if slots.is_empty() {
            FreeSlots::FullyBooked
        } else {
            FreeSlots::Available(slots.iter().map(TimeInterval::to_raw).collect())
        }
    }
}

impl Serialize for FreeSlots {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            FreeSlots::Available(slots) => slots.serialize(serializer),
            FreeSlots::FullyBooked => serializer.serialize_str(NO_FREE_SLOTS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FreeSlotsResponse {
    pub free_slots: FreeSlots,
}

/// Suggested slots, copied verbatim from the request's `free_slots`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestedSlotsResponse {
    pub suggested_slots: Vec<Value>,
}

/// Work window of the next business day, bounds rendered as `YYYY-MM-DDTHH:MM:SSZ`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusinessWindowResponse {
    pub start: String,
    pub end: String,
}

impl From<WorkWindow> for BusinessWindowResponse {
    fn from(window: WorkWindow) -> Self {
        Self {
            start: window.start.to_rfc3339_opts(SecondsFormat::Secs, true),
            end: window.end.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Body returned for any rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl From<&SlotError> for ErrorResponse {
    fn from(err: &SlotError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// Parse a raw request body.
///
/// # Errors
/// Returns `SlotError::Validation` for malformed JSON.
pub fn parse_body(body: &str) -> Result<Value> {
    serde_json::from_str(body)
        .map_err(|e| SlotError::Validation(format!("request body is not valid JSON: {}", e)))
}

/// Compute the free slots of the day named by the first occupied interval.
///
/// Request: `{"value": [{"start", "end"}...], "startHour": 9, "endHour": 12}`.
/// Hours may also be numeric strings (`"9"`).
pub fn compute_free_slots(body: &Value, config: &SlotConfig) -> Result<FreeSlotsResponse> {
    let slots = free_slots_for(body, config).map_err(|e| rejected("free slots", e))?;
    Ok(FreeSlotsResponse {
        free_slots: FreeSlots::from_intervals(&slots),
    })
}

/// Keep the first `config.suggestion_limit` entries of `free_slots`.
///
/// Entries are not inspected: extra fields and non-object entries pass
/// through unchanged.
pub fn suggest_slots(body: &Value, config: &SlotConfig) -> Result<SuggestedSlotsResponse> {
    let suggest = || -> Result<Vec<Value>> {
        let free = slot_array(body, "free_slots")?;
        take_suggestions(free, config.suggestion_limit)
    };
    let suggested_slots = suggest().map_err(|e| rejected("suggest slots", e))?;
    Ok(SuggestedSlotsResponse { suggested_slots })
}

/// Work window on the business day after `requested_datetime`.
pub fn advance_to_next_business_day(
    body: &Value,
    config: &SlotConfig,
) -> Result<BusinessWindowResponse> {
    let advance = || -> Result<WorkWindow> {
        let reference = match body.get("requested_datetime") {
            Some(Value::String(s)) if !s.trim().is_empty() => s,
            _ => {
                return Err(SlotError::Validation(
                    "'requested_datetime' is required.".to_string(),
                ))
            }
        };
        next_business_day(
            reference,
            config.business_day_start_hour,
            config.business_day_end_hour,
        )
    };
    let window = advance().map_err(|e| rejected("next business day", e))?;
    Ok(BusinessWindowResponse::from(window))
}

/// Describe `suggested_slots` as a French sentence.
pub fn format_answer(body: &Value, config: &SlotConfig) -> Result<String> {
    let answer = || -> Result<String> {
        let slots = parse_slots(&slot_list(body, "suggested_slots")?)?;
        format_answer_with(&slots, config.display_offset()?, &FRENCH)
    };
    answer().map_err(|e| rejected("answer", e))
}

/// Free slots, suggestions and sentence in one pass over a free-slot request.
///
/// Returns [`NO_FREE_SLOTS`] instead of a sentence when the day is fully booked.
pub fn plan(body: &Value, config: &SlotConfig) -> Result<String> {
    let run = || -> Result<String> {
        let free = free_slots_for(body, config)?;
        if free.is_empty() {
            return Ok(NO_FREE_SLOTS.to_string());
        }
        let suggested = take_suggestions(&free, config.suggestion_limit)?;
        format_answer_with(&suggested, config.display_offset()?, &FRENCH)
    };
    run().map_err(|e| rejected("plan", e))
}

fn free_slots_for(body: &Value, config: &SlotConfig) -> Result<Vec<TimeInterval>> {
    let raw = slot_list(body, "value")?;
    let start_hour = hour_field(body, "startHour", config.default_start_hour)?;
    let end_hour = hour_field(body, "endHour", config.default_end_hour)?;

    // The day comes from the first entry as sent, before degenerate markers are dropped.
    let day = parse_timestamp(&raw[0].start)?.date_naive();
    let window = WorkWindow::for_day(day, start_hour, end_hour)?;
    tracing::debug!(%day, start_hour, end_hour, "resolved work window");

    let occupied = normalize(&raw)?;
    Ok(find_free_slots(&window, &occupied))
}

/// Borrow the non-empty array at `body[name]`.
fn slot_array<'a>(body: &'a Value, name: &str) -> Result<&'a [Value]> {
    match body.get(name) {
        Some(Value::Array(items)) if !items.is_empty() => Ok(items.as_slice()),
        _ => Err(SlotError::Validation(format!(
            "'{}' is required and should contain an array of slots.",
            name
        ))),
    }
}

/// Read a non-empty array of `{start, end}` objects from `body[name]`.
fn slot_list(body: &Value, name: &str) -> Result<Vec<RawInterval>> {
    slot_array(body, name)?
        .iter()
        .enumerate()
        .map(|(index, item)| {
            RawInterval::deserialize(item).map_err(|e| {
                SlotError::Validation(format!("slot {} of '{}' is malformed: {}", index, name, e))
            })
        })
        .collect()
}

fn parse_slots(raw: &[RawInterval]) -> Result<Vec<TimeInterval>> {
    raw.iter().map(RawInterval::parse).collect()
}

/// Read an hour-of-day given as an integer, an integral float (`9.0`) or a
/// numeric string.
fn hour_field(body: &Value, name: &str, fallback: Option<u32>) -> Result<u32> {
    let out_of_range = || {
        SlotError::Validation(format!(
            "'{}' must be a whole hour between 0 and {}.",
            name, MAX_HOUR
        ))
    };

    let hour = match body.get(name) {
        None | Some(Value::Null) => {
            return fallback.ok_or_else(|| {
                SlotError::Validation("'startHour' and 'endHour' must be numbers.".to_string())
            })
        }
        Some(Value::Number(n)) => match n.as_u64() {
            Some(h) => h,
            None => n
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0)
                .map(|f| f as u64)
                .ok_or_else(out_of_range)?,
        },
        Some(Value::String(s)) => {
            let parsed: i64 = s.trim().parse().map_err(|_| {
                SlotError::Parse(format!("'{}' is not an integer: '{}'.", name, s))
            })?;
            u64::try_from(parsed).map_err(|_| out_of_range())?
        }
        Some(_) => {
            return Err(SlotError::Validation(
                "'startHour' and 'endHour' must be numbers.".to_string(),
            ))
        }
    };

    u32::try_from(hour)
        .ok()
        .filter(|h| *h <= MAX_HOUR)
        .ok_or_else(out_of_range)
}

fn rejected(operation: &str, err: SlotError) -> SlotError {
    tracing::warn!(operation, kind = err.kind(), error = %err, "request rejected");
    err
}
