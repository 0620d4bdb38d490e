//! Tunables shared by every slot-engine operation.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::answer::DISPLAY_OFFSET_MINUTES;
use crate::error::{Result, SlotError};

/// How many free slots are offered as suggestions by default.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 3;

/// Largest hour accepted as a window bound; 24 means midnight at the end of the day.
pub const MAX_HOUR: u32 = 24;

/// Largest display offset, either direction: one day.
pub const MAX_DISPLAY_OFFSET_MINUTES: i64 = 24 * 60;

/// Engine configuration. Every field has a default, so a partial JSON document
/// (or none at all) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotConfig {
    /// Maximum number of slots returned by the suggester.
    pub suggestion_limit: usize,
    /// Opening hour (UTC) of the window produced for the next business day.
    pub business_day_start_hour: u32,
    /// Closing hour (UTC) of the window produced for the next business day.
    pub business_day_end_hour: u32,
    /// Fixed shift applied to slots before they are rendered as a sentence.
    pub display_offset_minutes: i64,
    /// Work-window start used when a free-slot request omits `startHour`.
    pub default_start_hour: Option<u32>,
    /// Work-window end used when a free-slot request omits `endHour`.
    pub default_end_hour: Option<u32>,
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            business_day_start_hour: 8,
            business_day_end_hour: 16,
            display_offset_minutes: DISPLAY_OFFSET_MINUTES,
            default_start_hour: None,
            default_end_hour: None,
        }
    }
}

impl SlotConfig {
    /// Parse and validate a JSON configuration document.
    ///
    /// # Errors
    /// `SlotError::Parse` if the document is not valid JSON for this shape,
    /// otherwise whatever [`SlotConfig::validate`] reports.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SlotConfig = serde_json::from_str(json)
            .map_err(|e| SlotError::Parse(format!("configuration is not valid: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field is usable.
    pub fn validate(&self) -> Result<()> {
        if self.suggestion_limit == 0 {
            return Err(SlotError::Validation(
                "'suggestion_limit' must be at least 1.".to_string(),
            ));
        }

        let hours = [
            ("business_day_start_hour", Some(self.business_day_start_hour)),
            ("business_day_end_hour", Some(self.business_day_end_hour)),
            ("default_start_hour", self.default_start_hour),
            ("default_end_hour", self.default_end_hour),
        ];
        for (name, hour) in hours {
            if let Some(h) = hour {
                if h > MAX_HOUR {
                    return Err(SlotError::Validation(format!(
                        "'{}' must be between 0 and {}, got {}.",
                        name, MAX_HOUR, h
                    )));
                }
            }
        }

        if self.display_offset_minutes.unsigned_abs() > MAX_DISPLAY_OFFSET_MINUTES.unsigned_abs() {
            return Err(SlotError::Validation(format!(
                "'display_offset_minutes' must be between -{max} and {max}, got {}.",
                self.display_offset_minutes,
                max = MAX_DISPLAY_OFFSET_MINUTES
            )));
        }

        if self.business_day_start_hour >= self.business_day_end_hour {
            return Err(SlotError::Validation(format!(
                "business day window {}h-{}h is empty.",
                self.business_day_start_hour, self.business_day_end_hour
            )));
        }

        Ok(())
    }

    /// Display offset as a duration.
    ///
    /// # Errors
    /// Returns `SlotError::Validation` when the offset is outside
    /// `±MAX_DISPLAY_OFFSET_MINUTES`, which a config built without
    /// [`SlotConfig::validate`] can carry.
    pub fn display_offset(&self) -> Result<TimeDelta> {
        if self.display_offset_minutes.unsigned_abs() > MAX_DISPLAY_OFFSET_MINUTES.unsigned_abs() {
            return Err(SlotError::Validation(format!(
                "'display_offset_minutes' {} is out of range.",
                self.display_offset_minutes
            )));
        }
        TimeDelta::try_minutes(self.display_offset_minutes).ok_or_else(|| {
            SlotError::Validation(format!(
                "'display_offset_minutes' {} is out of range.",
                self.display_offset_minutes
            ))
        })
    }
}
