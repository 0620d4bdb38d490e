//! Error types for slot-engine operations.

use thiserror::Error;

/// Failures reported back to the caller of a slot-engine operation.
///
/// Both kinds are client-side failures: the request itself is wrong and
/// resubmitting it unchanged will fail the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    /// A required input is missing, empty, or has the wrong shape.
    #[error("Invalid input, {0}")]
    Validation(String),

    /// A timestamp or numeric field could not be interpreted.
    #[error("Invalid input, {0}")]
    Parse(String),
}

impl SlotError {
    /// Short machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            SlotError::Validation(_) => "validation",
            SlotError::Parse(_) => "parse",
        }
    }
}

pub type Result<T> = std::result::Result<T, SlotError>;
