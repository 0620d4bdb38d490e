//! Pick the leading free slots to offer as suggestions.

use crate::error::{Result, SlotError};

/// Return the first `min(limit, slots.len())` slots, in order.
///
/// The slots are not inspected, so lists produced outside this crate pass
/// through untouched.
///
/// # Errors
/// Returns `SlotError::Validation` if `slots` is empty.
pub fn suggest_slots<T: Clone>(slots: &[T], limit: usize) -> Result<Vec<T>> {
    if slots.is_empty() {
        return Err(SlotError::Validation(
            "'free_slots' is required and should contain an array of slots.".to_string(),
        ));
    }

    let suggested: Vec<T> = slots.iter().take(limit).cloned().collect();
    tracing::debug!(offered = slots.len(), suggested = suggested.len(), "suggested slots");
    Ok(suggested)
}
