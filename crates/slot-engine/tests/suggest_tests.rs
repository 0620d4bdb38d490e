//! Tests for the slot suggester.

use slot_engine::error::SlotError;
use slot_engine::interval::RawInterval;
use slot_engine::suggest::suggest_slots;

fn slots(n: usize) -> Vec<RawInterval> {
    (0..n)
        .map(|h| {
            RawInterval::new(
                format!("2025-02-21T{:02}:00:00.000Z", 8 + h),
                format!("2025-02-21T{:02}:30:00.000Z", 8 + h),
            )
        })
        .collect()
}

#[test]
fn keeps_first_three_in_order() {
    let free = slots(5);

    let suggested = suggest_slots(&free, 3).unwrap();

    assert_eq!(suggested, free[..3].to_vec());
}

#[test]
fn shorter_list_is_returned_whole() {
    let free = slots(2);

    let suggested = suggest_slots(&free, 3).unwrap();

    assert_eq!(suggested, free);
}

#[test]
fn limit_is_configurable() {
    let free = slots(5);
    assert_eq!(suggest_slots(&free, 1).unwrap().len(), 1);
    assert_eq!(suggest_slots(&free, 10).unwrap().len(), 5);
}

#[test]
fn empty_list_is_rejected() {
    let err = suggest_slots::<RawInterval>(&[], 3).unwrap_err();
    assert!(matches!(err, SlotError::Validation(_)));
    assert!(err.to_string().contains("free_slots"));
}
