use chrono::{NaiveDate, TimeDelta};
use criterion::{criterion_group, criterion_main, Criterion};
use slot_engine::freebusy::{find_free_slots, WorkWindow};
use slot_engine::interval::{normalize, RawInterval};
use std::hint::black_box;

/// A day of 15-minute meetings every 20 minutes, sent in reverse order.
fn busy_day() -> Vec<RawInterval> {
    let midnight = NaiveDate::from_ymd_opt(2025, 2, 21)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc();
    (0..72)
        .rev()
        .map(|i| {
            let start = midnight + TimeDelta::minutes(i * 20);
            let end = start + TimeDelta::minutes(15);
            RawInterval::new(start.to_rfc3339(), end.to_rfc3339())
        })
        .collect()
}

fn bench_free_slots(c: &mut Criterion) {
    let raw = busy_day();
    let window = WorkWindow::for_day(NaiveDate::from_ymd_opt(2025, 2, 21).unwrap(), 0, 24).unwrap();
    let occupied = normalize(&raw).unwrap();

    c.bench_function("normalize_72_intervals", |b| {
        b.iter(|| normalize(black_box(&raw)).unwrap())
    });
    c.bench_function("find_free_slots_72_intervals", |b| {
        b.iter(|| find_free_slots(black_box(&window), black_box(&occupied)))
    });
}

criterion_group!(benches, bench_free_slots);
criterion_main!(benches);
