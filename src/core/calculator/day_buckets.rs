//! Per-day aggregation of entry durations.
//!
//! Entries may cross midnight (or stay open for days), so each entry is
//! walked one day boundary at a time and every slice is credited to the
//! calendar day it falls on.

use crate::models::day_bucket::DayBucket;
use crate::models::entry::Entry;
use crate::utils::date::midnight;
use chrono::{Days, Duration, NaiveDate, NaiveDateTime};
use std::collections::HashMap;

/// Split every entry at local midnights and sum the slices per day.
///
/// Open entries run until `now`. Days appear in the order they are first
/// reached while scanning `entries`; a zero-length entry still yields its
/// (zero) bucket.
pub fn total_by_day(entries: &[Entry], now: NaiveDateTime) -> Vec<DayBucket> {
    let mut buckets: Vec<DayBucket> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();

    for entry in entries {
        let end = entry.effective_end(now);
        let mut cursor = entry.start;
        let mut day = entry.start.date();
        let mut next_midnight = next_day_start(day);

        while end > next_midnight && next_midnight > cursor {
            add(&mut buckets, &mut index, day, next_midnight - cursor);
            cursor = next_midnight;
            day = next_midnight.date();
            next_midnight = next_day_start(day);
        }

        add(&mut buckets, &mut index, day, end - cursor);
    }

    buckets
}

fn next_day_start(day: NaiveDate) -> NaiveDateTime {
    midnight(day.checked_add_days(Days::new(1)).unwrap_or(NaiveDate::MAX))
}

fn add(
    buckets: &mut Vec<DayBucket>,
    index: &mut HashMap<NaiveDate, usize>,
    day: NaiveDate,
    delta: Duration,
) {
    match index.get(&day) {
        Some(&i) => buckets[i].total += delta,
        None => {
            index.insert(day, buckets.len());
            buckets.push(DayBucket { day, total: delta });
        }
    }
}

/// Sum of all bucket totals.
pub fn grand_total(buckets: &[DayBucket]) -> Duration {
    buckets.iter().fold(Duration::zero(), |acc, b| acc + b.total)
}
