use chrono::Duration;
use clocklog::core::calculator::day_buckets::{grand_total, total_by_day};
use clocklog::models::entry::Entry;

mod common;
use common::{day, dt};

fn closed(id: i64, start: &str, end: &str) -> Entry {
    Entry {
        id,
        start: dt(start),
        end: Some(dt(end)),
        description: String::new(),
    }
}

fn open(id: i64, start: &str) -> Entry {
    Entry {
        id,
        start: dt(start),
        end: None,
        description: String::new(),
    }
}

#[test]
fn test_entry_within_one_day_gives_single_bucket() {
    let entries = vec![closed(1, "2024-03-05 09:15:00", "2024-03-05 12:45:30")];
    let buckets = total_by_day(&entries, dt("2024-03-06 00:00:00"));

    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].day, day("2024-03-05"));
    assert_eq!(
        buckets[0].total,
        Duration::hours(3) + Duration::minutes(30) + Duration::seconds(30)
    );
}

#[test]
fn test_overnight_entry_is_split_at_midnight() {
    let entries = vec![closed(1, "2024-01-01 22:00:00", "2024-01-02 02:00:00")];
    let buckets = total_by_day(&entries, dt("2024-02-01 00:00:00"));

    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].day, day("2024-01-01"));
    assert_eq!(buckets[0].total, Duration::hours(2));
    assert_eq!(buckets[1].day, day("2024-01-02"));
    assert_eq!(buckets[1].total, Duration::hours(2));
}

#[test]
fn test_multi_day_entry_gives_one_bucket_per_day() {
    // 3 full days crossed plus fractions at both ends
    let entry = closed(1, "2024-02-27 18:00:00", "2024-03-02 06:30:00");
    let expected_total = entry.end.unwrap() - entry.start;
    let buckets = total_by_day(std::slice::from_ref(&entry), dt("2024-04-01 00:00:00"));

    let days: Vec<_> = buckets.iter().map(|b| b.day).collect();
    assert_eq!(
        days,
        vec![
            day("2024-02-27"),
            day("2024-02-28"),
            day("2024-02-29"),
            day("2024-03-01"),
            day("2024-03-02"),
        ]
    );
    assert_eq!(buckets[0].total, Duration::hours(6));
    assert_eq!(buckets[1].total, Duration::hours(24));
    assert_eq!(buckets[2].total, Duration::hours(24));
    assert_eq!(buckets[3].total, Duration::hours(24));
    assert_eq!(buckets[4].total, Duration::hours(6) + Duration::minutes(30));
    assert_eq!(grand_total(&buckets), expected_total);
}

#[test]
fn test_entry_ending_exactly_at_midnight_stays_on_start_day() {
    let entries = vec![closed(1, "2024-05-10 20:00:00", "2024-05-11 00:00:00")];
    let buckets = total_by_day(&entries, dt("2024-06-01 00:00:00"));

    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].day, day("2024-05-10"));
    assert_eq!(buckets[0].total, Duration::hours(4));
}

#[test]
fn test_open_entry_runs_until_now() {
    let entries = vec![open(1, "2024-07-01 23:30:00")];
    let buckets = total_by_day(&entries, dt("2024-07-02 01:00:00"));

    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].total, Duration::minutes(30));
    assert_eq!(buckets[1].day, day("2024-07-02"));
    assert_eq!(buckets[1].total, Duration::hours(1));
}

#[test]
fn test_zero_duration_entry_still_creates_bucket() {
    let entries = vec![closed(1, "2024-08-08 10:00:00", "2024-08-08 10:00:00")];
    let buckets = total_by_day(&entries, dt("2024-08-09 00:00:00"));

    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].day, day("2024-08-08"));
    assert_eq!(buckets[0].total, Duration::zero());
}

#[test]
fn test_days_keep_first_seen_order() {
    let entries = vec![
        closed(1, "2024-09-10 08:00:00", "2024-09-10 09:00:00"),
        closed(2, "2024-09-03 08:00:00", "2024-09-03 10:00:00"),
        closed(3, "2024-09-10 14:00:00", "2024-09-10 14:30:00"),
    ];
    let buckets = total_by_day(&entries, dt("2024-10-01 00:00:00"));

    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].day, day("2024-09-10"));
    assert_eq!(buckets[0].total, Duration::minutes(90));
    assert_eq!(buckets[1].day, day("2024-09-03"));
    assert_eq!(buckets[1].total, Duration::hours(2));
}

#[test]
fn test_bucket_totals_equal_sum_of_entry_durations() {
    let now = dt("2024-11-20 12:00:00");
    let entries = vec![
        closed(1, "2024-11-15 21:17:03", "2024-11-16 03:41:59"),
        closed(2, "2024-11-16 09:00:00", "2024-11-16 17:22:10"),
        closed(3, "2024-11-16 23:59:59", "2024-11-18 00:00:01"),
        open(4, "2024-11-19 22:05:00"),
    ];
    let buckets = total_by_day(&entries, now);

    let expected = entries
        .iter()
        .fold(Duration::zero(), |acc, e| acc + e.duration(now));
    assert_eq!(grand_total(&buckets), expected);
}

#[test]
fn test_no_entries_no_buckets() {
    assert!(total_by_day(&[], dt("2024-01-01 00:00:00")).is_empty());
}
