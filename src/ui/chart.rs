//! Horizontal bar chart of per-day totals.

use crate::models::day_bucket::DayBucket;
use crate::utils::formatting::format_duration;

/// Seconds represented by one tick: `ceil(max / width)`.
pub fn block_size(buckets: &[DayBucket], width: usize) -> i64 {
    let max = buckets
        .iter()
        .map(|b| b.total.num_seconds())
        .max()
        .unwrap_or(0)
        .max(0);
    let width = i64::try_from(width.max(1)).unwrap_or(i64::MAX);
    max / width + i64::from(max % width != 0)
}

/// Number of ticks for `seconds`, rounding half to even. Zero when `block` is 0.
pub fn tick_count(seconds: i64, block: i64) -> usize {
    if block <= 0 || seconds <= 0 {
        return 0;
    }
    (seconds as f64 / block as f64).round_ties_even() as usize
}

/// One line per bucket: `[day] <ticks> <H:MM>`.
pub fn plot_lines(buckets: &[DayBucket], width: usize, tick: &str) -> Vec<String> {
    let block = block_size(buckets, width);
    buckets
        .iter()
        .map(|b| {
            format!(
                "[{}] {} {}",
                b.day,
                tick.repeat(tick_count(b.total.num_seconds(), block)),
                format_duration(b.total)
            )
        })
        .collect()
}
