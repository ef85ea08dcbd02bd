//! Entry listings and per-day tables built on [`Table`].

use crate::models::column::Column;
use crate::models::day_bucket::DayBucket;
use crate::models::entry::Entry;
use crate::ui::table::{Table, format_row};
use crate::utils::formatting::{format_duration, format_range};
use chrono::NaiveDateTime;

pub fn cell(entry: &Entry, column: Column, now: NaiveDateTime) -> String {
    match column {
        Column::Range => format_range(&entry.start, entry.end.as_ref()),
        Column::Duration => format_duration(entry.duration(now)),
        Column::Description => entry.description.clone(),
    }
}

pub fn entry_row(entry: &Entry, columns: &[Column], now: NaiveDateTime) -> Vec<String> {
    columns.iter().map(|&c| cell(entry, c, now)).collect()
}

pub fn entries_table(entries: &[Entry], columns: &[Column], now: NaiveDateTime) -> Table {
    let mut table = Table::new(columns.len());
    for entry in entries {
        table.add_row(entry_row(entry, columns, now));
    }
    table
}

/// A single entry at its natural width (used by `status`).
pub fn status_line(entry: &Entry, columns: &[Column], now: NaiveDateTime) -> String {
    format_row(&entry_row(entry, columns, now), None)
}

pub fn daily_table(buckets: &[DayBucket]) -> Table {
    let mut table = Table::new(2);
    for b in buckets {
        table.add_row(vec![format!("[{}]", b.day), format_duration(b.total)]);
    }
    table
}
