use crate::core::calculator::day_buckets::total_by_day;
use crate::db::pool::DbPool;
use crate::db::queries::get_entries;
use crate::errors::AppResult;
use crate::models::day_bucket::DayBucket;
use crate::models::filter::EntryFilter;
use chrono::{NaiveDate, NaiveDateTime};

pub struct StatsLogic;

impl StatsLogic {
    /// Load entries within the date bounds and total them per calendar day.
    pub fn daily_totals(
        pool: &mut DbPool,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        now: NaiveDateTime,
    ) -> AppResult<Vec<DayBucket>> {
        let filter = EntryFilter::default().between(start, end);
        let entries = get_entries(pool, &filter)?;
        Ok(total_by_day(&entries, now))
    }
}
