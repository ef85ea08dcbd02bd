use chrono::{Duration, NaiveDate};

/// Time attributed to a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayBucket {
    pub day: NaiveDate,
    pub total: Duration,
}
