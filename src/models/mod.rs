pub mod column;
pub mod day_bucket;
pub mod entry;
pub mod filter;
