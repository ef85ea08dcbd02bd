pub mod day_buckets;
