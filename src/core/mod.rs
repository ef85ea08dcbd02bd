pub mod calculator;
pub mod clock;
pub mod history;
pub mod stats;
