pub mod clock_in;
pub mod clock_out;
pub mod config;
pub mod history;
pub mod log;
pub mod stats;
pub mod status;
