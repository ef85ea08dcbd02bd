use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A column of an entry listing (`log`, `status`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    /// `[start]` or `[start]--[end]`
    Range,
    /// Elapsed time as H:MM
    Duration,
    /// Free text given at clock-in
    Description,
}
