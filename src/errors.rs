//! Unified application error type.
//! Store, core, cli and utils all return AppError so the binary has a
//! single place where failures are reported.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Invalid timestamp in database: {0}")]
    InvalidTimestamp(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD or YYYY.MM.DD)")]
    InvalidDate(String),

    #[error("Invalid width: {0} (must be positive)")]
    InvalidWidth(i64),

    // ---------------------------
    // Query errors
    // ---------------------------
    #[error("Invalid regular expression: {0}")]
    InvalidRegex(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

impl AppError {
    /// True for errors caused by bad user input rather than by the store.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::InvalidDate(_) | AppError::InvalidWidth(_) | AppError::InvalidRegex(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
