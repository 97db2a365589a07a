//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Work log file
    // ---------------------------
    #[error("Work log error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unexpected work log header: expected \"{expected}\", found \"{found}\"")]
    InvalidHeader { expected: String, found: String },

    #[error("Corrupted record at line {line}: {reason}")]
    CorruptedRecord { line: u64, reason: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM, 00:00-23:59)")]
    InvalidTime(String),

    #[error("Invalid duration: {0} (expected \"<H>h <M>m\")")]
    InvalidDuration(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Clock-out {end} is earlier than clock-in {start} and overnight shifts are rejected")]
    OvernightShift { start: String, end: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to serialize configuration: {0}")]
    ConfigFormat(#[from] serde_yaml::Error),
}

impl AppError {
    /// True for errors caused by what the user typed, as opposed to stored
    /// data or the filesystem.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidDate(_)
                | AppError::InvalidTime(_)
                | AppError::InvalidDuration(_)
                | AppError::OvernightShift { .. }
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
