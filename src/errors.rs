//! Unified crate error type.
//! All modules (config, core, utils) return WorkHoursError to keep the
//! error handling consistent and easy to manage.

use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkHoursError {
    // ---------------------------
    // Span errors
    // ---------------------------
    #[error("Invalid span: start {start} is after end {end}")]
    InvalidSpan {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    // ---------------------------
    // Window errors
    // ---------------------------
    #[error("Invalid working window: {0}")]
    InvalidWindow(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type WorkHoursResult<T> = Result<T, WorkHoursError>;
