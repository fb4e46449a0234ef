//! Error types for task operations.
//!
//! Validation errors (`EmptyTitle`, `InvalidDueDate`, `UnknownCategory`) are
//! raised at the point of entry and never leave a task half-modified.
//! Persistence and export failures wrap the underlying library errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("Task title is required")]
    EmptyTitle,

    #[error("Invalid date format '{0}', use YYYY-MM-DD")]
    InvalidDueDate(String),

    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    #[error("Task with ID {0} not found")]
    NotFound(u64),

    #[error("Task record is missing required field '{0}'")]
    MissingField(&'static str),

    #[error("Background timer failed: {0}")]
    TimerFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Excel error: {0}")]
    Excel(#[from] rust_xlsxwriter::XlsxError),
}

pub type Result<T> = std::result::Result<T, TaskError>;
