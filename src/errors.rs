//! Unified application error type.
//! The view-model core never fails; everything around it (data file,
//! operation log, config, exports) returns AppError so the binary can
//! report failures in one place.

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
    // Operation log database
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Data file
    // ---------------------------
    #[error("Data file not found: {0}")]
    DataFileNotFound(String),

    #[error("Data file is read-only for this operation: {0}")]
    ReadOnlySource(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing / validation
    // ---------------------------
    #[error("Invalid date format: {0} (use YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("{0} must be numeric")]
    InvalidNumber(String),

    #[error("Wait and solution times must be positive")]
    NegativeDuration,

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("No indices given for deletion")]
    NoIndices,

    #[error("Invalid indices: {0:?}")]
    InvalidIndices(Vec<usize>),

    // ---------------------------
    // Aggregates / reports
    // ---------------------------
    #[error("No data available: {0}")]
    NoData(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
