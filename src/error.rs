//! Error types for the forecasting pipeline.

use thiserror::Error;

/// Fatal, file-scoped failures. One of these aborts the current file and
/// leaves no output for it; the batch driver logs it and moves on.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The last historical column header could not be parsed as `YYYY-MM`.
    /// Prediction labels are shared by every row of a table, so this cannot
    /// be recovered per row.
    #[error("invalid date format in column: {0}")]
    InvalidDateFormat(String),

    /// The header row carries no columns past the entity metadata.
    #[error("no historical month columns after the metadata columns")]
    NoDateColumns,
}

/// Row-scoped model failures, recovered by the file processor: the row's
/// forecast cells are left empty and processing continues.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Too few observations to fit the model.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Model has not been fitted yet.
    #[error("model must be fitted before prediction")]
    FitRequired,

    /// Numerical failure during fitting or prediction.
    #[error("computation error: {0}")]
    Computation(String),
}
