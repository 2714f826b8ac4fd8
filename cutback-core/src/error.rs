//! Error types for the recommendation pipeline.

use chrono::NaiveDate;
use thiserror::Error;

/// Result alias used throughout cutback-core.
pub type CoreResult<T> = Result<T, CoreError>;

/// Conditions the core reports to its caller.
///
/// Malformed input never reaches this layer; the ingest crate rejects it
/// before a `Transaction` is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Earliest and latest transactions fall in the same calendar month, so
    /// a per-month average is undefined.
    #[error("undefined monthly average: transactions span {months} month(s) ({earliest} to {latest})")]
    DegenerateSpan {
        earliest: NaiveDate,
        latest: NaiveDate,
        months: i32,
    },

    /// A category label that was never aggregated.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
