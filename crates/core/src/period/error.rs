//! Period error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while building or parsing periods.
///
/// The resolver recovers from all of these; they surface only from the
/// lower-level constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    /// Start date after end date.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },

    /// Date string is not `YYYY-MM-DD`.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Preset name not recognized.
    #[error("Unknown period preset: {0}")]
    UnknownPreset(String),

    /// Year outside the supported calendar.
    #[error("Year out of range: {0}")]
    YearOutOfRange(i32),
}
