//! Listing errors.

use congregate_shared::AppError;
use thiserror::Error;

/// Rejected list query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    /// Sort column is not one of the allowed keys.
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    /// Tab name is not recognized.
    #[error("Unknown tab: {0}")]
    UnknownTab(String),
}

impl From<ListingError> for AppError {
    fn from(err: ListingError) -> Self {
        Self::Validation(err.to_string())
    }
}
