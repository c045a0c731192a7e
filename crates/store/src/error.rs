//! Store error types.

use thiserror::Error;

/// Errors that can occur during store operations.
///
/// Every variant is an anticipated caller-input failure; none is
/// retried and none leaves the store inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Radius was zero or negative.
    #[error("Radius must be a positive number greater than zero")]
    InvalidRadius,

    /// Radius was not a usable number (NaN or infinite).
    #[error("Radius must be a valid number")]
    RadiusNotNumeric,

    /// Latitude or longitude was not a usable number.
    #[error("Invalid latitude or longitude")]
    InvalidCoordinates,

    /// Reminder text was empty or whitespace-only.
    #[error("Reminder text cannot be empty")]
    EmptyText,

    /// No reminder exists under the given id.
    #[error("Reminder not found")]
    NotFound,
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
