//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Latitude out of range: {0}")]
    InvalidLatitude(f64),

    #[error("Longitude out of range: {0}")]
    InvalidLongitude(f64),

    #[error("Message content is empty")]
    EmptyContent,

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    #[error("Invalid sort order: {0}")]
    InvalidSortOrder(String),

    // =========================================================================
    // State Errors
    // =========================================================================
    #[error("Current location is unavailable")]
    LocationUnavailable,

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Message not visible: {0}")]
    MessageNotVisible(String),
}

impl DomainError {
    /// Get an error code string for logs and callers
    pub fn code(&self) -> &'static str {
        match self {
            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidLatitude(_) | Self::InvalidLongitude(_) => "INVALID_COORDINATE",
            Self::EmptyContent => "EMPTY_CONTENT",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::InvalidSortOrder(_) => "INVALID_SORT_ORDER",

            // State
            Self::LocationUnavailable => "LOCATION_UNAVAILABLE",
            Self::NotLoggedIn => "NOT_LOGGED_IN",
            Self::MessageNotVisible(_) => "MESSAGE_NOT_VISIBLE",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidLatitude(_)
                | Self::InvalidLongitude(_)
                | Self::EmptyContent
                | Self::ContentTooLong { .. }
                | Self::InvalidSortOrder(_)
        )
    }
}
