//! Application error types
//!
//! Unified error handling for the runner and the feed controller.

use earthlink_core::{DomainError, RemoteError};
use std::fmt;

use crate::config::ConfigError;
use crate::preferences::PreferencesError;
use crate::telemetry::TracingError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Remote API errors
    #[error(transparent)]
    Remote(#[from] RemoteError),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    // Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    // Local preference store errors
    #[error(transparent)]
    Preferences(#[from] PreferencesError),

    #[error(transparent)]
    Tracing(#[from] TracingError),

    // Internal errors
    #[error("Internal error")]
    Internal(#[source] anyhow::Error),
}

impl AppError {
    /// Get error code for logs
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Remote(e) if e.is_transport() => "TRANSPORT_ERROR",
            Self::Remote(RemoteError::Unauthorized) => "UNAUTHORIZED",
            Self::Remote(_) => "REMOTE_ERROR",
            Self::Domain(e) => e.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Preferences(_) => "PREFERENCES_ERROR",
            Self::Tracing(_) => "TRACING_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Network-level failure; the request may succeed if tried again later
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Remote(e) if e.is_transport())
    }

    /// Caused by caller input rather than the environment
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::Validation(_) => true,
            Self::Domain(e) => e.is_validation(),
            _ => false,
        }
    }

    /// Create a validation error
    #[must_use]
    pub fn validation(msg: impl fmt::Display) -> Self {
        Self::Validation(msg.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::validation(err)
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
