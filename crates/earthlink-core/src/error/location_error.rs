//! Errors raised by the platform location service

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("location services disabled")]
    Disabled,

    #[error("location unavailable: {0}")]
    Unavailable(String),
}

impl LocationError {
    /// The user has to act before a fix can be obtained
    pub fn needs_user_action(&self) -> bool {
        matches!(self, Self::PermissionDenied | Self::Disabled)
    }
}
