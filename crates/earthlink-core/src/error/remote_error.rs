//! Errors raised by the remote API port
//!
//! Two families: transport failures (the request never produced a response)
//! and application failures (a response arrived but was not usable).

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum RemoteError {
    // Transport
    #[error("network error: {0}")]
    Transport(String),

    #[error("timeout")]
    Timeout,

    // Application
    #[error("http {status}: {body}")]
    Http { status: u16, body: String },

    #[error("unauthorized")]
    Unauthorized,

    #[error("invalid response body: {0}")]
    Decode(String),
}

impl RemoteError {
    /// The request did not complete (connect, timeout, broken body stream)
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout)
    }

    /// The server answered with something other than a usable 2xx
    pub fn is_application(&self) -> bool {
        !self.is_transport()
    }

    /// HTTP status, when the server responded
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Unauthorized => Some(401),
            _ => None,
        }
    }
}
