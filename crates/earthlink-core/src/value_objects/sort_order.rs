//! Feed ordering selector

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Ordering requested from the message endpoints
///
/// Sent on the wire as an integer path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Newest first
    #[default]
    Latest,
    /// Most liked first
    Likes,
}

impl SortOrder {
    #[inline]
    pub const fn as_wire(self) -> u8 {
        match self {
            Self::Latest => 0,
            Self::Likes => 1,
        }
    }

    pub fn from_wire(value: i64) -> Result<Self, DomainError> {
        match value {
            0 => Ok(Self::Latest),
            1 => Ok(Self::Likes),
            other => Err(DomainError::InvalidSortOrder(other.to_string())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => f.write_str("latest"),
            Self::Likes => f.write_str("likes"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = DomainError;

    /// Accepts the name or the wire value
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(value) = s.parse::<i64>() {
            return Self::from_wire(value);
        }
        match s.to_lowercase().as_str() {
            "latest" => Ok(Self::Latest),
            "likes" => Ok(Self::Likes),
            _ => Err(DomainError::InvalidSortOrder(s.to_string())),
        }
    }
}
