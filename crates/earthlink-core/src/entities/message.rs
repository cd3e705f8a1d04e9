//! Message entity - a location-tagged post

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{Coordinate, MessageId, UserId};

/// Maximum length of a posted message, in characters
pub const MAX_CONTENT_CHARS: usize = 280;

/// Message entity as cached by the client
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub author_id: UserId,
    pub content: String,
    pub location: Coordinate,
    pub created_at: NaiveDateTime,
    pub likes: u32,
    pub dislikes: u32,
    /// Geohash cell the server filed the message under
    pub geohash: Option<String>,
}

impl Message {
    /// Creation time in the server's display format, e.g. `11/14/2023 10:29 AM`
    pub fn display_timestamp(&self) -> String {
        self.created_at.format("%m/%d/%Y %I:%M %p").to_string()
    }
}

/// Messages grouped under one map marker
#[derive(Debug, Clone, PartialEq)]
pub struct MessageCluster {
    messages: Vec<Message>,
}

impl MessageCluster {
    /// Build a cluster; `None` for an empty group
    pub fn new(messages: Vec<Message>) -> Option<Self> {
        if messages.is_empty() {
            None
        } else {
            Some(Self { messages })
        }
    }

    /// Marker position, taken from the first message
    pub fn position(&self) -> Coordinate {
        self.messages[0].location
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false; empty clusters are never constructed
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// A message about to be posted
#[derive(Debug, Clone, PartialEq)]
pub struct NewMessage {
    pub content: String,
    pub location: Coordinate,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl NewMessage {
    /// Create a new message stamped with the current time
    pub fn new(
        content: impl Into<String>,
        location: Coordinate,
        author_id: UserId,
    ) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::EmptyContent);
        }
        if content.chars().count() > MAX_CONTENT_CHARS {
            return Err(DomainError::ContentTooLong {
                max: MAX_CONTENT_CHARS,
            });
        }
        Ok(Self {
            content,
            location,
            author_id,
            created_at: Utc::now(),
        })
    }
}

/// Server confirmation for a posted message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedMessage {
    pub id: MessageId,
    pub status: String,
}
