//! Message wire models

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Message as returned by the listing endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct MessageModel {
    pub message_id: String,
    pub user_uid: String,
    pub message_content: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: NaiveDateTime,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub dislikes: i64,
    #[serde(default)]
    pub geohash: Option<String>,
}

/// Body of `POST /message`
#[derive(Debug, Clone, Serialize)]
pub struct NewMessageModel<'a> {
    pub message_content: &'a str,
    pub latitude: f64,
    pub longitude: f64,
    /// Client clock, epoch milliseconds
    pub timestamp: i64,
    pub user_uid: &'a str,
    pub likes: i64,
    pub dislikes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostMessageResponse {
    #[serde(default)]
    pub message: String,
    pub message_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageCountResponse {
    pub number_messages: u64,
}

/// Server timestamps are naive ISO-8601 (`2023-11-14T10:29:29.298199`);
/// offset-qualified values are converted to UTC.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse::<NaiveDateTime>()
        .or_else(|_| DateTime::parse_from_rfc3339(&raw).map(|dt| dt.naive_utc()))
        .map_err(|_| serde::de::Error::custom(format!("invalid timestamp {raw:?}")))
}
