//! Profanity filter applied to message content before display

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

const FILTERED_WORDS: &[&str] = &["fuck", "shit", "crap"];

/// How strongly message content is censored for display
///
/// Serialized by name; the numeric levels 0-2 are also accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "StoredLevel")]
pub enum FilterLevel {
    /// Show content as posted
    #[default]
    Off,
    /// Mask the third letter, keeping the original case: `Crap` -> `Cr*p`
    Mask,
    /// Replace the whole word: `crap` -> `****`
    Hide,
}

impl FilterLevel {
    pub fn from_level(level: u8) -> Result<Self, DomainError> {
        match level {
            0 => Ok(Self::Off),
            1 => Ok(Self::Mask),
            2 => Ok(Self::Hide),
            other => Err(DomainError::ValidationError(format!(
                "filter level must be 0-2, got {other}"
            ))),
        }
    }

    /// Apply the filter to `content`, matching words case-insensitively
    pub fn apply(self, content: &str) -> String {
        if self == Self::Off {
            return content.to_string();
        }

        let mut out = content.to_string();
        for word in FILTERED_WORDS {
            out = replace_ignore_case(&out, word, |found| match self {
                Self::Mask => {
                    let mut masked: Vec<char> = found.chars().collect();
                    masked[2] = '*';
                    masked.into_iter().collect()
                }
                _ => "****".to_string(),
            });
        }
        out
    }
}

impl FromStr for FilterLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(level) = s.parse::<u8>() {
            return Self::from_level(level);
        }
        match s.to_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "mask" => Ok(Self::Mask),
            "hide" => Ok(Self::Hide),
            _ => Err(DomainError::ValidationError(format!(
                "unknown filter level: {s}"
            ))),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredLevel {
    Level(u8),
    Name(String),
}

impl TryFrom<StoredLevel> for FilterLevel {
    type Error = DomainError;

    fn try_from(stored: StoredLevel) -> Result<Self, Self::Error> {
        match stored {
            StoredLevel::Level(level) => Self::from_level(level),
            StoredLevel::Name(name) => name.parse(),
        }
    }
}

// Filtered words are ASCII, so byte offsets found in the lowercased copy line up.
fn replace_ignore_case(haystack: &str, needle: &str, with: impl Fn(&str) -> String) -> String {
    let lower = haystack.to_ascii_lowercase();
    let mut out = String::with_capacity(haystack.len());
    let mut last = 0;
    for (start, _) in lower.match_indices(needle) {
        out.push_str(&haystack[last..start]);
        out.push_str(&with(&haystack[start..start + needle.len()]));
        last = start + needle.len();
    }
    out.push_str(&haystack[last..]);
    out
}
