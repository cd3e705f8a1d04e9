//! JSON-file backed user preferences
//!
//! Holds the display settings and the cached account details that survive
//! between runs. Reads tolerate a missing file; writes replace the whole file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use earthlink_core::{FilterLevel, UserId};
use serde::{Deserialize, Serialize};

/// UI theme choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,
    Light,
    Dark,
}

/// Persisted preferences
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub theme: Theme,
    pub filter_level: FilterLevel,
    pub user_id: Option<UserId>,
    pub bio: String,
}

/// Preference store errors
#[derive(Debug, thiserror::Error)]
pub enum PreferencesError {
    #[error("Failed to access preferences at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed preferences at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Preference file handle
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load preferences, falling back to defaults when the file does not exist
    pub async fn load(&self) -> Result<Preferences, PreferencesError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No preferences file, using defaults");
                return Ok(Preferences::default());
            }
            Err(source) => {
                return Err(PreferencesError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_slice(&bytes).map_err(|source| PreferencesError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Persist preferences, replacing the previous file
    pub async fn save(&self, prefs: &Preferences) -> Result<(), PreferencesError> {
        let body = serde_json::to_vec_pretty(prefs).map_err(|source| PreferencesError::Parse {
            path: self.path.clone(),
            source,
        })?;

        // Write beside the target and rename so readers never see a half-written file.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, body)
            .await
            .map_err(|source| self.io_error(source))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|source| self.io_error(source))?;

        tracing::debug!(path = %self.path.display(), "Preferences saved");
        Ok(())
    }

    /// Load, modify, and save in one step
    pub async fn update<F>(&self, f: F) -> Result<Preferences, PreferencesError>
    where
        F: FnOnce(&mut Preferences),
    {
        let mut prefs = self.load().await?;
        f(&mut prefs);
        self.save(&prefs).await?;
        Ok(prefs)
    }

    fn io_error(&self, source: std::io::Error) -> PreferencesError {
        PreferencesError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
