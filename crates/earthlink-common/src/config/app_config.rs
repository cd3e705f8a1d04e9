//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use earthlink_core::{Coordinate, SortOrder};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ApiConfig,
    pub feed: FeedConfig,
    pub location: LocationConfig,
    pub account: Option<AccountConfig>,
    pub preferences_path: PathBuf,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Remote API settings
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    /// `None` leaves the HTTP client's transport defaults in place
    pub request_timeout: Option<Duration>,
}

/// Message feed polling settings
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub poll_interval: Duration,
    pub max_messages: u32,
    pub sort: SortOrder,
}

/// Location tracking settings
#[derive(Debug, Clone)]
pub struct LocationConfig {
    pub refresh_interval: Duration,
    /// Fixed position for headless runs; replaces platform tracking
    pub fixed: Option<Coordinate>,
}

/// Login used by the headless runner
#[derive(Debug, Clone)]
pub struct AccountConfig {
    pub email: String,
    pub password: String,
}

// Default value functions
fn default_app_name() -> String {
    "earthlink".to_string()
}

fn default_poll_interval() -> Duration {
    Duration::from_secs(10)
}

fn default_max_messages() -> u32 {
    25
}

fn default_location_refresh() -> Duration {
    Duration::from_secs(10)
}

fn default_preferences_path() -> PathBuf {
    PathBuf::from("./earthlink-preferences.json")
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("EARTHLINK_API_URL").ok_or(ConfigError::MissingVar("EARTHLINK_API_URL"))?;
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue("EARTHLINK_API_URL", base_url));
        }

        let account = match (lookup("EARTHLINK_EMAIL"), lookup("EARTHLINK_PASSWORD")) {
            (Some(email), Some(password)) => Some(AccountConfig { email, password }),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::MissingVar("EARTHLINK_PASSWORD")),
            (None, Some(_)) => return Err(ConfigError::MissingVar("EARTHLINK_EMAIL")),
        };

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: lookup("APP_ENV")
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            api: ApiConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                request_timeout: parse_var(&lookup, "EARTHLINK_REQUEST_TIMEOUT_SECS")?
                    .map(Duration::from_secs),
            },
            feed: FeedConfig {
                poll_interval: parse_interval(&lookup, "FEED_POLL_INTERVAL_SECS")?
                    .unwrap_or_else(default_poll_interval),
                max_messages: parse_var(&lookup, "FEED_MAX_MESSAGES")?
                    .unwrap_or_else(default_max_messages),
                sort: match lookup("FEED_SORT") {
                    Some(s) => s
                        .parse()
                        .map_err(|_| ConfigError::InvalidValue("FEED_SORT", s))?,
                    None => SortOrder::default(),
                },
            },
            location: LocationConfig {
                refresh_interval: parse_interval(&lookup, "LOCATION_REFRESH_SECS")?
                    .unwrap_or_else(default_location_refresh),
                fixed: match lookup("LOCATION_FIXED") {
                    Some(s) => Some(
                        Coordinate::parse_pair(&s)
                            .map_err(|_| ConfigError::InvalidValue("LOCATION_FIXED", s))?,
                    ),
                    None => None,
                },
            },
            account,
            preferences_path: lookup("PREFERENCES_PATH")
                .map_or_else(default_preferences_path, PathBuf::from),
        })
    }
}

/// Parse an optional variable, failing on a present-but-malformed value
fn parse_var<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
        None => Ok(None),
    }
}

/// Parse a whole-second period; zero is rejected
fn parse_interval<F>(lookup: &F, key: &'static str) -> Result<Option<Duration>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match parse_var::<F, u64>(lookup, key)? {
        Some(0) => Err(ConfigError::InvalidValue(key, "0".to_string())),
        secs => Ok(secs.map(Duration::from_secs)),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
