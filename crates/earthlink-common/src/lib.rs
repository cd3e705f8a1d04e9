//! # earthlink-common
//!
//! Shared utilities including configuration, error handling, telemetry, and
//! the local preference store.

pub mod config;
pub mod error;
pub mod preferences;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    AccountConfig, ApiConfig, AppConfig, AppSettings, ConfigError, Environment, FeedConfig,
    LocationConfig,
};
pub use error::{AppError, AppResult};
pub use preferences::{PreferenceStore, Preferences, PreferencesError, Theme};
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
