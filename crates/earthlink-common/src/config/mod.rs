//! Configuration structs

mod app_config;

pub use app_config::{
    AccountConfig, ApiConfig, AppConfig, AppSettings, ConfigError, Environment, FeedConfig,
    LocationConfig,
};
