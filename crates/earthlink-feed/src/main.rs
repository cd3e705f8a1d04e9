//! Headless feed runner entry point
//!
//! Run with:
//! ```bash
//! cargo run -p earthlink-feed
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use earthlink_common::{try_init_tracing_with_config, AppConfig, AppError, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration before tracing so the log format follows APP_ENV
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_environment(config.app.env))
        .map_err(AppError::from)
    {
        eprintln!("Warning: Failed to initialize tracing [{}]: {e}", e.error_code());
    }

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        api = %config.api.base_url,
        "Configuration loaded"
    );

    if let Err(e) = earthlink_feed::runner::run(config).await {
        error!(error = %e, code = e.error_code(), "Feed runner failed");
        std::process::exit(1);
    }

    info!("Feed runner exited");
}
