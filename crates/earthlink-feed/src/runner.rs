//! Headless feed runner
//!
//! Signs in when an account is configured, runs a [`FeedController`] at the
//! configured fixed location, and logs every snapshot until Ctrl-C.

use std::sync::Arc;

use earthlink_client::HttpRemote;
use earthlink_common::{AppConfig, AppError, AppResult, ConfigError, PreferenceStore, Preferences};
use earthlink_core::{Credentials, RemoteApi, UserId};

use crate::controller::{FeedController, FeedSettings, LocationMode};
use crate::session::sign_in;

/// Build the controller and everything it depends on
pub async fn create_controller(config: &AppConfig) -> AppResult<(FeedController, Preferences)> {
    let store = PreferenceStore::new(config.preferences_path.clone());
    let mut prefs = store.load().await?;

    let remote = Arc::new(HttpRemote::new(&config.api)?);
    let user_id = match &config.account {
        Some(account) => {
            let credentials = Credentials::new(&account.email, &account.password);
            let user_id = sign_in(&remote, &credentials).await?;
            prefs = cache_user_id(&store, user_id.clone()).await?;
            Some(user_id)
        }
        None => {
            tracing::info!("No account configured, running signed out");
            None
        }
    };

    let at = config
        .location
        .fixed
        .ok_or(ConfigError::MissingVar("LOCATION_FIXED"))?;

    let remote: Arc<dyn RemoteApi> = remote;
    let controller = FeedController::new(
        remote,
        LocationMode::Fixed(at),
        user_id,
        FeedSettings::from_config(&config.feed, &config.location),
    );
    Ok((controller, prefs))
}

async fn cache_user_id(store: &PreferenceStore, user_id: UserId) -> AppResult<Preferences> {
    let prefs = store
        .update(|prefs| prefs.user_id = Some(user_id))
        .await?;
    Ok(prefs)
}

/// Run until Ctrl-C
pub async fn run(config: AppConfig) -> AppResult<()> {
    let (controller, prefs) = create_controller(&config).await?;
    let mut snapshots = controller.subscribe();

    controller.start();

    loop {
        tokio::select! {
            signal = tokio::signal::ctrl_c() => {
                signal.map_err(AppError::internal)?;
                tracing::info!("Shutdown signal received");
                break;
            }
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                snapshots.borrow_and_update();
                for row in controller.visible_messages(prefs.filter_level) {
                    tracing::info!(
                        message_id = %row.message.id,
                        posted_at = %row.posted_at,
                        likes = row.counts.likes,
                        dislikes = row.counts.dislikes,
                        content = %row.content,
                        "Nearby message"
                    );
                }
            }
        }
    }

    controller.stop().await;
    Ok(())
}
