//! Feed controller
//!
//! Owns the location, polling, and reaction state of one feed screen and the
//! background loops that drive them. Everything started by [`FeedController::start`]
//! is torn down by [`FeedController::stop`].

use std::sync::Arc;
use std::time::Duration;

use earthlink_common::{AppResult, FeedConfig, LocationConfig};
use earthlink_core::{
    Coordinate, DomainError, FilterLevel, LocationProvider, LocationSource, Message, MessageId,
    NewMessage, PostedMessage, Reaction, ReactionCounts, ReactionEntry, ReactionTap, RemoteApi,
    UserId,
};
use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::feed::{FeedPoller, FeedQuery, FeedSnapshot};
use crate::location::{FixedLocation, LatestFix, LocationTracker};
use crate::reactions::ReactionTracker;

/// Where the controller gets the device position from
#[derive(Clone)]
pub enum LocationMode {
    /// Always report this position
    Fixed(Coordinate),
    /// Poll a platform location service on the refresh interval
    Tracked(Arc<dyn LocationSource>),
    /// Read an externally maintained provider
    Provider(Arc<dyn LocationProvider>),
}

/// Loop timing and request parameters
#[derive(Debug, Clone, Copy)]
pub struct FeedSettings {
    pub poll_interval: Duration,
    pub location_refresh: Duration,
    pub query: FeedQuery,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(10),
            location_refresh: Duration::from_secs(10),
            query: FeedQuery::default(),
        }
    }
}

impl FeedSettings {
    pub fn from_config(feed: &FeedConfig, location: &LocationConfig) -> Self {
        Self {
            poll_interval: feed.poll_interval,
            location_refresh: location.refresh_interval,
            query: FeedQuery {
                limit: feed.max_messages,
                sort: feed.sort,
            },
        }
    }
}

/// A feed row ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct MessageView {
    pub message: Message,
    pub reaction: Reaction,
    /// Counts including the user's optimistic reaction
    pub counts: ReactionCounts,
    /// Content after the profanity filter
    pub content: String,
    pub posted_at: String,
}

pub struct FeedController {
    remote: Arc<dyn RemoteApi>,
    location: Arc<dyn LocationProvider>,
    tracker: Option<Arc<LocationTracker>>,
    poller: Arc<FeedPoller>,
    reactions: Arc<ReactionTracker>,
    user_id: Option<UserId>,
    settings: FeedSettings,
    cancel: CancellationToken,
    handles: Mutex<Vec<JoinHandle<()>>>,
}

impl FeedController {
    /// Create a controller; nothing runs until [`start`](Self::start)
    ///
    /// Without a `user_id` the feed is read-only: reactions stay local and
    /// posting fails.
    pub fn new(
        remote: Arc<dyn RemoteApi>,
        location: LocationMode,
        user_id: Option<UserId>,
        settings: FeedSettings,
    ) -> Self {
        let mut tracker = None;
        let provider: Arc<dyn LocationProvider> = match location {
            LocationMode::Fixed(at) => Arc::new(FixedLocation(at)),
            LocationMode::Tracked(source) => {
                let fix = Arc::new(LatestFix::new());
                tracker = Some(Arc::new(LocationTracker::new(source, fix.clone())));
                fix
            }
            LocationMode::Provider(provider) => provider,
        };

        let poller = Arc::new(FeedPoller::new(
            remote.clone(),
            provider.clone(),
            settings.query,
        ));
        let reactions = Arc::new(ReactionTracker::new(remote.clone(), user_id.clone()));

        Self {
            remote,
            location: provider,
            tracker,
            poller,
            reactions,
            user_id,
            settings,
            cancel: CancellationToken::new(),
            handles: Mutex::new(Vec::new()),
        }
    }

    /// Spawn the location, polling, and visible-set loops
    pub fn start(&self) {
        let mut handles = self.handles.lock();
        if !handles.is_empty() {
            tracing::warn!("Feed controller is already running");
            return;
        }
        if self.cancel.is_cancelled() {
            tracing::warn!("Feed controller was stopped and cannot be restarted");
            return;
        }

        if let Some(tracker) = self.tracker.clone() {
            let period = self.settings.location_refresh;
            let cancel = self.cancel.clone();
            handles.push(tokio::spawn(async move {
                tracker.run(period, cancel).await;
            }));
        }

        let poller = self.poller.clone();
        let period = self.settings.poll_interval;
        let cancel = self.cancel.clone();
        handles.push(tokio::spawn(async move {
            poller.run(period, cancel).await;
        }));

        let mut snapshots = self.poller.subscribe();
        let reactions = self.reactions.clone();
        let cancel = self.cancel.clone();
        handles.push(tokio::spawn(async move {
            loop {
                tokio::select! {
                    biased;
                    () = cancel.cancelled() => break,
                    changed = snapshots.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        let snapshot = snapshots.borrow_and_update().clone();
                        reactions.sync_visible(&snapshot);
                    }
                }
            }
        }));

        tracing::info!(
            tracked_location = self.tracker.is_some(),
            signed_in = self.user_id.is_some(),
            "Feed controller started"
        );
    }

    /// Tap like or dislike on a visible message
    pub fn react(&self, id: &MessageId, tap: ReactionTap) -> AppResult<ReactionEntry> {
        if let Some(entry) = self.reactions.apply_reaction(id, tap) {
            return Ok(entry);
        }

        // the visible-set loop may not have caught up with the latest snapshot
        let snapshot = self.poller.snapshot();
        if snapshot.find(id).is_none() {
            return Err(DomainError::MessageNotVisible(id.to_string()).into());
        }
        self.reactions.sync_visible(&snapshot);
        self.reactions
            .apply_reaction(id, tap)
            .ok_or_else(|| DomainError::MessageNotVisible(id.to_string()).into())
    }

    /// Post `content` at the current location
    pub async fn post_message(&self, content: &str) -> AppResult<PostedMessage> {
        let author = self.user_id.clone().ok_or(DomainError::NotLoggedIn)?;
        let at = self
            .location
            .current_location()
            .ok_or(DomainError::LocationUnavailable)?;

        let message = NewMessage::new(content, at, author)?;
        let posted = self.remote.post_message(&message).await?;

        tracing::info!(message_id = %posted.id, location = %at, "Message posted");
        Ok(posted)
    }

    /// Current feed as display rows
    pub fn visible_messages(&self, filter: FilterLevel) -> Vec<MessageView> {
        let snapshot = self.poller.snapshot();
        snapshot
            .messages()
            .map(|message| {
                let entry = self.reactions.entry(&message.id).unwrap_or_else(|| {
                    ReactionEntry::new(ReactionCounts::new(message.likes, message.dislikes))
                });
                MessageView {
                    message: message.clone(),
                    reaction: entry.reaction,
                    counts: entry.counts,
                    content: filter.apply(&message.content),
                    posted_at: message.display_timestamp(),
                }
            })
            .collect()
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        self.poller.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<FeedSnapshot> {
        self.poller.subscribe()
    }

    pub fn current_location(&self) -> Option<Coordinate> {
        self.location.current_location()
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    /// Cancel the loops, wait for them, then drain pending reaction syncs
    pub async fn stop(&self) {
        self.cancel.cancel();

        let handles = std::mem::take(&mut *self.handles.lock());
        for handle in handles {
            if let Err(e) = handle.await {
                tracing::warn!(error = %e, "Feed task ended abnormally");
            }
        }

        self.reactions.shutdown().await;
        tracing::info!("Feed controller stopped");
    }
}
