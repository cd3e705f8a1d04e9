//! Fixed-interval feed polling
//!
//! Every tick reads the latest location, fetches nearby messages, and
//! publishes the result as a new [`FeedSnapshot`]. A failed tick leaves the
//! published snapshot alone; the next tick runs on schedule either way.

use std::sync::Arc;
use std::time::Duration;

use earthlink_core::{LocationProvider, RemoteApi, SortOrder};
use tokio::sync::watch;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use super::FeedSnapshot;
use crate::MIN_PERIOD;

/// Parameters of the nearby-messages request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedQuery {
    pub limit: u32,
    pub sort: SortOrder,
}

impl Default for FeedQuery {
    fn default() -> Self {
        Self {
            limit: 25,
            sort: SortOrder::Latest,
        }
    }
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No location fix; no request was made
    Skipped,
    Replaced { clusters: usize, messages: usize },
    Failed,
}

pub struct FeedPoller {
    remote: Arc<dyn RemoteApi>,
    location: Arc<dyn LocationProvider>,
    query: FeedQuery,
    snapshot: watch::Sender<FeedSnapshot>,
}

impl FeedPoller {
    pub fn new(
        remote: Arc<dyn RemoteApi>,
        location: Arc<dyn LocationProvider>,
        query: FeedQuery,
    ) -> Self {
        let (snapshot, _) = watch::channel(FeedSnapshot::default());
        Self {
            remote,
            location,
            query,
            snapshot,
        }
    }

    pub fn query(&self) -> FeedQuery {
        self.query
    }

    /// Receive every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<FeedSnapshot> {
        self.snapshot.subscribe()
    }

    /// The currently published snapshot
    pub fn snapshot(&self) -> FeedSnapshot {
        self.snapshot.borrow().clone()
    }

    /// Run one fetch and publish its result
    pub async fn tick(&self) -> TickOutcome {
        let Some(at) = self.location.current_location() else {
            tracing::debug!("No location fix, skipping feed refresh");
            return TickOutcome::Skipped;
        };

        match self
            .remote
            .messages_near(at, self.query.limit, self.query.sort)
            .await
        {
            Ok(clusters) => {
                let outcome = TickOutcome::Replaced {
                    clusters: clusters.len(),
                    messages: clusters.iter().map(|c| c.len()).sum(),
                };
                self.snapshot.send_modify(|current| {
                    *current = FeedSnapshot::new(clusters, current.generation() + 1);
                });
                tracing::debug!(location = %at, ?outcome, "Feed refreshed");
                outcome
            }
            Err(e) => {
                tracing::warn!(location = %at, error = %e, "Feed refresh failed");
                TickOutcome::Failed
            }
        }
    }

    /// Tick every `period` until `cancel` fires
    ///
    /// The first tick is immediate. Cancelling also abandons an in-flight fetch.
    /// Periods shorter than [`MIN_PERIOD`] are raised to it.
    pub async fn run(&self, period: Duration, cancel: CancellationToken) {
        let period = period.max(MIN_PERIOD);
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tracing::info!(
            interval = ?period,
            limit = self.query.limit,
            sort = %self.query.sort,
            "Feed polling started"
        );

        loop {
            tokio::select! {
                biased;
                () = cancel.cancelled() => break,
                _ = ticker.tick() => {}
            }

            tokio::select! {
                biased;
                () = cancel.cancelled() => break,
                _ = self.tick() => {}
            }
        }

        tracing::info!("Feed polling stopped");
    }
}
