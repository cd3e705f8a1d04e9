//! Periodic location refresh

use std::sync::Arc;
use std::time::Duration;

use earthlink_core::{Coordinate, LocationSource};
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use super::LatestFix;
use crate::MIN_PERIOD;

/// Result of one location refresh
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RefreshOutcome {
    Updated(Coordinate),
    /// The platform had no fix; the previous one is kept
    NoFix,
    Failed,
}

/// Polls a [`LocationSource`] and records every fix into a [`LatestFix`]
pub struct LocationTracker {
    source: Arc<dyn LocationSource>,
    fix: Arc<LatestFix>,
}

impl LocationTracker {
    pub fn new(source: Arc<dyn LocationSource>, fix: Arc<LatestFix>) -> Self {
        Self { source, fix }
    }

    pub fn latest(&self) -> Arc<LatestFix> {
        self.fix.clone()
    }

    /// Query the source once
    pub async fn refresh(&self) -> RefreshOutcome {
        match self.source.last_known_fix().await {
            Ok(Some(at)) => {
                self.fix.record(at);
                tracing::trace!(location = %at, "Location updated");
                RefreshOutcome::Updated(at)
            }
            Ok(None) => {
                tracing::debug!("No location fix available");
                RefreshOutcome::NoFix
            }
            Err(e) if e.needs_user_action() => {
                tracing::warn!(error = %e, "Location refresh blocked");
                RefreshOutcome::Failed
            }
            Err(e) => {
                tracing::debug!(error = %e, "Location refresh failed");
                RefreshOutcome::Failed
            }
        }
    }

    /// Refresh every `period` until `cancel` fires; the first refresh is immediate
    pub async fn run(&self, period: Duration, cancel: CancellationToken) {
        let mut ticker = interval(period.max(MIN_PERIOD));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                () = cancel.cancelled() => break,
                _ = ticker.tick() => {}
            }

            tokio::select! {
                biased;
                () = cancel.cancelled() => break,
                _ = self.refresh() => {}
            }
        }

        tracing::debug!("Location loop ended");
    }
}
