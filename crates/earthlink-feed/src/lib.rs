//! # earthlink-feed
//!
//! The location-driven message feed: a location tracker that keeps the latest
//! fix, a poller that replaces the nearby-message list on a fixed interval, and
//! a reaction tracker that applies like/dislike taps optimistically before
//! syncing them in the background. [`FeedController`] owns all three for the
//! lifetime of one screen.

pub mod controller;
pub mod feed;
pub mod location;
pub mod profile;
pub mod reactions;
pub mod runner;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

use std::time::Duration;

/// Shortest period the polling loops accept
pub const MIN_PERIOD: Duration = Duration::from_millis(100);

pub use controller::{FeedController, FeedSettings, LocationMode, MessageView};
pub use feed::{FeedPoller, FeedQuery, FeedSnapshot, TickOutcome};
pub use location::{FixedLocation, LatestFix, LocationTracker, RefreshOutcome};
pub use profile::ProfileService;
pub use reactions::ReactionTracker;
pub use session::{sign_in, sign_up};
