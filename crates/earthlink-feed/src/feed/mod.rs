//! Nearby-message feed

mod poller;
mod snapshot;

pub use poller::{FeedPoller, FeedQuery, TickOutcome};
pub use snapshot::FeedSnapshot;
