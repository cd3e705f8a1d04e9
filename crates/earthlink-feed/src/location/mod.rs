//! Device location: the latest fix and the loop that refreshes it

mod latest_fix;
mod tracker;

pub use latest_fix::{FixedLocation, LatestFix};
pub use tracker::{LocationTracker, RefreshOutcome};
