//! Location providers backed by in-memory state

use earthlink_core::{Coordinate, LocationProvider};
use parking_lot::RwLock;

/// Most recent fix reported by the platform
///
/// Written by [`LocationTracker`](super::LocationTracker), read by the poller
/// and by message posting.
#[derive(Debug, Default)]
pub struct LatestFix {
    inner: RwLock<Option<Coordinate>>,
}

impl LatestFix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, fix: Coordinate) {
        *self.inner.write() = Some(fix);
    }

    /// Forget the current fix, e.g. after location permission is revoked
    pub fn clear(&self) {
        *self.inner.write() = None;
    }
}

impl LocationProvider for LatestFix {
    fn current_location(&self) -> Option<Coordinate> {
        *self.inner.read()
    }
}

/// A position that never changes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLocation(pub Coordinate);

impl LocationProvider for FixedLocation {
    fn current_location(&self) -> Option<Coordinate> {
        Some(self.0)
    }
}
