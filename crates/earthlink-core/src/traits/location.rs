//! Location ports

use async_trait::async_trait;

use crate::error::LocationError;
use crate::value_objects::Coordinate;

/// Latest known device position, read synchronously
///
/// `None` means no fix yet or no permission. Callers must keep working
/// through any number of consecutive `None`s.
pub trait LocationProvider: Send + Sync {
    fn current_location(&self) -> Option<Coordinate>;
}

/// Platform location service, queried periodically
#[async_trait]
pub trait LocationSource: Send + Sync {
    /// The platform's last known fix, `Ok(None)` when it has none
    async fn last_known_fix(&self) -> Result<Option<Coordinate>, LocationError>;
}

impl<T: LocationProvider + ?Sized> LocationProvider for std::sync::Arc<T> {
    fn current_location(&self) -> Option<Coordinate> {
        (**self).current_location()
    }
}
