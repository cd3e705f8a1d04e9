//! Port traits - what the feed needs from the platform and the server

mod location;
mod remote;

pub use location::{LocationProvider, LocationSource};
pub use remote::{RemoteApi, RemoteResult};
