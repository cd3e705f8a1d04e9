//! # earthlink-core
//!
//! Domain layer for the location-driven message feed: entities, value objects,
//! error types, and the port traits implemented by the platform and the remote client.
//! This crate has no dependencies on infrastructure (HTTP, runtime, logging).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Credentials, Message, MessageCluster, Milestone, NewMessage, PostedMessage, Reaction,
    ReactionCounts, ReactionEntry, ReactionEvent, ReactionTap, MILESTONES,
};
pub use error::{DomainError, LocationError, RemoteError};
pub use traits::{LocationProvider, LocationSource, RemoteApi, RemoteResult};
pub use value_objects::{Coordinate, FilterLevel, MessageId, SortOrder, UserId};
