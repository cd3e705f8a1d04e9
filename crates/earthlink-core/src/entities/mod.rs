//! Domain entities - core feed objects

mod message;
mod milestone;
mod reaction;
mod user;

pub use message::{Message, MessageCluster, NewMessage, PostedMessage, MAX_CONTENT_CHARS};
pub use milestone::{Milestone, MILESTONES};
pub use reaction::{Reaction, ReactionCounts, ReactionEntry, ReactionEvent, ReactionTap};
pub use user::Credentials;
