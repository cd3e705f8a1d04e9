//! Remote API port
//!
//! The feed layer defines what it needs from the server; the HTTP client
//! crate provides the implementation.

use async_trait::async_trait;

use crate::entities::{Credentials, Message, MessageCluster, NewMessage, PostedMessage, ReactionEvent};
use crate::error::RemoteError;
use crate::value_objects::{Coordinate, MessageId, SortOrder, UserId};

/// Result type for remote operations
pub type RemoteResult<T> = Result<T, RemoteError>;

#[async_trait]
pub trait RemoteApi: Send + Sync {
    // ========================================================================
    // Messages
    // ========================================================================

    /// Messages near `at`, grouped into map clusters
    async fn messages_near(
        &self,
        at: Coordinate,
        limit: u32,
        sort: SortOrder,
    ) -> RemoteResult<Vec<MessageCluster>>;

    /// Messages posted by `user`, optionally filtered by a search term
    async fn messages_from_user(
        &self,
        user: &UserId,
        sort: SortOrder,
        search: Option<&str>,
    ) -> RemoteResult<Vec<Message>>;

    /// Number of messages `user` has posted
    async fn message_count(&self, user: &UserId) -> RemoteResult<u64>;

    async fn post_message(&self, message: &NewMessage) -> RemoteResult<PostedMessage>;

    async fn delete_message(&self, id: &MessageId) -> RemoteResult<()>;

    // ========================================================================
    // Reactions
    // ========================================================================

    async fn change_reaction(&self, event: &ReactionEvent) -> RemoteResult<()>;

    // ========================================================================
    // Auth
    // ========================================================================

    /// Log in and return the bearer token
    async fn login(&self, credentials: &Credentials) -> RemoteResult<String>;

    /// Create an account and return the new user id
    async fn signup(&self, credentials: &Credentials) -> RemoteResult<UserId>;

    /// Resolve a bearer token to its user id
    async fn validate_token(&self, token: &str) -> RemoteResult<UserId>;
}
