//! The signed-in user's own messages and posting milestones

use std::sync::Arc;

use earthlink_common::AppResult;
use earthlink_core::{Message, MessageId, Milestone, RemoteApi, SortOrder, UserId};

pub struct ProfileService {
    remote: Arc<dyn RemoteApi>,
    user_id: UserId,
}

impl ProfileService {
    pub fn new(remote: Arc<dyn RemoteApi>, user_id: UserId) -> Self {
        Self { remote, user_id }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Messages posted by this user, optionally narrowed by a search term
    pub async fn messages(&self, sort: SortOrder, search: Option<&str>) -> AppResult<Vec<Message>> {
        let messages = self
            .remote
            .messages_from_user(&self.user_id, sort, search)
            .await?;
        tracing::debug!(count = messages.len(), %sort, "Loaded own messages");
        Ok(messages)
    }

    pub async fn message_count(&self) -> AppResult<u64> {
        Ok(self.remote.message_count(&self.user_id).await?)
    }

    /// Every milestone with whether it has been reached
    pub async fn milestones(&self) -> AppResult<Vec<(Milestone, bool)>> {
        let count = self.message_count().await?;
        Ok(Milestone::progress(count))
    }

    pub async fn delete_message(&self, id: &MessageId) -> AppResult<()> {
        self.remote.delete_message(id).await?;
        tracing::info!(message_id = %id, "Message deleted");
        Ok(())
    }
}
