//! Reaction wire model

use serde::Serialize;

/// Body of `POST /changeReactions`
#[derive(Debug, Clone, Serialize)]
pub struct ReactionModel {
    pub user_uid: String,
    pub message_id: String,
    /// 1 liked, -1 disliked, 0 cleared
    pub reaction_type: i8,
    /// Timestamp of the reacted-to message, in the listing format
    pub timestamp: String,
}
