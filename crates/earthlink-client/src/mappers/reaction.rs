//! Reaction event -> wire model mapper

use earthlink_core::ReactionEvent;

use crate::models::ReactionModel;

impl From<&ReactionEvent> for ReactionModel {
    fn from(event: &ReactionEvent) -> Self {
        Self {
            user_uid: event.user_id.to_string(),
            message_id: event.message_id.to_string(),
            reaction_type: event.reaction.as_wire(),
            timestamp: event
                .message_timestamp
                .format("%Y-%m-%dT%H:%M:%S%.f")
                .to_string(),
        }
    }
}
