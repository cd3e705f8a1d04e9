//! Message wire model <-> entity mapper

use earthlink_core::{
    Coordinate, DomainError, Message, MessageCluster, MessageId, NewMessage, UserId,
};

use crate::models::{MessageModel, NewMessageModel};

/// Convert MessageModel to Message entity
///
/// Negative counters from the server are clamped to zero.
impl TryFrom<MessageModel> for Message {
    type Error = DomainError;

    fn try_from(model: MessageModel) -> Result<Self, Self::Error> {
        Ok(Message {
            id: MessageId::new(model.message_id),
            author_id: UserId::new(model.user_uid),
            content: model.message_content,
            location: Coordinate::new(model.latitude, model.longitude)?,
            created_at: model.timestamp,
            likes: clamp_count(model.likes),
            dislikes: clamp_count(model.dislikes),
            geohash: model.geohash,
        })
    }
}

/// Convert the radius endpoint's nested listing into clusters, dropping empty groups
pub fn clusters_from_models(
    groups: Vec<Vec<MessageModel>>,
) -> Result<Vec<MessageCluster>, DomainError> {
    let mut clusters = Vec::with_capacity(groups.len());
    for group in groups {
        let messages = group
            .into_iter()
            .map(Message::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        clusters.extend(MessageCluster::new(messages));
    }
    Ok(clusters)
}

impl<'a> From<&'a NewMessage> for NewMessageModel<'a> {
    fn from(message: &'a NewMessage) -> Self {
        Self {
            message_content: &message.content,
            latitude: message.location.latitude,
            longitude: message.location.longitude,
            timestamp: message.created_at.timestamp_millis(),
            user_uid: message.author_id.as_str(),
            likes: 0,
            dislikes: 0,
        }
    }
}

fn clamp_count(raw: i64) -> u32 {
    u32::try_from(raw.max(0)).unwrap_or(u32::MAX)
}
