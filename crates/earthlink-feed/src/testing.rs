//! In-memory fakes for unit tests

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::NaiveDateTime;
use earthlink_core::{
    Coordinate, Credentials, LocationError, LocationSource, Message, MessageCluster, MessageId,
    NewMessage, PostedMessage, ReactionEvent, RemoteApi, RemoteError, RemoteResult, SortOrder,
    UserId,
};
use parking_lot::Mutex;

pub fn coord(lat: f64, lng: f64) -> Coordinate {
    Coordinate::new(lat, lng).unwrap()
}

pub fn message(id: &str, likes: u32, dislikes: u32) -> Message {
    Message {
        id: MessageId::new(id),
        author_id: UserId::new("author"),
        content: format!("message {id}"),
        location: coord(49.28, -123.12),
        created_at: "2023-11-14T10:29:29.298199".parse::<NaiveDateTime>().unwrap(),
        likes,
        dislikes,
        geohash: None,
    }
}

pub fn cluster(messages: Vec<Message>) -> MessageCluster {
    MessageCluster::new(messages).unwrap()
}

/// Scripted remote: queued `messages_near` results, recorded calls
#[derive(Default)]
pub struct FakeRemote {
    near_responses: Mutex<VecDeque<RemoteResult<Vec<MessageCluster>>>>,
    pub near_calls: Mutex<Vec<(Coordinate, u32, SortOrder)>>,
    pub reactions: Mutex<Vec<ReactionEvent>>,
    pub posted: Mutex<Vec<NewMessage>>,
    pub fail_reactions: AtomicBool,
    pub reaction_calls: AtomicUsize,
    pub message_count: Mutex<u64>,
}

impl FakeRemote {
    pub fn push_near(&self, result: RemoteResult<Vec<MessageCluster>>) {
        self.near_responses.lock().push_back(result);
    }

    pub fn near_call_count(&self) -> usize {
        self.near_calls.lock().len()
    }
}

#[async_trait]
impl RemoteApi for FakeRemote {
    async fn messages_near(
        &self,
        at: Coordinate,
        limit: u32,
        sort: SortOrder,
    ) -> RemoteResult<Vec<MessageCluster>> {
        self.near_calls.lock().push((at, limit, sort));
        self.near_responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn messages_from_user(
        &self,
        user: &UserId,
        _sort: SortOrder,
        search: Option<&str>,
    ) -> RemoteResult<Vec<Message>> {
        let mut msg = message("own", 0, 0);
        msg.author_id = user.clone();
        if let Some(term) = search {
            msg.content = format!("about {term}");
        }
        Ok(vec![msg])
    }

    async fn message_count(&self, _user: &UserId) -> RemoteResult<u64> {
        Ok(*self.message_count.lock())
    }

    async fn post_message(&self, message: &NewMessage) -> RemoteResult<PostedMessage> {
        self.posted.lock().push(message.clone());
        Ok(PostedMessage {
            id: MessageId::new("posted-1"),
            status: "Message posted".to_string(),
        })
    }

    async fn delete_message(&self, _id: &MessageId) -> RemoteResult<()> {
        Ok(())
    }

    async fn change_reaction(&self, event: &ReactionEvent) -> RemoteResult<()> {
        self.reactions.lock().push(event.clone());
        self.reaction_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reactions.load(Ordering::SeqCst) {
            Err(RemoteError::Http {
                status: 500,
                body: "boom".to_string(),
            })
        } else {
            Ok(())
        }
    }

    async fn login(&self, _credentials: &Credentials) -> RemoteResult<String> {
        Ok("token".to_string())
    }

    async fn signup(&self, _credentials: &Credentials) -> RemoteResult<UserId> {
        Ok(UserId::new("new-user"))
    }

    async fn validate_token(&self, _token: &str) -> RemoteResult<UserId> {
        Ok(UserId::new("me"))
    }
}

/// Scripted platform location service
#[derive(Default)]
pub struct FakeSource {
    pub fixes: Mutex<VecDeque<Result<Option<Coordinate>, LocationError>>>,
}

#[async_trait]
impl LocationSource for FakeSource {
    async fn last_known_fix(&self) -> Result<Option<Coordinate>, LocationError> {
        self.fixes.lock().pop_front().unwrap_or(Ok(None))
    }
}
