//! Reaction tracker
//!
//! Taps update the local entry immediately. The new reaction is then sent to
//! the server from a detached task; its outcome is only logged and never
//! written back into the local counters.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDateTime;
use dashmap::DashMap;
use earthlink_core::{
    MessageId, ReactionCounts, ReactionEntry, ReactionEvent, ReactionTap, RemoteApi, UserId,
};
use parking_lot::Mutex;
use tokio_util::task::TaskTracker;

use crate::feed::FeedSnapshot;

#[derive(Debug, Clone, Copy)]
struct TrackedMessage {
    entry: ReactionEntry,
    created_at: NaiveDateTime,
}

pub struct ReactionTracker {
    remote: Arc<dyn RemoteApi>,
    /// Acting user; `None` keeps reactions local
    user_id: Option<UserId>,
    entries: DashMap<MessageId, TrackedMessage>,
    /// Generation of the last snapshot applied by `sync_visible`
    synced: Mutex<u64>,
    tasks: TaskTracker,
}

impl ReactionTracker {
    pub fn new(remote: Arc<dyn RemoteApi>, user_id: Option<UserId>) -> Self {
        Self {
            remote,
            user_id,
            entries: DashMap::new(),
            synced: Mutex::new(0),
            tasks: TaskTracker::new(),
        }
    }

    /// Apply a tap to a visible message and start syncing it
    ///
    /// Returns the updated entry, or `None` if the message is not visible.
    /// Must be called from within a Tokio runtime.
    pub fn apply_reaction(&self, id: &MessageId, tap: ReactionTap) -> Option<ReactionEntry> {
        let mut guard = self.entries.get_mut(id)?;
        guard.entry.tap(tap);
        let tracked = *guard;
        drop(guard);

        tracing::debug!(
            message_id = %id,
            reaction = tracked.entry.reaction.as_wire(),
            likes = tracked.entry.counts.likes,
            dislikes = tracked.entry.counts.dislikes,
            "Reaction applied"
        );

        self.sync(id.clone(), tracked);
        Some(tracked.entry)
    }

    fn sync(&self, message_id: MessageId, tracked: TrackedMessage) {
        let Some(user_id) = self.user_id.clone() else {
            tracing::debug!(message_id = %message_id, "Not signed in, reaction kept local");
            return;
        };
        if self.tasks.is_closed() {
            tracing::debug!(message_id = %message_id, "Tracker shut down, reaction not sent");
            return;
        }

        let event = ReactionEvent {
            user_id,
            message_id,
            reaction: tracked.entry.reaction,
            message_timestamp: tracked.created_at,
        };
        let remote = self.remote.clone();

        self.tasks.spawn(async move {
            match remote.change_reaction(&event).await {
                Ok(()) => tracing::debug!(
                    message_id = %event.message_id,
                    reaction = event.reaction.as_wire(),
                    "Reaction synced"
                ),
                Err(e) => tracing::warn!(
                    message_id = %event.message_id,
                    reaction = event.reaction.as_wire(),
                    error = %e,
                    "Reaction sync failed"
                ),
            }
        });
    }

    /// Align tracked entries with the messages in `snapshot`
    ///
    /// New messages start with no reaction and the server's counts. Messages
    /// that stay visible keep their local state; vanished ones are dropped.
    /// Snapshots older than the last one applied are ignored.
    pub fn sync_visible(&self, snapshot: &FeedSnapshot) {
        let mut synced = self.synced.lock();
        if snapshot.generation() < *synced {
            tracing::trace!(
                generation = snapshot.generation(),
                synced = *synced,
                "Skipping stale snapshot"
            );
            return;
        }

        let visible: HashSet<&MessageId> = snapshot.messages().map(|m| &m.id).collect();
        self.entries.retain(|id, _| visible.contains(id));

        for message in snapshot.messages() {
            self.entries
                .entry(message.id.clone())
                .or_insert_with(|| TrackedMessage {
                    entry: ReactionEntry::new(ReactionCounts::new(
                        message.likes,
                        message.dislikes,
                    )),
                    created_at: message.created_at,
                });
        }

        *synced = snapshot.generation();
        tracing::trace!(
            generation = *synced,
            tracked = self.entries.len(),
            "Visible set synced"
        );
    }

    pub fn entry(&self, id: &MessageId) -> Option<ReactionEntry> {
        self.entries.get(id).map(|t| t.entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of reaction syncs still running
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    /// Stop accepting syncs and wait for the running ones
    pub async fn shutdown(&self) {
        self.tasks.close();
        let pending = self.tasks.len();
        if pending > 0 {
            tracing::debug!(pending, "Waiting for reaction syncs");
        }
        self.tasks.wait().await;
    }
}
