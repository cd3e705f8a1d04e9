//! Immutable view of the fetched feed

use std::sync::Arc;

use chrono::{DateTime, Utc};
use earthlink_core::{Message, MessageCluster, MessageId};

/// One complete fetch result
///
/// Snapshots are replaced whole; cloning shares the cluster list.
#[derive(Debug, Clone, Default)]
pub struct FeedSnapshot {
    clusters: Arc<Vec<MessageCluster>>,
    generation: u64,
    fetched_at: Option<DateTime<Utc>>,
}

impl FeedSnapshot {
    pub(crate) fn new(clusters: Vec<MessageCluster>, generation: u64) -> Self {
        Self {
            clusters: Arc::new(clusters),
            generation,
            fetched_at: Some(Utc::now()),
        }
    }

    pub fn clusters(&self) -> &[MessageCluster] {
        &self.clusters
    }

    /// All messages in cluster order
    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.clusters.iter().flat_map(MessageCluster::messages)
    }

    pub fn message_count(&self) -> usize {
        self.clusters.iter().map(MessageCluster::len).sum()
    }

    pub fn find(&self, id: &MessageId) -> Option<&Message> {
        self.messages().find(|m| &m.id == id)
    }

    /// Number of successful fetches so far; 0 before the first one
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}
