//! Like/dislike reactions
//!
//! A user holds at most one reaction per message. Tapping the active
//! reaction clears it; tapping the other one switches to it.

use chrono::NaiveDateTime;

use crate::value_objects::{MessageId, UserId};

/// The current user's reaction to a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Reaction {
    #[default]
    None,
    Liked,
    Disliked,
}

/// A tap on one of the two reaction buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionTap {
    Like,
    Dislike,
}

impl Reaction {
    /// Wire value: 0 none, 1 liked, -1 disliked
    #[inline]
    pub const fn as_wire(self) -> i8 {
        match self {
            Self::None => 0,
            Self::Liked => 1,
            Self::Disliked => -1,
        }
    }

    /// State after the user taps `tap`
    pub const fn after_tap(self, tap: ReactionTap) -> Self {
        match (self, tap) {
            (Self::Liked, ReactionTap::Like) | (Self::Disliked, ReactionTap::Dislike) => Self::None,
            (_, ReactionTap::Like) => Self::Liked,
            (_, ReactionTap::Dislike) => Self::Disliked,
        }
    }

    #[inline]
    pub fn is_liked(self) -> bool {
        self == Self::Liked
    }

    #[inline]
    pub fn is_disliked(self) -> bool {
        self == Self::Disliked
    }
}

/// Displayed like/dislike counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ReactionCounts {
    pub likes: u32,
    pub dislikes: u32,
}

impl ReactionCounts {
    pub const fn new(likes: u32, dislikes: u32) -> Self {
        Self { likes, dislikes }
    }

    /// Counters after the user's reaction moves from `from` to `to`
    ///
    /// Decrements floor at zero.
    pub fn transition(self, from: Reaction, to: Reaction) -> Self {
        if from == to {
            return self;
        }

        let mut next = self;
        match from {
            Reaction::Liked => next.likes = next.likes.saturating_sub(1),
            Reaction::Disliked => next.dislikes = next.dislikes.saturating_sub(1),
            Reaction::None => {}
        }
        match to {
            Reaction::Liked => next.likes = next.likes.saturating_add(1),
            Reaction::Disliked => next.dislikes = next.dislikes.saturating_add(1),
            Reaction::None => {}
        }
        next
    }
}

/// Local reaction state for one visible message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReactionEntry {
    pub reaction: Reaction,
    pub counts: ReactionCounts,
}

impl ReactionEntry {
    /// Entry for a message entering the visible set
    pub const fn new(counts: ReactionCounts) -> Self {
        Self {
            reaction: Reaction::None,
            counts,
        }
    }

    /// Apply a tap in place
    pub fn tap(&mut self, tap: ReactionTap) {
        let next = self.reaction.after_tap(tap);
        self.counts = self.counts.transition(self.reaction, next);
        self.reaction = next;
    }
}

/// Reaction change sent to the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionEvent {
    pub user_id: UserId,
    pub message_id: MessageId,
    pub reaction: Reaction,
    /// Creation time of the reacted-to message
    pub message_timestamp: NaiveDateTime,
}
