//! Optimistic like/dislike state for visible messages

mod tracker;

pub use tracker::ReactionTracker;
