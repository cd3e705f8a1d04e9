//! Posting milestones shown on the profile

/// A posting milestone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub name: &'static str,
    pub reward: &'static str,
    /// Messages required to complete it
    pub threshold: u64,
}

pub const MILESTONES: [Milestone; 3] = [
    Milestone {
        name: "Post your first message",
        reward: "5 points",
        threshold: 1,
    },
    Milestone {
        name: "Post 10 messages",
        reward: "10 points",
        threshold: 10,
    },
    Milestone {
        name: "Post 100 messages",
        reward: "50 points",
        threshold: 100,
    },
];

impl Milestone {
    #[inline]
    pub fn is_complete(&self, message_count: u64) -> bool {
        message_count >= self.threshold
    }

    /// All milestones paired with their completion state
    pub fn progress(message_count: u64) -> Vec<(Milestone, bool)> {
        MILESTONES
            .iter()
            .map(|m| (*m, m.is_complete(message_count)))
            .collect()
    }
}
