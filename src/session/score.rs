//! Win/loss/tie counters for a session.

use serde::{Deserialize, Serialize};

use crate::rules::Verdict;

/// Running score, from the user's point of view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTally {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl ScoreTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one completed round.
    pub fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Win => self.wins += 1,
            Verdict::Loss => self.losses += 1,
            Verdict::Tie => self.ties += 1,
        }
    }

    /// Rounds played so far.
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.wins + self.losses + self.ties
    }
}

impl std::fmt::Display for ScoreTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Wins: {} | Losses: {} | Ties: {}",
            self.wins, self.losses, self.ties
        )
    }
}
