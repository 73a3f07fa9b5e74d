//! Winner determination.
//!
//! `OutcomeEngine` owns the validated rule tables and turns a pair of
//! throws into a `RoundResult`. It has no side effects: the same pair
//! always produces the same result.

use serde::Serialize;

use crate::core::{Action, Result};

use super::tables::{DominationTable, ExplanationTable};

/// Round classification from the user's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Verdict {
    /// The user's action defeats the computer's.
    Win,
    /// The computer's action defeats the user's.
    Loss,
    /// Both threw the same action.
    Tie,
}

/// Outcome of a single round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    pub user: Action,
    pub computer: Action,
    pub verdict: Verdict,
    /// Why the winner won. `None` for ties.
    pub explanation: Option<&'static str>,
}

impl RoundResult {
    /// The (winner, loser) pair, or `None` for a tie.
    #[must_use]
    pub fn winner_and_loser(&self) -> Option<(Action, Action)> {
        match self.verdict {
            Verdict::Win => Some((self.user, self.computer)),
            Verdict::Loss => Some((self.computer, self.user)),
            Verdict::Tie => None,
        }
    }

    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.verdict == Verdict::Tie
    }
}

/// Decides rounds using the canonical rule tables.
///
/// ## Example
///
/// ```
/// use rpsls::core::Action;
/// use rpsls::rules::{OutcomeEngine, Verdict};
///
/// let engine = OutcomeEngine::new().unwrap();
/// let result = engine.determine_outcome(Action::Rock, Action::Spock).unwrap();
///
/// assert_eq!(result.verdict, Verdict::Loss);
/// assert_eq!(result.explanation, Some("Spock vaporizes rock"));
/// ```
#[derive(Clone, Debug)]
pub struct OutcomeEngine {
    domination: DominationTable,
    explanations: ExplanationTable,
}

impl OutcomeEngine {
    /// Build the engine from the canonical tables, checking their consistency.
    pub fn new() -> Result<Self> {
        Self::with_tables(DominationTable::standard(), ExplanationTable::standard())
    }

    /// Build the engine from explicit tables.
    ///
    /// Fails if the domination table is not a balanced tournament or the
    /// explanations do not cover exactly its edges.
    pub fn with_tables(domination: DominationTable, explanations: ExplanationTable) -> Result<Self> {
        domination.validate()?;
        explanations.validate_against(&domination)?;
        Ok(Self {
            domination,
            explanations,
        })
    }

    /// The two actions `action` defeats.
    #[must_use]
    pub fn defeats_of(&self, action: Action) -> [Action; 2] {
        self.domination.defeats_of(action)
    }

    /// Like [`defeats_of`](Self::defeats_of), for an unvalidated ordinal.
    pub fn defeats_of_ordinal(&self, ordinal: u8) -> Result<[Action; 2]> {
        Action::from_ordinal(ordinal).map(|a| self.defeats_of(a))
    }

    /// Phrase explaining why `winner` beats `loser`.
    pub fn explanation_of(&self, winner: Action, loser: Action) -> Result<&'static str> {
        self.explanations.get(winner, loser)
    }

    /// Decide a round.
    ///
    /// Only fails with `MissingExplanation`, which the constructor already
    /// rules out.
    pub fn determine_outcome(&self, user: Action, computer: Action) -> Result<RoundResult> {
        if user == computer {
            return Ok(RoundResult {
                user,
                computer,
                verdict: Verdict::Tie,
                explanation: None,
            });
        }

        let (verdict, winner, loser) = if self.defeats_of(user).contains(&computer) {
            (Verdict::Win, user, computer)
        } else {
            (Verdict::Loss, computer, user)
        };

        Ok(RoundResult {
            user,
            computer,
            verdict,
            explanation: Some(self.explanation_of(winner, loser)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameError;
    use crate::rules::tables::{DOMINATION_EDGES, EXPLANATIONS};

    #[test]
    fn test_scissors_cuts_paper() {
        let engine = OutcomeEngine::new().unwrap();
        let result = engine
            .determine_outcome(Action::Scissors, Action::Paper)
            .unwrap();
        assert_eq!(result.verdict, Verdict::Win);
        assert_eq!(result.explanation, Some("Scissors cuts paper"));
        assert_eq!(
            result.winner_and_loser(),
            Some((Action::Scissors, Action::Paper))
        );
    }

    #[test]
    fn test_spock_vaporizes_rock() {
        let engine = OutcomeEngine::new().unwrap();
        let result = engine.determine_outcome(Action::Rock, Action::Spock).unwrap();
        assert_eq!(result.verdict, Verdict::Loss);
        assert_eq!(result.explanation, Some("Spock vaporizes rock"));
        assert_eq!(result.winner_and_loser(), Some((Action::Spock, Action::Rock)));
    }

    #[test]
    fn test_tie_has_no_explanation() {
        let engine = OutcomeEngine::new().unwrap();
        let result = engine
            .determine_outcome(Action::Lizard, Action::Lizard)
            .unwrap();
        assert!(result.is_tie());
        assert_eq!(result.explanation, None);
        assert_eq!(result.winner_and_loser(), None);
    }

    #[test]
    fn test_defeats_of_ordinal() {
        let engine = OutcomeEngine::new().unwrap();
        assert_eq!(
            engine.defeats_of_ordinal(4).unwrap(),
            [Action::Scissors, Action::Rock]
        );
        assert!(matches!(
            engine.defeats_of_ordinal(5),
            Err(GameError::InvalidAction(5))
        ));
    }

    #[test]
    fn test_rejects_incomplete_explanations() {
        let domination = DominationTable::from_edges(&DOMINATION_EDGES).unwrap();
        let explanations = ExplanationTable::from_entries(&EXPLANATIONS[1..]).unwrap();
        assert!(matches!(
            OutcomeEngine::with_tables(domination, explanations),
            Err(GameError::MissingExplanation { .. })
        ));
    }

    #[test]
    fn test_idempotent() {
        let engine = OutcomeEngine::new().unwrap();
        for user in Action::ALL {
            for computer in Action::ALL {
                let a = engine.determine_outcome(user, computer).unwrap();
                let b = engine.determine_outcome(user, computer).unwrap();
                assert_eq!(a, b);
            }
        }
    }
}
