//! The two static rule tables.
//!
//! ## DominationTable
//!
//! Maps each action to the two actions it defeats. Read as a directed graph
//! it is a tournament on five nodes: every pair of distinct actions has
//! exactly one edge between them, and every node has two outgoing and two
//! incoming edges.
//!
//! ## ExplanationTable
//!
//! One phrase per domination edge, keyed on (winner, loser).
//!
//! Both tables are built once and never mutated. `validate` checks the
//! invariants above so a broken table is caught before the first round.

use rustc_hash::FxHashMap;

use crate::core::{Action, GameError, Result};

/// Canonical domination edges as (winner, loser).
pub const DOMINATION_EDGES: [(Action, Action); 10] = [
    (Action::Scissors, Action::Lizard),
    (Action::Scissors, Action::Paper),
    (Action::Paper, Action::Spock),
    (Action::Paper, Action::Rock),
    (Action::Rock, Action::Lizard),
    (Action::Rock, Action::Scissors),
    (Action::Lizard, Action::Spock),
    (Action::Lizard, Action::Paper),
    (Action::Spock, Action::Scissors),
    (Action::Spock, Action::Rock),
];

/// Canonical explanations as (winner, loser, phrase).
pub const EXPLANATIONS: [(Action, Action, &str); 10] = [
    (Action::Scissors, Action::Paper, "Scissors cuts paper"),
    (Action::Paper, Action::Rock, "Paper covers rock"),
    (Action::Rock, Action::Lizard, "Rock crushes lizard"),
    (Action::Lizard, Action::Spock, "Lizard poisons Spock"),
    (Action::Spock, Action::Scissors, "Spock smashes scissors"),
    (Action::Scissors, Action::Lizard, "Scissors decapitates lizard"),
    (Action::Lizard, Action::Paper, "Lizard eats paper"),
    (Action::Paper, Action::Spock, "Paper disproves Spock"),
    (Action::Spock, Action::Rock, "Spock vaporizes rock"),
    (Action::Rock, Action::Scissors, "Rock crushes scissors"),
];

/// Each action's two defeated actions, indexed by ordinal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DominationTable {
    defeats: [[Action; 2]; Action::COUNT],
}

impl DominationTable {
    /// The canonical Rock-Paper-Scissors-Lizard-Spock table.
    ///
    /// Built from [`DOMINATION_EDGES`], keeping each winner's losers in the
    /// order they are listed there.
    #[must_use]
    pub fn standard() -> Self {
        let mut defeats = [[Action::Rock; 2]; Action::COUNT];
        let mut filled = [0usize; Action::COUNT];
        for (winner, loser) in DOMINATION_EDGES {
            defeats[winner.index()][filled[winner.index()]] = loser;
            filled[winner.index()] += 1;
        }
        Self { defeats }
    }

    /// Build a table from (winner, loser) edges.
    ///
    /// Fails unless every action appears as a winner exactly twice. The
    /// remaining tournament invariants are checked by [`validate`](Self::validate).
    pub fn from_edges(edges: &[(Action, Action)]) -> Result<Self> {
        let mut defeats: [Vec<Action>; Action::COUNT] = Default::default();
        for &(winner, loser) in edges {
            defeats[winner.index()].push(loser);
        }

        let mut table = Self {
            defeats: [[Action::Rock; 2]; Action::COUNT],
        };
        for action in Action::ALL {
            match defeats[action.index()].as_slice() {
                &[a, b] => table.defeats[action.index()] = [a, b],
                other => {
                    return Err(GameError::InconsistentRules(format!(
                        "{} defeats {} actions, expected 2",
                        action,
                        other.len()
                    )))
                }
            }
        }
        Ok(table)
    }

    /// The two actions `action` defeats.
    #[must_use]
    pub fn defeats_of(&self, action: Action) -> [Action; 2] {
        self.defeats[action.index()]
    }

    /// Does `winner` defeat `loser`?
    #[must_use]
    pub fn beats(&self, winner: Action, loser: Action) -> bool {
        self.defeats[winner.index()].contains(&loser)
    }

    /// Iterate over every (winner, loser) edge.
    pub fn edges(&self) -> impl Iterator<Item = (Action, Action)> + '_ {
        Action::ALL
            .into_iter()
            .flat_map(move |w| self.defeats[w.index()].into_iter().map(move |l| (w, l)))
    }

    /// Number of actions that defeat `action`.
    #[must_use]
    pub fn in_degree(&self, action: Action) -> usize {
        self.edges().filter(|&(_, l)| l == action).count()
    }

    /// Check the tournament invariants.
    pub fn validate(&self) -> Result<()> {
        for (winner, loser) in self.edges() {
            if winner == loser {
                return Err(GameError::InconsistentRules(format!(
                    "{} defeats itself",
                    winner
                )));
            }
            if self.beats(loser, winner) {
                return Err(GameError::InconsistentRules(format!(
                    "{} and {} defeat each other",
                    winner, loser
                )));
            }
        }

        for action in Action::ALL {
            let [first, second] = self.defeats_of(action);
            if first == second {
                return Err(GameError::InconsistentRules(format!(
                    "{} lists {} twice",
                    action, first
                )));
            }
            let in_degree = self.in_degree(action);
            if in_degree != 2 {
                return Err(GameError::InconsistentRules(format!(
                    "{} is defeated by {} actions, expected 2",
                    action, in_degree
                )));
            }
        }

        Ok(())
    }
}

/// Phrase for each (winner, loser) edge.
#[derive(Clone, Debug)]
pub struct ExplanationTable {
    entries: FxHashMap<(Action, Action), &'static str>,
}

impl ExplanationTable {
    /// The canonical explanations.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            entries: EXPLANATIONS.iter().map(|&(w, l, text)| ((w, l), text)).collect(),
        }
    }

    /// Build a table from (winner, loser, phrase) entries.
    ///
    /// Fails on a duplicated key.
    pub fn from_entries(entries: &[(Action, Action, &'static str)]) -> Result<Self> {
        let mut map = FxHashMap::default();
        for &(winner, loser, text) in entries {
            if map.insert((winner, loser), text).is_some() {
                return Err(GameError::InconsistentRules(format!(
                    "duplicate explanation for {} over {}",
                    winner, loser
                )));
            }
        }
        Ok(Self { entries: map })
    }

    /// Phrase explaining why `winner` beats `loser`.
    pub fn get(&self, winner: Action, loser: Action) -> Result<&'static str> {
        self.entries
            .get(&(winner, loser))
            .copied()
            .ok_or(GameError::MissingExplanation { winner, loser })
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the table empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all keys.
    pub fn keys(&self) -> impl Iterator<Item = (Action, Action)> + '_ {
        self.entries.keys().copied()
    }

    /// Require exactly one entry per domination edge and nothing else.
    pub fn validate_against(&self, domination: &DominationTable) -> Result<()> {
        for (winner, loser) in domination.edges() {
            self.get(winner, loser)?;
        }
        for (winner, loser) in self.keys() {
            if !domination.beats(winner, loser) {
                return Err(GameError::InconsistentRules(format!(
                    "explanation for {} over {} has no matching rule",
                    winner, loser
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_matches_edge_list() {
        let table = DominationTable::standard();
        let from_edges = DominationTable::from_edges(&DOMINATION_EDGES).unwrap();
        assert_eq!(table, from_edges);
    }

    #[test]
    fn test_standard_defeats_follow_edge_order() {
        let table = DominationTable::standard();
        assert_eq!(table.defeats_of(Action::Rock), [Action::Lizard, Action::Scissors]);
        assert_eq!(table.defeats_of(Action::Paper), [Action::Spock, Action::Rock]);
        assert_eq!(table.defeats_of(Action::Spock), [Action::Scissors, Action::Rock]);
    }

    #[test]
    fn test_standard_tables_validate() {
        let domination = DominationTable::standard();
        domination.validate().unwrap();
        ExplanationTable::standard()
            .validate_against(&domination)
            .unwrap();
    }

    #[test]
    fn test_edge_count() {
        let table = DominationTable::standard();
        assert_eq!(table.edges().count(), 10);
        assert_eq!(ExplanationTable::standard().len(), 10);
    }

    #[test]
    fn test_from_edges_rejects_wrong_out_degree() {
        let edges = &DOMINATION_EDGES[1..];
        assert!(matches!(
            DominationTable::from_edges(edges),
            Err(GameError::InconsistentRules(_))
        ));
    }

    #[test]
    fn test_validate_rejects_mutual_defeat() {
        // Rock and Paper beat each other; Scissors loses the Paper edge.
        let mut edges = DOMINATION_EDGES.to_vec();
        let i = edges
            .iter()
            .position(|&e| e == (Action::Rock, Action::Lizard))
            .unwrap();
        edges[i] = (Action::Rock, Action::Paper);
        let table = DominationTable::from_edges(&edges).unwrap();
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_self_defeat() {
        let mut edges = DOMINATION_EDGES.to_vec();
        let i = edges
            .iter()
            .position(|&e| e == (Action::Spock, Action::Rock))
            .unwrap();
        edges[i] = (Action::Spock, Action::Spock);
        let table = DominationTable::from_edges(&edges).unwrap();
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_missing_explanation_detected() {
        let partial = ExplanationTable::from_entries(&EXPLANATIONS[..9]).unwrap();
        let err = partial
            .validate_against(&DominationTable::standard())
            .unwrap_err();
        assert!(matches!(
            err,
            GameError::MissingExplanation {
                winner: Action::Rock,
                loser: Action::Scissors
            }
        ));
    }

    #[test]
    fn test_extra_explanation_detected() {
        let mut entries = EXPLANATIONS.to_vec();
        entries.push((Action::Rock, Action::Paper, "Rock somehow beats paper"));
        let table = ExplanationTable::from_entries(&entries).unwrap();
        assert!(table
            .validate_against(&DominationTable::standard())
            .is_err());
    }

    #[test]
    fn test_duplicate_explanation_rejected() {
        let mut entries = EXPLANATIONS.to_vec();
        entries.push(EXPLANATIONS[0]);
        assert!(ExplanationTable::from_entries(&entries).is_err());
    }
}
