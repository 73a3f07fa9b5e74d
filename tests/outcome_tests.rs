//! Outcome engine tests.
//!
//! These check the rule tables form a balanced tournament and that every
//! round is decided exactly one way.

use proptest::prelude::*;
use rpsls::core::Action;
use rpsls::rules::{DominationTable, ExplanationTable, OutcomeEngine, Verdict, DOMINATION_EDGES};
use std::collections::HashSet;

fn action_strategy() -> impl Strategy<Value = Action> {
    (0u8..5).prop_map(|n| Action::from_ordinal(n).unwrap())
}

// =============================================================================
// Table Invariants
// =============================================================================

#[test]
fn test_every_action_beats_two_and_loses_to_two() {
    let table = DominationTable::standard();
    for action in Action::ALL {
        let defeats = table.defeats_of(action);
        assert_eq!(defeats.len(), 2);
        assert_ne!(defeats[0], defeats[1]);
        assert!(!defeats.contains(&action), "{action} defeats itself");
        assert_eq!(table.in_degree(action), 2, "{action} in-degree");
    }
}

#[test]
fn test_ten_distinct_edges() {
    let table = DominationTable::standard();
    let edges: HashSet<_> = table.edges().collect();
    assert_eq!(edges.len(), 10);

    let canonical: HashSet<_> = DOMINATION_EDGES.iter().copied().collect();
    assert_eq!(edges, canonical);
}

#[test]
fn test_every_pair_has_exactly_one_direction() {
    let table = DominationTable::standard();
    for a in Action::ALL {
        for b in Action::ALL {
            if a == b {
                continue;
            }
            assert!(
                table.beats(a, b) ^ table.beats(b, a),
                "{a} vs {b} must have exactly one winner"
            );
        }
    }
}

#[test]
fn test_explanations_cover_exactly_the_edges() {
    let table = DominationTable::standard();
    let explanations = ExplanationTable::standard();
    assert_eq!(explanations.len(), 10);

    let keys: HashSet<_> = explanations.keys().collect();
    let edges: HashSet<_> = table.edges().collect();
    assert_eq!(keys, edges);
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_scissors_beats_paper() {
    let engine = OutcomeEngine::new().unwrap();
    let result = engine.determine_outcome(Action::Scissors, Action::Paper).unwrap();
    assert_eq!(result.verdict, Verdict::Win);
    assert_eq!(result.explanation, Some("Scissors cuts paper"));
}

#[test]
fn test_rock_loses_to_spock() {
    let engine = OutcomeEngine::new().unwrap();
    let result = engine.determine_outcome(Action::Rock, Action::Spock).unwrap();
    assert_eq!(result.verdict, Verdict::Loss);
    assert_eq!(result.explanation, Some("Spock vaporizes rock"));
}

#[test]
fn test_lizard_ties_lizard() {
    let engine = OutcomeEngine::new().unwrap();
    let result = engine.determine_outcome(Action::Lizard, Action::Lizard).unwrap();
    assert_eq!(result.verdict, Verdict::Tie);
    assert_eq!(result.explanation, None);
}

#[test]
fn test_all_win_and_loss_phrases() {
    let engine = OutcomeEngine::new().unwrap();
    let cases = [
        (Action::Scissors, Action::Paper, "Scissors cuts paper"),
        (Action::Paper, Action::Rock, "Paper covers rock"),
        (Action::Rock, Action::Lizard, "Rock crushes lizard"),
        (Action::Lizard, Action::Spock, "Lizard poisons Spock"),
        (Action::Spock, Action::Scissors, "Spock smashes scissors"),
    ];

    for (winner, loser, phrase) in cases {
        let win = engine.determine_outcome(winner, loser).unwrap();
        assert_eq!(win.verdict, Verdict::Win);
        assert_eq!(win.explanation, Some(phrase));

        let loss = engine.determine_outcome(loser, winner).unwrap();
        assert_eq!(loss.verdict, Verdict::Loss);
        assert_eq!(loss.explanation, Some(phrase));
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_same_action_ties(a in action_strategy()) {
        let engine = OutcomeEngine::new().unwrap();
        let result = engine.determine_outcome(a, a).unwrap();
        prop_assert_eq!(result.verdict, Verdict::Tie);
        prop_assert!(result.explanation.is_none());
    }

    #[test]
    fn prop_distinct_actions_decided_one_way(a in action_strategy(), b in action_strategy()) {
        prop_assume!(a != b);
        let engine = OutcomeEngine::new().unwrap();

        let ab = engine.determine_outcome(a, b).unwrap();
        let ba = engine.determine_outcome(b, a).unwrap();

        prop_assert!(ab.verdict != Verdict::Tie);
        // Swapping seats flips the verdict and keeps the explanation.
        prop_assert_eq!(ab.verdict == Verdict::Win, ba.verdict == Verdict::Loss);
        prop_assert_eq!(ab.explanation, ba.explanation);
    }

    #[test]
    fn prop_explanation_keyed_on_an_edge(a in action_strategy(), b in action_strategy()) {
        let engine = OutcomeEngine::new().unwrap();
        let result = engine.determine_outcome(a, b).unwrap();

        if let Some((winner, loser)) = result.winner_and_loser() {
            prop_assert!(engine.defeats_of(winner).contains(&loser));
            prop_assert_eq!(
                Some(engine.explanation_of(winner, loser).unwrap()),
                result.explanation
            );
        }
    }

    #[test]
    fn prop_ordinal_lookup_rejects_out_of_range(n in 5u8..=255) {
        let engine = OutcomeEngine::new().unwrap();
        prop_assert!(engine.defeats_of_ordinal(n).is_err());
    }
}
