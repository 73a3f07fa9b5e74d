//! The rules of Rock-Paper-Scissors-Lizard-Spock.
//!
//! - `tables`: the fixed domination and explanation tables
//! - `engine`: `OutcomeEngine`, which decides a round from two throws
//!
//! Nothing in here does I/O. The session calls `determine_outcome` once per
//! round and renders whatever comes back.

pub mod engine;
pub mod tables;

pub use engine::{OutcomeEngine, RoundResult, Verdict};
pub use tables::{DominationTable, ExplanationTable, DOMINATION_EDGES, EXPLANATIONS};
