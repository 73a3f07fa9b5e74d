//! # rpsls
//!
//! Rock-Paper-Scissors-Lizard-Spock against a computer opponent, in the
//! terminal.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: `OutcomeEngine` is a function of two actions. It does
//!    no I/O and keeps no state.
//!
//! 2. **Validated Once**: The domination and explanation tables are checked
//!    for consistency when the engine is built, never per round.
//!
//! 3. **Injected Effects**: Randomness, pauses, and terminal I/O are all
//!    passed in, so a whole session can be replayed deterministically.
//!
//! ## Modules
//!
//! - `core`: Actions, RNG, errors
//! - `rules`: Rule tables and the outcome engine
//! - `players`: User input parsing and computer opponents
//! - `display`: ASCII art, commentary, pacing, rendering
//! - `session`: Configuration, scoring, and the game loop

pub mod core;
pub mod display;
pub mod players;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Action, GameError, GameRng};

pub use crate::rules::{DominationTable, ExplanationTable, OutcomeEngine, RoundResult, Verdict};

pub use crate::players::{parse_selection, ComputerPlayer, RandomComputer, ScriptedComputer};

pub use crate::display::{NoDelay, Pacer, QuoteBook, RecordingPacer, Renderer, SleepPacer};

pub use crate::session::{ScoreTally, Session, SessionConfig};
