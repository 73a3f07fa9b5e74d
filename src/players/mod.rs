//! Where each round's two actions come from.
//!
//! - `human`: parsing the user's typed selection
//! - `computer`: the `ComputerPlayer` trait and its implementations

pub mod computer;
pub mod human;

pub use computer::{ComputerPlayer, RandomComputer, ScriptedComputer};
pub use human::{parse_selection, selection_range};
