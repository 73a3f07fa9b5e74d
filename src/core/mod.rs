//! Core types: actions, RNG, errors.
//!
//! Everything else in the crate is built on these.

pub mod action;
pub mod error;
pub mod rng;

pub use action::Action;
pub use error::{GameError, Result};
pub use rng::GameRng;
