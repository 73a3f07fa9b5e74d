//! A game session: configuration, scoring, and the interactive loop.

pub mod config;
pub mod game;
pub mod score;

pub use config::SessionConfig;
pub use game::Session;
pub use score::ScoreTally;
