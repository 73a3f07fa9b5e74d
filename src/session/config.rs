//! Session configuration.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// Session configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Base pause unit in seconds (default: 1.0).
    /// Countdown and reveal pauses are fractions of this; 0 disables them.
    pub delay_secs: f64,

    /// Random seed for the computer and the commentary.
    /// `None` draws a seed from OS entropy.
    pub seed: Option<u64>,

    /// Print ASCII art (title, actions, battle scenes).
    pub show_art: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            delay_secs: 1.0,
            seed: None,
            show_art: true,
        }
    }
}

impl SessionConfig {
    /// Use a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the base pause unit.
    pub fn with_delay(mut self, secs: f64) -> Self {
        self.delay_secs = secs.max(0.0);
        self
    }

    /// Turn ASCII art on or off.
    pub fn with_art(mut self, show_art: bool) -> Self {
        self.show_art = show_art;
        self
    }

    /// Root RNG for the session.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}
