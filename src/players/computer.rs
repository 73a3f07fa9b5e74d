//! Computer opponents.
//!
//! The session only sees the `ComputerPlayer` trait, so tests can swap the
//! random opponent for a scripted one.

use crate::core::{Action, GameError, GameRng, Result};

/// Something that picks the computer's throw each round.
pub trait ComputerPlayer {
    /// Choose an action for the next round.
    fn choose(&mut self) -> Action;
}

/// Uniform random opponent.
///
/// Every action is equally likely each round. The RNG is supplied by the
/// caller.
#[derive(Clone, Debug)]
pub struct RandomComputer {
    rng: GameRng,
}

impl RandomComputer {
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl ComputerPlayer for RandomComputer {
    fn choose(&mut self) -> Action {
        let idx = self.rng.gen_range_usize(0..Action::COUNT);
        Action::ALL[idx]
    }
}

/// Opponent that replays a fixed sequence, cycling when it runs out.
#[derive(Clone, Debug)]
pub struct ScriptedComputer {
    script: Vec<Action>,
    next: usize,
}

impl ScriptedComputer {
    /// Create from a non-empty script.
    ///
    /// An empty script has nothing to throw and is rejected.
    pub fn new(script: Vec<Action>) -> Result<Self> {
        if script.is_empty() {
            return Err(GameError::InconsistentRules(
                "script must contain at least one action".to_string(),
            ));
        }
        Ok(Self { script, next: 0 })
    }

    /// Always throw the same action.
    #[must_use]
    pub fn always(action: Action) -> Self {
        Self {
            script: vec![action],
            next: 0,
        }
    }
}

impl ComputerPlayer for ScriptedComputer {
    fn choose(&mut self) -> Action {
        let action = self.script[self.next % self.script.len()];
        self.next += 1;
        action
    }
}

impl<T: ComputerPlayer + ?Sized> ComputerPlayer for Box<T> {
    fn choose(&mut self) -> Action {
        (**self).choose()
    }
}
