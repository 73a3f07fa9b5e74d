//! The five throwable actions.
//!
//! Each action has a stable ordinal (0-4) which is what players type at the
//! prompt, and a display name used everywhere text is rendered.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// One of the five hand shapes a player can throw.
///
/// ## Example
///
/// ```
/// use rpsls::core::Action;
///
/// let spock = Action::from_ordinal(4).unwrap();
/// assert_eq!(spock, Action::Spock);
/// assert_eq!(spock.name(), "Spock");
/// assert!(Action::from_ordinal(5).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Action {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
    Lizard = 3,
    Spock = 4,
}

impl Action {
    /// Number of actions.
    pub const COUNT: usize = 5;

    /// All actions in ordinal order.
    pub const ALL: [Action; Action::COUNT] = [
        Action::Rock,
        Action::Paper,
        Action::Scissors,
        Action::Lizard,
        Action::Spock,
    ];

    /// Build an action from its ordinal.
    ///
    /// Returns `GameError::InvalidAction` for anything outside `0..=4`.
    pub fn from_ordinal(ordinal: u8) -> Result<Self, GameError> {
        Self::ALL
            .get(ordinal as usize)
            .copied()
            .ok_or(GameError::InvalidAction(ordinal))
    }

    /// Stable ordinal of this action.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Index into per-action tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display name ("Rock", "Spock", ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Action::Rock => "Rock",
            Action::Paper => "Paper",
            Action::Scissors => "Scissors",
            Action::Lizard => "Lizard",
            Action::Spock => "Spock",
        }
    }

    /// Menu listing shown in the selection prompt.
    ///
    /// ```
    /// use rpsls::core::Action;
    ///
    /// assert_eq!(
    ///     Action::menu(),
    ///     "Rock[0], Paper[1], Scissors[2], Lizard[3], Spock[4]"
    /// );
    /// ```
    #[must_use]
    pub fn menu() -> String {
        Self::ALL
            .iter()
            .map(|a| format!("{}[{}]", a.name(), a.ordinal()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl TryFrom<u8> for Action {
    type Error = GameError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        Self::from_ordinal(ordinal)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_are_stable() {
        for (i, action) in Action::ALL.iter().enumerate() {
            assert_eq!(action.ordinal() as usize, i);
            assert_eq!(action.index(), i);
            assert_eq!(Action::from_ordinal(i as u8).unwrap(), *action);
        }
    }

    #[test]
    fn test_out_of_range_ordinal() {
        for ordinal in [5u8, 7, 42, 255] {
            match Action::from_ordinal(ordinal) {
                Err(GameError::InvalidAction(o)) => assert_eq!(o, ordinal),
                other => panic!("expected InvalidAction, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_try_from() {
        assert_eq!(Action::try_from(2u8).unwrap(), Action::Scissors);
        assert!(Action::try_from(9u8).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Action::Lizard.to_string(), "Lizard");
        assert_eq!(format!("{}", Action::Spock), "Spock");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Action::Paper).unwrap();
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Action::Paper);
    }
}
