//! Error types for the game.

use thiserror::Error;

use super::action::Action;

/// Result type alias using [`GameError`].
pub type Result<T> = std::result::Result<T, GameError>;

/// Every failure the game can report.
///
/// Only `InvalidSelection` is expected during normal play; the session
/// recovers from it by re-prompting. The rule-table variants indicate a
/// broken build and are fatal.
#[derive(Debug, Error)]
pub enum GameError {
    /// An action was built from an ordinal outside `0..=4`.
    #[error("Invalid action ordinal: {0}")]
    InvalidAction(u8),

    /// No explanation exists for a (winner, loser) pair.
    #[error("No explanation for {winner} beating {loser}")]
    MissingExplanation {
        /// Winning action.
        winner: Action,
        /// Losing action.
        loser: Action,
    },

    /// The rule tables do not form a balanced tournament.
    #[error("Inconsistent rule tables: {0}")]
    InconsistentRules(String),

    /// The player typed something that is not an action ordinal.
    #[error("Invalid selection '{0}'")]
    InvalidSelection(String),

    /// Terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            GameError::InvalidAction(7).to_string(),
            "Invalid action ordinal: 7"
        );
        let missing = GameError::MissingExplanation {
            winner: Action::Rock,
            loser: Action::Paper,
        };
        assert_eq!(missing.to_string(), "No explanation for Rock beating Paper");
        assert_eq!(
            GameError::InvalidSelection("x".into()).to_string(),
            "Invalid selection 'x'"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: GameError = io.into();
        assert!(matches!(err, GameError::Io(_)));
    }
}
