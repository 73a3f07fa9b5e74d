//! Turning a line of user input into an action.

use crate::core::{Action, GameError, Result};

/// Parse one selection token.
///
/// Accepts a single integer in `0..=4`, ignoring surrounding whitespace.
/// Anything else yields `GameError::InvalidSelection` carrying the trimmed
/// input, so the caller can re-prompt.
///
/// ```
/// use rpsls::core::Action;
/// use rpsls::players::parse_selection;
///
/// assert_eq!(parse_selection(" 3\n").unwrap(), Action::Lizard);
/// assert!(parse_selection("7").is_err());
/// assert!(parse_selection("rock").is_err());
/// ```
pub fn parse_selection(input: &str) -> Result<Action> {
    let token = input.trim();
    token
        .parse::<u8>()
        .ok()
        .and_then(|n| Action::from_ordinal(n).ok())
        .ok_or_else(|| GameError::InvalidSelection(token.to_string()))
}

/// Text naming the accepted range, e.g. `[0, 4]`.
#[must_use]
pub fn selection_range() -> String {
    format!("[0, {}]", Action::COUNT - 1)
}
