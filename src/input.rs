//! Parsers for the tokens typed at the table.
//!
//! Each parser checks one answer and reports an [`InputError`] instead of
//! asking again; re-prompting is left to the caller.

use core::str::FromStr;

use crate::error::InputError;

/// Printed once when a session starts.
pub const WELCOME_MESSAGE: &str = "Welcome to blackjack!";

/// Printed when the player can no longer cover a bet.
pub const ELIMINATED_MESSAGE: &str = "Guards take this worthless beggar out of my casino!";

/// Printed when the player declines another round.
pub const GOODBYE_MESSAGE: &str = "Good bye, then!";

/// Parses a balance or bet amount.
///
/// # Errors
///
/// Returns [`InputError::Empty`] for blank input and
/// [`InputError::NotANumber`] for anything that is not a non-negative whole
/// number.
///
/// # Example
///
/// ```
/// use hitstand::input::parse_amount;
///
/// assert_eq!(parse_amount(" 25\n"), Ok(25));
/// assert!(parse_amount("-5").is_err());
/// ```
pub fn parse_amount(input: &str) -> Result<usize, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(InputError::Empty);
    }
    input.parse::<usize>().map_err(|_| InputError::NotANumber)
}

/// A player's choice during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Take another card.
    Hit,
    /// Keep the current total.
    Stand,
}

impl FromStr for Decision {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            Err(InputError::Empty)
        } else if s.eq_ignore_ascii_case("h") || s.eq_ignore_ascii_case("hit") {
            Ok(Self::Hit)
        } else if s.eq_ignore_ascii_case("s") || s.eq_ignore_ascii_case("stand") {
            Ok(Self::Stand)
        } else {
            Err(InputError::UnknownChoice)
        }
    }
}

/// Answer to "play another round?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replay {
    /// Deal another round.
    Again,
    /// End the session.
    Quit,
}

impl FromStr for Replay {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            Err(InputError::Empty)
        } else if s.eq_ignore_ascii_case("y") || s.eq_ignore_ascii_case("yes") {
            Ok(Self::Again)
        } else if s.eq_ignore_ascii_case("n") || s.eq_ignore_ascii_case("no") {
            Ok(Self::Quit)
        } else {
            Err(InputError::UnknownChoice)
        }
    }
}
