//! Error types for card construction and game operations.

use thiserror::Error;

/// Errors that can occur when constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank outside `0..=13`.
    #[error("rank must be between 0 and 13")]
    InvalidRank,
    /// Missing or unknown suit for a non-joker rank.
    #[error("suit must be one of clubs, hearts, spades or diamonds")]
    InvalidSuit,
}

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck holds no cards.
    #[error("drawing from empty deck")]
    Empty,
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet exceeds the current balance.
    #[error("not enough funds")]
    InsufficientFunds,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the deck for the opening deal.
    #[error("not enough cards in the deck")]
    NoCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors that can occur during the dealer's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for the dealer's turn.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors reported back to the input collaborator for re-prompting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// Nothing was entered.
    #[error("no input given")]
    Empty,
    /// The input is not a non-negative whole number.
    #[error("expected a whole number")]
    NotANumber,
    /// The input is not one of the offered choices.
    #[error("unknown choice")]
    UnknownChoice,
}

impl From<DeckError> for DealError {
    fn from(_: DeckError) -> Self {
        Self::NoCards
    }
}

impl From<DeckError> for ActionError {
    fn from(_: DeckError) -> Self {
        Self::NoCards
    }
}

impl From<DeckError> for ShowdownError {
    fn from(_: DeckError) -> Self {
        Self::NoCards
    }
}
