//! The human player and the dealer.
//!
//! Both sides share [`Participant`] (hand access, hitting, clearing). Only the
//! human player implements [`Wagering`].

use core::fmt;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{BetError, DeckError};
use crate::hand::Hand;

/// Something that holds a hand and draws cards into it.
pub trait Participant {
    /// Returns the current hand.
    fn hand(&self) -> &Hand;

    /// Returns the current hand mutably.
    fn hand_mut(&mut self) -> &mut Hand;

    /// Draws one card from `deck` into the hand and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck is exhausted.
    fn hit(&mut self, deck: &mut Deck) -> Result<Card, DeckError> {
        let card = deck.draw()?;
        self.hand_mut().add(card);
        Ok(card)
    }

    /// Replaces the hand with a new empty one.
    fn clear_hand(&mut self) {
        *self.hand_mut() = Hand::new();
    }
}

/// Something that holds a balance and places bets from it.
pub trait Wagering {
    /// Returns the current balance.
    fn balance(&self) -> usize;

    /// Takes `amount` out of the balance and returns the committed bet.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::InsufficientFunds`] if `amount` exceeds the
    /// balance; the balance is left untouched.
    fn place_bet(&mut self, amount: usize) -> Result<usize, BetError>;

    /// Adds `amount` to the balance.
    fn credit(&mut self, amount: usize);
}

/// The human player: a hand plus a balance that lasts the whole session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HumanPlayer {
    hand: Hand,
    balance: usize,
}

impl HumanPlayer {
    /// Creates a player with an empty hand and the given balance.
    #[must_use]
    pub const fn new(balance: usize) -> Self {
        Self {
            hand: Hand::new(),
            balance,
        }
    }

    /// Draws the two opening cards into the hand.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck runs out.
    pub fn draw_two(&mut self, deck: &mut Deck) -> Result<[Card; 2], DeckError> {
        let first = self.hit(deck)?;
        let second = self.hit(deck)?;
        Ok([first, second])
    }
}

impl Participant for HumanPlayer {
    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}

impl Wagering for HumanPlayer {
    fn balance(&self) -> usize {
        self.balance
    }

    fn place_bet(&mut self, amount: usize) -> Result<usize, BetError> {
        if amount > self.balance {
            return Err(BetError::InsufficientFunds);
        }
        self.balance -= amount;
        Ok(amount)
    }

    fn credit(&mut self, amount: usize) {
        self.balance = self.balance.saturating_add(amount);
    }
}

impl fmt::Display for HumanPlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hand: {}", self.hand)
    }
}

/// The dealer: a hand and nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dealer {
    hand: Hand,
}

impl Dealer {
    /// Creates a dealer with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { hand: Hand::new() }
    }
}

impl Participant for Dealer {
    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}

impl fmt::Display for Dealer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dealer Hand: {}", self.hand)
    }
}
