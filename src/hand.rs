//! Blackjack hand with a running total.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Highest total that does not bust.
pub const BLACKJACK: u8 = 21;

const fn card_value(rank: u8) -> u8 {
    match rank {
        11..=13 => 10,
        _ => rank,
    }
}

/// A hand of cards scored as it grows.
///
/// The total is updated one card at a time and only a single ace is ever
/// tracked as soft: an ace counts 11 when the total before it is 10 or less,
/// and the soft ace is demoted to 1 the first time the hand would bust.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Running total.
    total: u8,
    /// Whether an ace is currently counted as 11.
    soft: bool,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            total: 0,
            soft: false,
        }
    }

    /// Adds a card to the hand and returns the new total.
    pub fn add(&mut self, card: Card) -> u8 {
        if card.is_ace() {
            if self.total <= 10 {
                self.total += 11;
                self.soft = true;
            } else {
                self.total = self.total.saturating_add(1);
            }
        } else {
            self.total = self.total.saturating_add(card_value(card.rank()));
        }

        if self.total > BLACKJACK && self.soft {
            self.total -= 10;
            self.soft = false;
        }

        self.cards.push(card);
        self.total
    }

    /// Returns the cards in the order they were added.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current total.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.total
    }

    /// Returns whether an ace is currently counted as 11.
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        self.soft
    }

    /// Returns whether the total is over 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Hand {
    /// Renders the hand as `[ A♣, 10♠ ] - Total: 21`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[ ")?;
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, " ] - Total: {}", self.total)
    }
}
