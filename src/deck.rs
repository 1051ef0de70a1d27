//! Ordered card collections that are shuffled and drawn from the front.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{ACE, Card, DECK_SIZE, KING, Suit};
use crate::error::DeckError;

/// A deck of cards.
///
/// Cards leave the deck by value through [`Deck::draw`]; nothing is shared
/// between a deck and the hands it deals into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates a standard 52-card deck followed by `jokers` jokers.
    ///
    /// Cards are ordered suit by suit (clubs, hearts, spades, diamonds), ace
    /// to king within each suit.
    #[must_use]
    pub fn new(jokers: usize) -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE + jokers);

        for suit in Suit::ALL {
            for rank in ACE..=KING {
                cards.push_back(Card::from_valid(rank, suit));
            }
        }
        cards.extend(core::iter::repeat_n(Card::joker(), jokers));

        Self { cards }
    }

    /// Creates a deck with no cards.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Creates a deck that will deal `cards` in the given order.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Shuffles the deck into a uniformly random order (Fisher-Yates).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Removes and returns the front card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck holds no cards.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::Empty)
    }

    /// Returns the cards in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Deck {
    /// Renders the cards in draw order as `[A♣, 2♣, 3♣]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}
