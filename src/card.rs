//! Card types and display helpers.

use alloc::format;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Rank used for the joker.
pub const JOKER: u8 = 0;

/// Rank of the ace.
pub const ACE: u8 = 1;

/// Highest valid rank (king).
pub const KING: u8 = 13;

/// Number of cards in a standard deck, jokers excluded.
pub const DECK_SIZE: usize = 52;

const SHORT_RANKS: [&str; 14] = [
    "JOKER", "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

const LONG_RANKS: [&str; 14] = [
    "Joker", "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack",
    "Queen", "King",
];

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All four suits, in the order a fresh deck is built.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Hearts, Self::Spades, Self::Diamonds];

    /// Returns the glyph printed after the rank, e.g. `♣`.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Clubs => "♣",
            Self::Hearts => "♥",
            Self::Spades => "♠",
            Self::Diamonds => "♦",
        }
    }

    /// Returns the capitalized suit name, e.g. `Clubs`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "Clubs",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
            Self::Diamonds => "Diamonds",
        }
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|suit| suit.name().eq_ignore_ascii_case(s))
            .ok_or(CardError::InvalidSuit)
    }
}

/// A playing card or a joker.
///
/// Cards are immutable once built; the only way to get one is through
/// [`Card::new`] (or [`Card::from_parts`]), which enforces the rank/suit
/// invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: u8,
    suit: Option<Suit>,
}

impl Card {
    /// Creates a new card.
    ///
    /// A joker (rank 0) accepts any suit and stores none.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is above 13, or
    /// [`CardError::InvalidSuit`] if a non-joker rank comes without a suit.
    pub const fn new(rank: u8, suit: Option<Suit>) -> Result<Self, CardError> {
        if rank > KING {
            return Err(CardError::InvalidRank);
        }
        if rank == JOKER {
            return Ok(Self::joker());
        }
        match suit {
            Some(suit) => Ok(Self {
                rank,
                suit: Some(suit),
            }),
            None => Err(CardError::InvalidSuit),
        }
    }

    /// Creates a card from loosely typed parts, such as a raw integer rank
    /// and a suit name like `"spades"`.
    ///
    /// The suit name is ignored for jokers.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is outside `0..=13`, or
    /// [`CardError::InvalidSuit`] if a non-joker suit name is unknown.
    pub fn from_parts(rank: i32, suit: &str) -> Result<Self, CardError> {
        let rank = u8::try_from(rank)
            .ok()
            .filter(|&rank| rank <= KING)
            .ok_or(CardError::InvalidRank)?;
        if rank == JOKER {
            return Ok(Self::joker());
        }
        let suit = suit.parse::<Suit>()?;
        Self::new(rank, Some(suit))
    }

    /// Builds a suited card whose rank is already known to be in `1..=13`.
    pub(crate) const fn from_valid(rank: u8, suit: Suit) -> Self {
        Self {
            rank,
            suit: Some(suit),
        }
    }

    /// Returns a joker.
    #[must_use]
    pub const fn joker() -> Self {
        Self {
            rank: JOKER,
            suit: None,
        }
    }

    /// Returns the rank (0 = joker, 1 = ace, 11..=13 = face cards).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns the suit, or `None` for a joker.
    #[must_use]
    pub const fn suit(&self) -> Option<Suit> {
        self.suit
    }

    /// Returns whether this card is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        self.rank == JOKER
    }

    /// Returns whether this card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == ACE
    }

    /// Returns the long form, e.g. `The Ace of Spades` or `The Joker`.
    #[must_use]
    pub fn long_description(&self) -> String {
        match self.suit {
            Some(suit) if self.rank != JOKER => {
                format!("The {} of {}", LONG_RANKS[self.rank as usize], suit.name())
            }
            _ => String::from("The Joker"),
        }
    }
}

impl fmt::Display for Card {
    /// Short form: rank symbol followed by the suit glyph (`A♣`, `10♠`), or
    /// `JOKER`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suit {
            Some(suit) if self.rank != JOKER => {
                write!(f, "{}{}", SHORT_RANKS[self.rank as usize], suit.symbol())
            }
            _ => f.write_str(SHORT_RANKS[0]),
        }
    }
}
