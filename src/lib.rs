//! A simplified single-player blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one round at a time against
//! the dealer: dealing, betting, hitting or standing, the dealer's turn, and
//! settlement. Prompting and printing are left to the caller; the
//! [`input`] module parses the tokens a text front-end collects.
//!
//! # Example
//!
//! ```
//! use hitstand::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.deal().unwrap();
//! game.bet(10).unwrap();
//! if game.state() == GameState::PlayerTurn {
//!     game.stand().unwrap();
//! }
//! if game.state() == GameState::DealerTurn {
//!     game.dealer_play().unwrap();
//! }
//! assert_eq!(game.state(), GameState::Settled);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod input;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{
    ActionError, BetError, CardError, DealError, DeckError, InputError, ShowdownError,
};
pub use game::{Game, GameState};
pub use hand::{BLACKJACK, Hand};
pub use input::{Decision, Replay};
pub use options::GameOptions;
pub use player::{Dealer, HumanPlayer, Participant, Wagering};
pub use result::{Outcome, OutcomeReason, RoundResult};
