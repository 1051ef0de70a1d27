//! Round controller and session state.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::deck::Deck;
use crate::error::DealError;
use crate::options::GameOptions;
use crate::player::{Dealer, HumanPlayer, Participant, Wagering};
use crate::result::RoundResult;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::GameState;

/// A single-player blackjack table.
///
/// The game owns the deck and both hands for the length of a round and walks
/// through the phases in [`GameState`] order: [`Game::deal`], [`Game::bet`],
/// [`Game::hit`] / [`Game::stand`], then [`Game::dealer_play`] when the
/// player's turn did not already decide the round. The human player's balance
/// carries over from round to round.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current round phase.
    state: GameState,
    /// Cards left this round.
    deck: Deck,
    /// The human player.
    player: HumanPlayer,
    /// The dealer.
    dealer: Dealer,
    /// Bet placed this round.
    current_bet: usize,
    /// Result of the last settled round.
    result: Option<RoundResult>,
    /// Random number generator for shuffling.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new session with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use hitstand::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.balance(), 100);
    /// assert_eq!(game.state(), GameState::WaitingForRound);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let player = HumanPlayer::new(options.starting_balance);
        debug!(balance = player.balance(), "human player initialized");
        debug!("dealer initialized");

        Self {
            options,
            state: GameState::WaitingForRound,
            deck: Deck::empty(),
            player,
            dealer: Dealer::new(),
            current_bet: 0,
            result: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Starts a round with a fresh shuffled deck.
    ///
    /// The dealer takes one face-up card and the player two.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is still in progress.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if !self.state.can_deal() {
            warn!(state = ?self.state, "deal requested mid-round");
            return Err(DealError::InvalidState);
        }

        let mut deck = Deck::new(self.options.jokers);
        deck.shuffle(&mut self.rng);
        self.deal_from(deck)
    }

    /// Starts a round from a prepared deck, dealt in its current order.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is still in progress or the deck holds
    /// fewer than three cards.
    pub fn deal_from(&mut self, deck: Deck) -> Result<(), DealError> {
        if !self.state.can_deal() {
            warn!(state = ?self.state, "deal requested mid-round");
            return Err(DealError::InvalidState);
        }

        self.state = GameState::Dealing;
        self.deck = deck;
        self.current_bet = 0;
        self.result = None;
        self.dealer.clear_hand();
        self.player.clear_hand();

        let up_card = self.dealer.hit(&mut self.deck)?;
        let [first, second] = self.player.draw_two(&mut self.deck)?;
        debug!(
            dealer = %up_card,
            player_first = %first,
            player_second = %second,
            player_total = self.player.hand().total(),
            "opening cards dealt"
        );

        self.state = GameState::PlayerBet;
        Ok(())
    }

    /// Returns the current round phase.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the human player.
    #[must_use]
    pub const fn player(&self) -> &HumanPlayer {
        &self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the player's balance.
    #[must_use]
    pub fn balance(&self) -> usize {
        self.player.balance()
    }

    /// Returns the bet placed this round (0 before betting).
    #[must_use]
    pub const fn current_bet(&self) -> usize {
        self.current_bet
    }

    /// Returns the result of the settled round.
    ///
    /// Returns `None` until the current round reaches [`GameState::Settled`].
    #[must_use]
    pub const fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    /// Returns the number of cards left in this round's deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns whether the player's balance has dropped below the table
    /// minimum, ending the session.
    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.player.balance() < self.options.minimum_balance
    }
}
