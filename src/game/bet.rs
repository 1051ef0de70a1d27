use tracing::{debug, warn};

use crate::error::BetError;
use crate::hand::BLACKJACK;
use crate::player::{Participant, Wagering};

use super::{Game, GameState};

impl Game {
    /// Places the round's bet, taking it out of the player's balance.
    ///
    /// If the opening cards already total 21 the round is settled as a win
    /// right away.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a bet, or the amount
    /// exceeds the balance. A rejected bet leaves the balance and state
    /// unchanged so the caller can ask again.
    pub fn bet(&mut self, amount: usize) -> Result<(), BetError> {
        if self.state != GameState::PlayerBet {
            warn!(state = ?self.state, "bet placed outside the betting phase");
            return Err(BetError::InvalidState);
        }

        self.current_bet = self.player.place_bet(amount).inspect_err(|_| {
            warn!(amount, balance = self.player.balance(), "bet rejected");
        })?;
        debug!(
            bet = self.current_bet,
            balance = self.player.balance(),
            "bet placed"
        );

        self.state = GameState::PlayerTurn;
        if self.player.hand().total() >= BLACKJACK {
            self.end_player_turn();
        }

        Ok(())
    }
}
