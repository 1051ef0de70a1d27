use tracing::{debug, warn};

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::BLACKJACK;
use crate::player::Participant;
use crate::result::OutcomeReason;

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            warn!(state = ?self.state, "player action outside the player's turn");
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// The turn ends on its own once the total reaches 21 or more.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.player.hit(&mut self.deck)?;
        let total = self.player.hand().total();
        debug!(card = %card, total, "player hits");

        if total >= BLACKJACK {
            self.end_player_turn();
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        debug!(total = self.player.hand().total(), "player stands");
        self.end_player_turn();

        Ok(())
    }

    /// Resolves the end of the player's turn.
    ///
    /// Exactly 21 wins and more than 21 loses without the dealer drawing;
    /// anything else hands the round to the dealer.
    pub(super) fn end_player_turn(&mut self) {
        let total = self.player.hand().total();
        if total == BLACKJACK {
            self.settle(OutcomeReason::TwentyOne);
        } else if total > BLACKJACK {
            self.settle(OutcomeReason::PlayerBust);
        } else {
            debug!(player_total = total, "dealer's turn");
            self.state = GameState::DealerTurn;
        }
    }
}
