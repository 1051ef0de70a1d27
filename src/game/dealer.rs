use alloc::vec::Vec;

use tracing::{debug, info, warn};

use crate::card::Card;
use crate::error::ShowdownError;
use crate::hand::BLACKJACK;
use crate::player::{Participant, Wagering};
use crate::result::{Outcome, OutcomeReason, RoundResult};

use super::{Game, GameState};

impl Game {
    /// Dealer plays their hand and the round is settled.
    ///
    /// The dealer draws while their total is below the player's. Landing on
    /// 21 or less beats the player; going over pays the player.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck is
    /// empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            warn!(state = ?self.state, "dealer asked to play out of turn");
            return Err(ShowdownError::InvalidState);
        }

        let target = self.player.hand().total();
        let mut drawn_cards = Vec::new();

        while self.dealer.hand().total() < target {
            let card = self.dealer.hit(&mut self.deck)?;
            debug!(card = %card, total = self.dealer.hand().total(), "dealer hits");
            drawn_cards.push(card);
        }

        if self.dealer.hand().total() <= BLACKJACK {
            self.settle(OutcomeReason::DealerHolds);
        } else {
            self.settle(OutcomeReason::DealerBust);
        }

        Ok(drawn_cards)
    }

    /// Pays out the round and records its result.
    ///
    /// The bet was taken from the balance when it was placed, so a loss
    /// changes nothing and a win credits twice the bet.
    pub(super) fn settle(&mut self, reason: OutcomeReason) {
        let outcome = reason.outcome();
        let payout = match outcome {
            Outcome::Win => self.current_bet.saturating_mul(2),
            Outcome::Lose => 0,
        };
        self.player.credit(payout);

        let result = RoundResult {
            outcome,
            reason,
            bet: self.current_bet,
            payout,
            player_total: self.player.hand().total(),
            dealer_total: self.dealer.hand().total(),
            balance: self.player.balance(),
        };
        info!(
            ?outcome,
            ?reason,
            bet = result.bet,
            payout,
            player_total = result.player_total,
            dealer_total = result.dealer_total,
            balance = result.balance,
            "round settled"
        );

        self.result = Some(result);
        self.state = GameState::Settled;
    }
}
