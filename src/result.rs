//! Round result types for settlement.

use core::fmt;

/// Whether the player won or lost the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins and is paid twice the bet.
    Win,
    /// Player loses the bet taken at placement.
    Lose,
}

/// Why the round ended the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeReason {
    /// Player reached exactly 21; the dealer never played.
    TwentyOne,
    /// Player went over 21; the dealer never played.
    PlayerBust,
    /// Dealer went over 21 while chasing the player's total.
    DealerBust,
    /// Dealer caught up to the player's total without busting.
    DealerHolds,
}

impl OutcomeReason {
    /// Returns the outcome this reason settles to.
    #[must_use]
    pub const fn outcome(self) -> Outcome {
        match self {
            Self::TwentyOne | Self::DealerBust => Outcome::Win,
            Self::PlayerBust | Self::DealerHolds => Outcome::Lose,
        }
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome for the player.
    pub outcome: Outcome,
    /// Why the round ended.
    pub reason: OutcomeReason,
    /// The bet placed this round.
    pub bet: usize,
    /// Amount credited back to the player (2× bet on a win, else 0).
    pub payout: usize,
    /// The player's final total.
    pub player_total: u8,
    /// The dealer's final total.
    pub dealer_total: u8,
    /// The player's balance after settlement.
    pub balance: usize,
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Win => f.write_str("You won that one!")?,
            Outcome::Lose => f.write_str("You lost that one!")?,
        }
        write!(f, "\nYour current balance is {}", self.balance)
    }
}
