//! Game state types.

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// No round has been dealt yet this session.
    #[default]
    WaitingForRound,
    /// Building the deck and dealing the opening cards.
    Dealing,
    /// Waiting for the player's bet.
    PlayerBet,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer draws until it reaches the player's total.
    DealerTurn,
    /// Round is over and paid out; a new round can be dealt.
    Settled,
}

impl GameState {
    /// Returns whether a new round can be dealt from this state.
    ///
    /// `Dealing` is included so a deal that ran out of cards can be retried.
    #[must_use]
    pub const fn can_deal(self) -> bool {
        matches!(self, Self::WaitingForRound | Self::Dealing | Self::Settled)
    }
}
