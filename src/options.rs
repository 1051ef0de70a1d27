//! Game configuration options.

/// Configuration options for a blackjack session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use hitstand::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_balance(250)
///     .with_minimum_balance(5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Balance the human player starts the session with.
    pub starting_balance: usize,
    /// The session ends once the balance drops below this amount.
    pub minimum_balance: usize,
    /// Jokers added to each round's fresh deck. Jokers score zero.
    pub jokers: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_balance: 100,
            minimum_balance: 1,
            jokers: 0,
        }
    }
}

impl GameOptions {
    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use hitstand::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_balance(500);
    /// assert_eq!(options.starting_balance, 500);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: usize) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the balance below which the player is eliminated.
    ///
    /// # Example
    ///
    /// ```
    /// use hitstand::GameOptions;
    ///
    /// let options = GameOptions::default().with_minimum_balance(10);
    /// assert_eq!(options.minimum_balance, 10);
    /// ```
    #[must_use]
    pub const fn with_minimum_balance(mut self, minimum: usize) -> Self {
        self.minimum_balance = minimum;
        self
    }

    /// Sets the number of jokers shuffled into each round's deck.
    ///
    /// # Example
    ///
    /// ```
    /// use hitstand::GameOptions;
    ///
    /// let options = GameOptions::default().with_jokers(2);
    /// assert_eq!(options.jokers, 2);
    /// ```
    #[must_use]
    pub const fn with_jokers(mut self, jokers: usize) -> Self {
        self.jokers = jokers;
        self
    }
}
