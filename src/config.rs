//! Session configuration.

use crate::error::ConfigError;

/// Configuration for a blackjack session.
///
/// All chip amounts are integers in the smallest currency unit (cents).
/// Use the builder pattern to customize:
///
/// ```
/// use twentyone::SessionConfig;
///
/// let config = SessionConfig::default()
///     .with_deck_count(1)
///     .with_reshuffle_threshold(20)
///     .with_starting_chips(50_000)
///     .with_min_bet(500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Number of 52-card decks combined into the shoe.
    pub deck_count: u32,
    /// Remaining-card count below which the shoe is rebuilt between rounds.
    pub reshuffle_threshold: usize,
    /// The player's starting chip stack, in cents.
    pub starting_chips: u64,
    /// Smallest accepted bet, in cents.
    pub min_bet: u64,
    /// Largest accepted bet, in cents. `None` means no table maximum.
    pub max_bet: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            deck_count: 6,
            reshuffle_threshold: 15,
            starting_chips: 100_000,
            min_bet: 1_000,
            max_bet: None,
        }
    }
}

impl SessionConfig {
    /// Sets the number of decks in the shoe.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::SessionConfig;
    ///
    /// let config = SessionConfig::default().with_deck_count(8);
    /// assert_eq!(config.deck_count, 8);
    /// ```
    #[must_use]
    pub const fn with_deck_count(mut self, deck_count: u32) -> Self {
        self.deck_count = deck_count;
        self
    }

    /// Sets the reshuffle threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::SessionConfig;
    ///
    /// let config = SessionConfig::default().with_reshuffle_threshold(26);
    /// assert_eq!(config.reshuffle_threshold, 26);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, threshold: usize) -> Self {
        self.reshuffle_threshold = threshold;
        self
    }

    /// Sets the player's starting chips.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::SessionConfig;
    ///
    /// let config = SessionConfig::default().with_starting_chips(25_000);
    /// assert_eq!(config.starting_chips, 25_000);
    /// ```
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: u64) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the table minimum bet.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::SessionConfig;
    ///
    /// let config = SessionConfig::default().with_min_bet(100);
    /// assert_eq!(config.min_bet, 100);
    /// ```
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: u64) -> Self {
        self.min_bet = min_bet;
        self
    }

    /// Sets the table maximum bet.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::SessionConfig;
    ///
    /// let config = SessionConfig::default().with_max_bet(50_000);
    /// assert_eq!(config.max_bet, Some(50_000));
    /// ```
    #[must_use]
    pub const fn with_max_bet(mut self, max_bet: u64) -> Self {
        self.max_bet = Some(max_bet);
        self
    }

    /// Checks the configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the deck count, reshuffle threshold, or
    /// bet limits are invalid.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.deck_count == 0 {
            return Err(ConfigError::DeckCount);
        }
        if self.reshuffle_threshold == 0 {
            return Err(ConfigError::Threshold);
        }
        if self.min_bet == 0 {
            return Err(ConfigError::MinBet);
        }
        if let Some(max) = self.max_bet {
            if max < self.min_bet {
                return Err(ConfigError::MaxBetBelowMin);
            }
        }
        Ok(())
    }
}
