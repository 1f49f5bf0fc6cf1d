//! Session and round engine.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::SessionConfig;
use crate::error::ConfigError;
use crate::participant::{Dealer, Player};
use crate::result::Outcome;
use crate::shoe::Shoe;
use crate::stats::SessionStats;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::{Action, RoundPhase, RoundView};

/// A single-player blackjack session.
///
/// The session owns the shoe, the two participants, and the running
/// statistics, and drives each round through the betting, dealing, player
/// turn, dealer turn, and settlement phases. It performs no I/O: the
/// surrounding terminal loop supplies bets and hit/stand decisions and
/// renders the [`RoundView`] snapshots the session hands back.
///
/// Play is strictly sequential and every operation takes `&mut self`; the
/// shoe and statistics have exactly one owner for the life of the session.
/// Shuffles come from a [`ChaCha8Rng`] seeded at construction, so an
/// identical seed replays an identical sequence of shuffles and draws.
///
/// # Example
///
/// ```
/// use twentyone::{Action, RoundPhase, Session, SessionConfig};
///
/// let mut session = Session::new(SessionConfig::default(), 42).unwrap();
/// let view = session.place_bet(1_000).unwrap();
/// if view.phase == RoundPhase::PlayerTurn {
///     session.player_action(Action::Stand).unwrap();
/// }
/// let settlement = session.settle().unwrap();
/// assert_eq!(session.stats().hands_played, 1);
/// # let _ = settlement;
/// ```
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    shoe: Shoe,
    player: Player,
    dealer: Dealer,
    stats: SessionStats,
    phase: RoundPhase,
    outcome: Option<Outcome>,
    rng: ChaCha8Rng,
}

impl Session {
    /// Creates a session with a freshly built and shuffled shoe.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is invalid.
    pub fn new(config: SessionConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut shoe = Shoe::new(config.deck_count)?;
        shoe.shuffle(&mut rng);

        Ok(Self::assemble(config, shoe, rng))
    }

    /// Creates a session around an explicit shoe, order preserved.
    ///
    /// Pairs with [`Shoe::with_cards`] for deterministic round setups: the
    /// shoe is not shuffled, and the seed only drives later rebuilds. The
    /// shoe's deck count must match the configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is invalid or the
    /// shoe was built for a different deck count.
    pub fn with_shoe(config: SessionConfig, shoe: Shoe, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        if shoe.deck_count() != config.deck_count {
            return Err(ConfigError::DeckCount);
        }

        let rng = ChaCha8Rng::seed_from_u64(seed);
        Ok(Self::assemble(config, shoe, rng))
    }

    fn assemble(config: SessionConfig, shoe: Shoe, rng: ChaCha8Rng) -> Self {
        Self {
            player: Player::new(config.starting_chips),
            dealer: Dealer::new(),
            stats: SessionStats::new(),
            phase: RoundPhase::Betting,
            outcome: None,
            config,
            shoe,
            rng,
        }
    }

    /// Returns the session configuration.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the player's current chip count.
    #[must_use]
    pub const fn chips(&self) -> u64 {
        self.player.chips()
    }

    /// Returns the running statistics.
    #[must_use]
    pub const fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Zeroes the running statistics, leaving chips and the shoe untouched.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn shoe_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Returns the current round phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the player participant.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the dealer participant.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Builds a snapshot of the table for rendering.
    #[must_use]
    pub fn view(&self) -> RoundView {
        let player = self.player.hand();
        let dealer = self.dealer.hand();

        RoundView {
            phase: self.phase,
            bet: self.player.bet(),
            player_cards: player.cards().to_vec(),
            player_total: player.total(),
            player_is_soft: player.is_soft(),
            player_is_blackjack: player.is_blackjack(),
            player_is_bust: player.is_bust(),
            dealer_cards: dealer.cards().to_vec(),
            dealer_up_card: dealer.up_card().copied(),
            dealer_total: dealer.total(),
        }
    }

    /// Discards both hands at the end of a round.
    fn clear_hands(&mut self) {
        self.player.hand_mut().clear();
        self.dealer.hand_mut().clear();
    }
}
