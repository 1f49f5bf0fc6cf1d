//! Player and dealer participants.
//!
//! Both sides of the table own a [`Hand`] and receive cards; the player
//! additionally owns chips and the active bet, while the dealer carries a
//! fixed drawing policy. Composition over inheritance: two small structs,
//! no shared base.

use crate::error::BetError;
use crate::hand::Hand;

/// Total at or above which the dealer stands. The rule is fixed: the dealer
/// stands on every 17, soft 17 included.
const DEALER_STAND_TOTAL: u8 = 17;

/// The betting participant.
///
/// Chips and bets are integer amounts in the smallest currency unit
/// (cents), so payouts never accumulate floating-point drift. The type
/// keeps two invariants: chips never go negative (unsigned, and a bet is
/// debited only after validation), and `bet` is zero whenever no round is
/// active.
#[derive(Debug, Clone)]
pub struct Player {
    hand: Hand,
    chips: u64,
    bet: u64,
}

impl Player {
    /// Creates a player with a starting chip stack.
    #[must_use]
    pub const fn new(chips: u64) -> Self {
        Self {
            hand: Hand::new(),
            chips,
            bet: 0,
        }
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Returns the current chip count.
    #[must_use]
    pub const fn chips(&self) -> u64 {
        self.chips
    }

    /// Returns the active bet, or zero when no round is in progress.
    #[must_use]
    pub const fn bet(&self) -> u64 {
        self.bet
    }

    /// Validates a bet against the table limits and debits it from chips.
    ///
    /// # Errors
    ///
    /// Returns a [`BetError`] for a zero bet, a bet outside the table
    /// limits, or a bet exceeding the player's chips. On error nothing is
    /// debited.
    pub(crate) fn place_bet(
        &mut self,
        amount: u64,
        min_bet: u64,
        max_bet: Option<u64>,
    ) -> Result<(), BetError> {
        if amount == 0 {
            return Err(BetError::Zero);
        }
        if amount < min_bet {
            return Err(BetError::BelowMinimum);
        }
        if max_bet.is_some_and(|max| amount > max) {
            return Err(BetError::AboveMaximum);
        }
        if amount > self.chips {
            return Err(BetError::ExceedsChips);
        }

        self.chips -= amount;
        self.bet = amount;
        Ok(())
    }

    /// Credits a payout to the chip stack.
    pub(crate) const fn credit(&mut self, amount: u64) {
        self.chips += amount;
    }

    /// Clears the bet and returns its amount.
    pub(crate) const fn take_bet(&mut self) -> u64 {
        let bet = self.bet;
        self.bet = 0;
        bet
    }
}

/// The house participant.
///
/// Owns a hand and the fixed drawing policy; holds no chips.
#[derive(Debug, Clone, Default)]
pub struct Dealer {
    hand: Hand,
}

impl Dealer {
    /// Creates a dealer with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { hand: Hand::new() }
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Returns whether the drawing policy calls for another card.
    ///
    /// Draw on 16 or less; stand on any 17 or more, soft or hard.
    #[must_use]
    pub fn should_draw(&self) -> bool {
        self.hand.total() < DEALER_STAND_TOTAL
    }
}
