use core::cmp::Ordering;

use crate::error::{SettleError, ShoeExhausted};
use crate::result::{Outcome, Settlement};

use super::{RoundPhase, Session};

impl Session {
    /// Runs the dealer's fixed drawing policy to completion and decides the
    /// outcome.
    ///
    /// The dealer draws on 16 or less and stands on any 17, soft 17
    /// included. A dealer bust wins for the player; otherwise the higher
    /// total wins and equal totals push.
    pub(super) fn dealer_turn(&mut self) -> Result<(), ShoeExhausted> {
        self.phase = RoundPhase::DealerTurn;

        while self.dealer.should_draw() {
            let card = self.shoe.draw()?;
            self.dealer.hand_mut().add_card(card);
        }

        let outcome = if self.dealer.hand().is_bust() {
            Outcome::DealerBustWin
        } else {
            match self.player.hand().total().cmp(&self.dealer.hand().total()) {
                Ordering::Greater => Outcome::Win,
                Ordering::Equal => Outcome::Push,
                Ordering::Less => Outcome::Loss,
            }
        };

        self.outcome = Some(outcome);
        self.phase = RoundPhase::Settlement;
        Ok(())
    }

    /// Settles the decided round: credits the payout, updates statistics,
    /// discards both hands, and rebuilds the shoe if it has fallen below
    /// the reshuffle threshold.
    ///
    /// This is the only point at which chips and statistics change and the
    /// only point at which the shoe may be rebuilt, so a hand in progress
    /// never sees a reshuffle.
    ///
    /// # Errors
    ///
    /// Returns [`SettleError::InvalidState`] when no round is awaiting
    /// settlement.
    pub fn settle(&mut self) -> Result<Settlement, SettleError> {
        if self.phase != RoundPhase::Settlement {
            return Err(SettleError::InvalidState);
        }
        let outcome = self.outcome.take().ok_or(SettleError::InvalidState)?;

        let bet = self.player.take_bet();
        let payout = outcome.payout(bet);
        self.player.credit(payout);

        let chip_delta = payout as i64 - bet as i64;
        self.stats.record(outcome, chip_delta);

        self.clear_hands();
        let reshuffled = self
            .shoe
            .maybe_reshuffle(self.config.reshuffle_threshold, &mut self.rng);

        self.phase = RoundPhase::Done;

        Ok(Settlement {
            outcome,
            bet,
            payout,
            chip_delta,
            chips: self.player.chips(),
            stats: self.stats,
            reshuffled,
        })
    }
}
