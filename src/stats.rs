//! Running session statistics.

use crate::result::Outcome;

/// Aggregate results across the settled rounds of one session.
///
/// Counters only move forward, once per settled round; `net` is the signed
/// cumulative chip delta and is the only field that can decrease.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Rounds settled.
    pub hands_played: u32,
    /// Rounds won, blackjacks and dealer busts included.
    pub wins: u32,
    /// Rounds lost, player busts included.
    pub losses: u32,
    /// Rounds pushed.
    pub pushes: u32,
    /// Cumulative chip delta across settled rounds.
    pub net: i64,
}

impl SessionStats {
    /// Creates zeroed statistics.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hands_played: 0,
            wins: 0,
            losses: 0,
            pushes: 0,
            net: 0,
        }
    }

    /// Records one settled round.
    pub(crate) const fn record(&mut self, outcome: Outcome, chip_delta: i64) {
        self.hands_played += 1;
        match outcome {
            Outcome::BlackjackWin | Outcome::Win | Outcome::DealerBustWin => self.wins += 1,
            Outcome::Push => self.pushes += 1,
            Outcome::Loss | Outcome::BustLoss => self.losses += 1,
        }
        self.net += chip_delta;
    }

    /// Resets all counters to zero.
    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }
}
