//! Round outcome and settlement types.

use crate::stats::SessionStats;

/// How a settled round resolved for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Natural two-card 21 against a dealer non-blackjack; pays 3:2.
    BlackjackWin,
    /// Higher total than a standing dealer; pays 1:1.
    Win,
    /// Dealer drew past 21; pays 1:1.
    DealerBustWin,
    /// Equal totals; the bet is returned.
    Push,
    /// Lower total than a standing dealer.
    Loss,
    /// Player drew past 21. The dealer never acts on these rounds.
    BustLoss,
}

impl Outcome {
    /// Returns the chips credited back for a debited bet of `bet`.
    ///
    /// Integer cent arithmetic throughout; the only fractional quantity, the
    /// 3:2 blackjack bonus, is floored to the cent.
    #[must_use]
    pub const fn payout(self, bet: u64) -> u64 {
        match self {
            Self::BlackjackWin => bet + (bet * 3) / 2,
            Self::Win | Self::DealerBustWin => bet * 2,
            Self::Push => bet,
            Self::Loss | Self::BustLoss => 0,
        }
    }
}

/// The accounting record returned by settling a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// How the round resolved.
    pub outcome: Outcome,
    /// The bet that was debited when the round began.
    pub bet: u64,
    /// Chips credited back at settlement.
    pub payout: u64,
    /// Net chip movement for the round (`payout - bet`).
    pub chip_delta: i64,
    /// The player's chip count after settlement.
    pub chips: u64,
    /// Statistics including this round.
    pub stats: SessionStats,
    /// Whether the shoe was rebuilt and reshuffled after this round.
    pub reshuffled: bool,
}
