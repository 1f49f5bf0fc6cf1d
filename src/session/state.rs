//! Round state types.

use crate::card::Card;

/// Phase of the round state machine.
///
/// `Dealing`, `NaturalCheck`, and `DealerTurn` are written as the engine
/// steps through them inside a single operation; the phases a caller
/// observes between calls are `Betting`, `PlayerTurn`, `Settlement`, and
/// `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Accepting a bet for the next round.
    Betting,
    /// Dealing the initial two cards to each side.
    Dealing,
    /// Resolving a player natural before any turns are taken.
    NaturalCheck,
    /// Waiting for a hit or stand decision.
    PlayerTurn,
    /// The dealer plays out the fixed drawing policy.
    DealerTurn,
    /// Outcome decided; awaiting settlement.
    Settlement,
    /// Round settled; a new round may begin.
    Done,
}

/// A player decision during their turn.
///
/// Split, double-down, surrender, and insurance are not part of this
/// engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Draw one card.
    Hit,
    /// End the turn and hand play to the dealer.
    Stand,
}

/// A snapshot of the table mid-round.
///
/// Both hands are reported in full; hiding the dealer's hole card is the
/// renderer's job, using [`dealer_up_card`](Self::dealer_up_card).
#[derive(Debug, Clone)]
pub struct RoundView {
    /// Current phase.
    pub phase: RoundPhase,
    /// The active bet, zero when no round is in progress.
    pub bet: u64,
    /// Cards in the player's hand.
    pub player_cards: Vec<Card>,
    /// Player total under ace demotion.
    pub player_total: u8,
    /// Whether the player's hand counts an ace as 11.
    pub player_is_soft: bool,
    /// Whether the player holds a natural two-card 21.
    pub player_is_blackjack: bool,
    /// Whether the player is over 21.
    pub player_is_bust: bool,
    /// All cards in the dealer's hand, hole card included.
    pub dealer_cards: Vec<Card>,
    /// The dealer's first (face-up) card.
    pub dealer_up_card: Option<Card>,
    /// Dealer total under ace demotion.
    pub dealer_total: u8,
}
