//! Error types for session operations.

use thiserror::Error;

/// Errors that reject a session configuration.
///
/// Fatal at construction: a session is never created from an invalid
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Deck count must be at least one.
    #[error("deck count must be at least 1")]
    DeckCount,
    /// Reshuffle threshold must be at least one card.
    #[error("reshuffle threshold must be at least 1")]
    Threshold,
    /// Minimum bet must be at least one chip.
    #[error("minimum bet must be at least 1")]
    MinBet,
    /// Maximum bet, when set, must not be below the minimum bet.
    #[error("maximum bet is below the minimum bet")]
    MaxBetBelowMin,
}

/// Draw attempted on an empty shoe.
///
/// The reshuffle discipline keeps this from happening between rounds, so an
/// occurrence indicates a policy defect rather than a normal user-facing
/// condition. It is still a defined failure, never a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the shoe")]
pub struct ShoeExhausted;

/// Errors that reject a bet.
///
/// All variants are recoverable: the round stays in the betting phase, no
/// chips are debited, and the caller may retry with a corrected amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// A round is already in progress.
    #[error("a round is already in progress")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    Zero,
    /// Bet is below the table minimum.
    #[error("bet is below the table minimum")]
    BelowMinimum,
    /// Bet is above the table maximum.
    #[error("bet is above the table maximum")]
    AboveMaximum,
    /// Bet exceeds the player's chips.
    #[error("bet exceeds available chips")]
    ExceedsChips,
    /// The shoe cannot cover the initial deal.
    #[error(transparent)]
    Shoe(#[from] ShoeExhausted),
}

/// Errors that reject a player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No player turn is in progress.
    #[error("no player turn is in progress")]
    InvalidState,
    /// The shoe ran out of cards mid-hand.
    #[error(transparent)]
    Shoe(#[from] ShoeExhausted),
}

/// Errors that reject settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// No round is awaiting settlement.
    #[error("no round is awaiting settlement")]
    InvalidState,
}
