//! A single-player blackjack round engine.
//!
//! The crate provides a [`Session`] type that manages the full round flow,
//! including betting, dealing, the player turn, the dealer's fixed drawing
//! policy, and settlement with exact integer-cent payouts. The engine
//! performs no I/O and no implicit randomness: shuffles come from a seeded
//! generator, so a terminal front end, a replay, and a test all drive it
//! the same way.
//!
//! # Example
//!
//! ```no_run
//! use twentyone::{Session, SessionConfig};
//!
//! let config = SessionConfig::default();
//! let session = Session::new(config, 42).unwrap();
//! let _ = session;
//! ```

pub mod card;
pub mod config;
pub mod error;
pub mod hand;
pub mod participant;
pub mod result;
pub mod session;
pub mod shoe;
pub mod stats;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use config::SessionConfig;
pub use error::{ActionError, BetError, ConfigError, SettleError, ShoeExhausted};
pub use hand::Hand;
pub use participant::{Dealer, Player};
pub use result::{Outcome, Settlement};
pub use session::{Action, RoundPhase, RoundView, Session};
pub use shoe::Shoe;
pub use stats::SessionStats;
