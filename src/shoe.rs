//! Multi-deck shoe with shuffle, draw, and reshuffle policy.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{ConfigError, ShoeExhausted};

/// A shoe of one or more combined 52-card decks.
///
/// The top of the shoe is the end of the card vector; drawing pops from the
/// back. Immediately after any build or rebuild the shoe holds exactly
/// `deck_count * 52` cards, and the count strictly decreases with each draw.
///
/// Reshuffling is a policy decision taken between rounds, never a side
/// effect of [`draw`](Self::draw): the round engine calls
/// [`maybe_reshuffle`](Self::maybe_reshuffle) after settlement so a hand in
/// progress always plays out of an untouched sequence.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    deck_count: u32,
}

impl Shoe {
    /// Creates an unshuffled shoe of `deck_count` concatenated decks.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DeckCount`] if `deck_count` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::Shoe;
    ///
    /// let shoe = Shoe::new(6).unwrap();
    /// assert_eq!(shoe.remaining(), 312);
    /// ```
    pub fn new(deck_count: u32) -> Result<Self, ConfigError> {
        if deck_count == 0 {
            return Err(ConfigError::DeckCount);
        }

        Ok(Self {
            cards: Self::build_cards(deck_count),
            deck_count,
        })
    }

    /// Creates a shoe with an explicit card sequence, order preserved.
    ///
    /// The last element of `cards` is the top of the shoe and will be drawn
    /// first. This is the hook for deterministic replays and tests; a
    /// subsequent rebuild restores the full `deck_count * 52` cards.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DeckCount`] if `deck_count` is zero.
    pub fn with_cards(deck_count: u32, cards: Vec<Card>) -> Result<Self, ConfigError> {
        if deck_count == 0 {
            return Err(ConfigError::DeckCount);
        }

        Ok(Self { cards, deck_count })
    }

    fn build_cards(deck_count: u32) -> Vec<Card> {
        let mut cards = Vec::with_capacity(deck_count as usize * DECK_SIZE);

        for _ in 0..deck_count {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(rank, suit));
                }
            }
        }

        cards
    }

    /// Randomly permutes the shoe in place.
    ///
    /// The random source is injected so a seeded generator reproduces the
    /// exact same shuffle. Length is unchanged.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the next card from the top of the shoe.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeExhausted`] if the shoe is empty. With the reshuffle
    /// discipline in place this indicates a policy defect, but it is a
    /// defined failure rather than a panic.
    pub fn draw(&mut self) -> Result<Card, ShoeExhausted> {
        self.cards.pop().ok_or(ShoeExhausted)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of decks the shoe was built from.
    #[must_use]
    pub const fn deck_count(&self) -> u32 {
        self.deck_count
    }

    /// Rebuilds and reshuffles the shoe if fewer than `threshold` cards
    /// remain.
    ///
    /// Returns `true` if a rebuild happened. Called by the round engine
    /// between rounds only, never while a hand is mid-resolution.
    pub fn maybe_reshuffle<R: Rng + ?Sized>(&mut self, threshold: usize, rng: &mut R) -> bool {
        if self.remaining() >= threshold {
            return false;
        }

        self.cards = Self::build_cards(self.deck_count);
        self.shuffle(rng);
        true
    }
}
