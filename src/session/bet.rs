use crate::error::{BetError, ShoeExhausted};
use crate::result::Outcome;

use super::{RoundPhase, RoundView, Session};

/// Cards consumed by the initial deal: two per side.
const INITIAL_DEAL_CARDS: usize = 4;

impl Session {
    /// Places a bet and opens a round: debits the bet, deals two cards to
    /// each side, and resolves a player natural on the spot.
    ///
    /// After a successful call the round is either in
    /// [`RoundPhase::PlayerTurn`], awaiting a hit or stand, or already in
    /// [`RoundPhase::Settlement`] when the player was dealt a blackjack.
    ///
    /// # Errors
    ///
    /// Returns a [`BetError`] if a round is already in progress, the amount
    /// is zero, outside the table limits, or over the player's chips, or if
    /// the shoe cannot cover the initial deal. A rejected bet debits
    /// nothing and the round stays open for another attempt.
    pub fn place_bet(&mut self, amount: u64) -> Result<RoundView, BetError> {
        if !matches!(self.phase, RoundPhase::Betting | RoundPhase::Done) {
            return Err(BetError::InvalidState);
        }

        // The deal needs four cards. Checked before the debit so a rejected
        // bet never touches chips.
        if self.shoe.remaining() < INITIAL_DEAL_CARDS {
            return Err(BetError::Shoe(ShoeExhausted));
        }

        self.player
            .place_bet(amount, self.config.min_bet, self.config.max_bet)?;

        self.phase = RoundPhase::Dealing;
        self.deal_initial()?;
        self.natural_check();

        Ok(self.view())
    }

    /// Deals player, dealer, player, dealer. The dealer's second card is
    /// the conventional hole card; the hand itself holds it like any other.
    fn deal_initial(&mut self) -> Result<(), ShoeExhausted> {
        for _ in 0..2 {
            let card = self.shoe.draw()?;
            self.player.hand_mut().add_card(card);

            let card = self.shoe.draw()?;
            self.dealer.hand_mut().add_card(card);
        }
        Ok(())
    }

    /// Resolves a player natural before any turn is taken.
    ///
    /// A dealer natural without a player natural is not special-cased: the
    /// player still takes their turn and loses by comparison unless they
    /// reach 21 themselves.
    fn natural_check(&mut self) {
        self.phase = RoundPhase::NaturalCheck;

        if self.player.hand().is_blackjack() {
            self.outcome = Some(if self.dealer.hand().is_blackjack() {
                Outcome::Push
            } else {
                Outcome::BlackjackWin
            });
            self.phase = RoundPhase::Settlement;
        } else {
            self.phase = RoundPhase::PlayerTurn;
        }
    }
}
