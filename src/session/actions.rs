use crate::error::ActionError;
use crate::result::Outcome;

use super::{Action, RoundPhase, RoundView, Session};

impl Session {
    /// Applies a player decision during their turn.
    ///
    /// A hit draws one card; going over 21 ends the round as a bust loss
    /// with the dealer's hand left incomplete. A stand runs the dealer
    /// policy to completion and decides the outcome by comparison. Either
    /// way the returned snapshot reflects the table after the decision.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] when no player turn is in
    /// progress, or a shoe-exhaustion error if a draw finds the shoe empty
    /// mid-hand (a reshuffle-policy defect). A rejected action changes
    /// nothing.
    pub fn player_action(&mut self, action: Action) -> Result<RoundView, ActionError> {
        if self.phase != RoundPhase::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        match action {
            Action::Hit => {
                let card = self.shoe.draw()?;
                self.player.hand_mut().add_card(card);

                if self.player.hand().is_bust() {
                    self.outcome = Some(Outcome::BustLoss);
                    self.phase = RoundPhase::Settlement;
                }
            }
            Action::Stand => self.dealer_turn()?,
        }

        Ok(self.view())
    }
}
