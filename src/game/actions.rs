use log::debug;

use crate::boundary::Decision;
use crate::card::Card;
use crate::error::ActionError;

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// If the new card takes the player over 21 the turn ends and the game
    /// moves on to the dealer's turn with the player busted.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.deal_card_to_player()?;

        if self.has_player_busted() {
            debug!("player busts with {}", self.player_hand.value());
            self.transition(GameState::DealerTurn);
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        debug!("player stands on {}", self.player_hand.value());
        self.transition(GameState::DealerTurn);
        Ok(())
    }

    /// Applies a parsed player decision.
    ///
    /// Returns the card drawn on a hit.
    ///
    /// # Errors
    ///
    /// Same as [`Game::hit`] and [`Game::stand`].
    pub fn apply(&mut self, decision: Decision) -> Result<Option<Card>, ActionError> {
        match decision {
            Decision::Hit => self.hit().map(Some),
            Decision::Stand => self.stand().map(|()| None),
        }
    }
}
