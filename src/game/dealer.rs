extern crate alloc;

use alloc::vec::Vec;

use log::{debug, info};

use crate::card::Card;
use crate::error::{DealerError, ShowdownError};
use crate::result::{RoundResult, determine_outcome};

use super::{Game, GameState};

impl Game {
    /// Returns whether the dealer must take another card.
    fn dealer_hits(&self) -> bool {
        self.dealer_hand.value() < self.options.dealer_stands_on
    }

    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer draws while their hand is worth 16 or less and stands from
    /// 17 up (with the default options). If the player has already busted
    /// the dealer does not draw at all.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck is
    /// empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, DealerError> {
        if self.state != GameState::DealerTurn {
            return Err(DealerError::InvalidState);
        }

        let mut drawn_cards = Vec::new();

        if self.has_player_busted() {
            debug!("player busted, dealer stands pat");
        } else {
            while self.dealer_hits() {
                drawn_cards.push(self.deal_card_to_dealer()?);
            }
            debug!("dealer stands on {}", self.dealer_hand.value());
        }

        self.transition(GameState::Evaluating);

        Ok(drawn_cards)
    }

    /// Compares the final hands and ends the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in evaluating state.
    pub fn showdown(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::Evaluating {
            return Err(ShowdownError::InvalidState);
        }

        let player_value = self.player_hand.value();
        let dealer_value = self.dealer_hand.value();
        let outcome = determine_outcome(player_value, dealer_value);
        info!("round over: player {player_value}, dealer {dealer_value}, {outcome:?}");

        self.transition(GameState::Terminal);

        Ok(RoundResult {
            outcome,
            player_value,
            dealer_value,
            player_cards: self.player_hand.cards().to_vec(),
            dealer_cards: self.dealer_hand.cards().to_vec(),
        })
    }
}
