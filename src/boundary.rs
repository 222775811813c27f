//! The presentation boundary: how a round talks to its front-end.

extern crate alloc;

use alloc::string::String;

use crate::card::Card;
use crate::error::InputError;
use crate::hand::Hand;
use crate::result::Outcome;

/// A player's choice during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

impl Decision {
    /// Interprets raw player text.
    ///
    /// The text is lower-cased and matched on its first character: `h` hits,
    /// `s` stands. Anything else is not a decision.
    ///
    /// ```
    /// use bjsolo::Decision;
    ///
    /// assert_eq!(Decision::parse("HIT!"), Some(Decision::Hit));
    /// assert_eq!(Decision::parse("Stand"), Some(Decision::Stand));
    /// assert_eq!(Decision::parse("x"), None);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let choice = input.to_lowercase();
        if choice.starts_with('s') {
            Some(Self::Stand)
        } else if choice.starts_with('h') {
            Some(Self::Hit)
        } else {
            None
        }
    }
}

/// Source of player decisions.
pub trait InputProvider {
    /// Blocks until the player enters a line and returns it unparsed.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Exhausted`] when no more input will arrive.
    fn read_player_decision(&mut self) -> Result<String, InputError>;
}

/// Displays the table. The game never reads anything back.
pub trait Renderer {
    /// Shows the table during the player's turn: only the dealer's up card,
    /// and the player's full hand with its value.
    fn render_in_progress(&mut self, dealer_up_card: &Card, player_hand: &Hand, player_value: u8);

    /// Shows both hands fully revealed once play is over.
    fn render_final(
        &mut self,
        dealer_hand: &Hand,
        dealer_value: u8,
        player_hand: &Hand,
        player_value: u8,
    );

    /// Tells the player their last input was neither hit nor stand.
    fn render_invalid_input(&mut self);

    /// Announces the result of the round.
    fn render_outcome(&mut self, outcome: Outcome);
}

impl<T: InputProvider + ?Sized> InputProvider for &mut T {
    fn read_player_decision(&mut self) -> Result<String, InputError> {
        (**self).read_player_decision()
    }
}

impl<T: Renderer + ?Sized> Renderer for &mut T {
    fn render_in_progress(&mut self, dealer_up_card: &Card, player_hand: &Hand, player_value: u8) {
        (**self).render_in_progress(dealer_up_card, player_hand, player_value);
    }

    fn render_final(
        &mut self,
        dealer_hand: &Hand,
        dealer_value: u8,
        player_hand: &Hand,
        player_value: u8,
    ) {
        (**self).render_final(dealer_hand, dealer_value, player_hand, player_value);
    }

    fn render_invalid_input(&mut self) {
        (**self).render_invalid_input();
    }

    fn render_outcome(&mut self, outcome: Outcome) {
        (**self).render_outcome(outcome);
    }
}
