//! Game engine and state management.

use log::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DeckExhaustedError, DealError};
use crate::hand::Hand;
use crate::options::GameOptions;

mod actions;
mod dealer;
mod play;
pub mod state;

pub use state::GameState;

/// A single round of blackjack between one player and the dealer.
///
/// The game owns the deck and both hands. It is a plain state machine: each
/// method checks the current [`GameState`], mutates the hands and moves the
/// state forward. [`Game::play`] drives a whole round through a
/// [`Renderer`](crate::Renderer) and an [`InputProvider`](crate::InputProvider).
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards not yet dealt.
    deck: Deck,
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// The player's hand.
    player_hand: Hand,
    /// The dealer's hand; the first card is face up.
    dealer_hand: Hand,
}

impl Game {
    /// Creates a new game whose deck is shuffled from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Dealing);
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_deck(options, Deck::from_seed(seed))
    }

    /// Creates a new game that deals from `deck`.
    #[must_use]
    pub const fn with_deck(options: GameOptions, deck: Deck) -> Self {
        Self {
            deck,
            options,
            state: GameState::Dealing,
            player_hand: Hand::new(),
            dealer_hand: Hand::new(),
        }
    }

    /// Deals two rounds of cards, player first, then dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if cards were already dealt or the deck runs out.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }

        for _ in 0..2 {
            self.deal_card_to_player()?;
            self.deal_card_to_dealer()?;
        }

        self.transition(GameState::PlayerTurn);
        Ok(())
    }

    fn deal_card_to_player(&mut self) -> Result<Card, DeckExhaustedError> {
        let card = self.deck.draw()?;
        self.player_hand.add_card(card);
        debug!("player receives {card}");
        Ok(card)
    }

    fn deal_card_to_dealer(&mut self) -> Result<Card, DeckExhaustedError> {
        let card = self.deck.draw()?;
        self.dealer_hand.add_card(card);
        debug!("dealer receives {card}");
        Ok(card)
    }

    fn transition(&mut self, next: GameState) {
        debug!("state {:?} -> {next:?}", self.state);
        self.state = next;
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand, including the hidden card.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns the dealer's face-up card.
    #[must_use]
    pub fn dealer_up_card(&self) -> Option<&Card> {
        self.dealer_hand.up_card()
    }

    /// Returns whether the player has gone over 21.
    #[must_use]
    pub fn has_player_busted(&self) -> bool {
        self.player_hand.is_bust()
    }

    /// Returns whether the dealer has gone over 21.
    #[must_use]
    pub fn has_dealer_busted(&self) -> bool {
        self.dealer_hand.is_bust()
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
