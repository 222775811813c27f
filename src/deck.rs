//! A single shuffled 52-card deck.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use log::debug;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckExhaustedError;

/// An ordered deck of cards, shuffled once when it is built.
///
/// The deck only ever shrinks: cards leave through [`Deck::draw`] and are
/// never put back.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards; the front is the top of the deck.
    cards: VecDeque<Card>,
}

impl Deck {
    /// Builds a deck and shuffles it with the given random number generator.
    ///
    /// ```
    /// use bjsolo::Deck;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let deck = Deck::new(&mut rng);
    /// assert_eq!(deck.len(), 52);
    /// ```
    #[must_use]
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::shuffled_with(|cards| cards.shuffle(rng))
    }

    /// Builds a deck shuffled by a [`ChaCha8Rng`] seeded with `seed`.
    ///
    /// The same seed always yields the same card order.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::new(&mut rng)
    }

    /// Builds a deck and lets `shuffle` put it in order.
    ///
    /// `shuffle` receives the 52 cards in suit-then-rank order. Index 0 of the
    /// slice becomes the top of the deck. The function must only permute the
    /// slice; in debug builds a deck with a repeated card panics.
    ///
    /// ```
    /// use bjsolo::{Card, Deck, Rank, Suit};
    ///
    /// let mut deck = Deck::shuffled_with(|cards| cards.reverse());
    /// assert_eq!(deck.draw(), Ok(Card::new(Suit::Spades, Rank::King)));
    /// ```
    #[must_use]
    pub fn shuffled_with<F>(shuffle: F) -> Self
    where
        F: FnOnce(&mut [Card]),
    {
        let mut cards = Self::ordered_cards();
        shuffle(&mut cards);
        debug_assert!(all_distinct(&cards), "shuffle produced duplicate cards");

        Self {
            cards: cards.into(),
        }
    }

    /// Creates every suit/rank combination exactly once.
    fn ordered_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        cards
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckExhaustedError`] when no cards remain.
    pub fn draw(&mut self) -> Result<Card, DeckExhaustedError> {
        let card = self.cards.pop_front().ok_or(DeckExhaustedError)?;
        debug!("drew {card} ({} left)", self.cards.len());
        Ok(card)
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

fn all_distinct(cards: &[Card]) -> bool {
    let mut seen: u64 = 0;
    for card in cards {
        let bit = 1u64 << (card.suit as usize * Rank::ALL.len() + card.rank as usize);
        if seen & bit != 0 {
            return false;
        }
        seen |= bit;
    }
    true
}
