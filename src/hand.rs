//! Hand representation and valuation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest value a hand can have without busting.
pub const BLACKJACK: u8 = 21;

/// Values a sequence of cards.
///
/// Card values are summed with every Ace counted as 1. If the hand holds at
/// least one Ace and that sum is below 11, a single Ace is promoted to 11.
/// The promotion happens at most once, so two Aces are worth 12.
///
/// ```
/// use bjsolo::{Card, Rank, Suit, hand_value};
///
/// let aces = [
///     Card::new(Suit::Hearts, Rank::Ace),
///     Card::new(Suit::Spades, Rank::Ace),
/// ];
/// assert_eq!(hand_value(&aces), 12);
/// ```
#[must_use]
pub fn hand_value(cards: &[Card]) -> u8 {
    let total = cards
        .iter()
        .fold(0u8, |sum, card| sum.saturating_add(card.rank_value()));

    if total < 11 && cards.iter().any(Card::is_ace) {
        total + 10
    } else {
        total
    }
}

/// A hand of cards held by the player or the dealer.
///
/// The first card is the one shown face up while the dealer's hand is still
/// hidden; order does not affect the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the face-up card (the first one dealt).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<&[Card]> for Hand {
    fn from(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }
}
