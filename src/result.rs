//! Round outcome types for showdown.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::hand::BLACKJACK;

/// How the round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player went over 21 and loses, whatever the dealer holds.
    PlayerBusted,
    /// Dealer went over 21; the player wins.
    DealerBusted,
    /// Player finished closer to 21 than the dealer.
    PlayerBeatsDealer,
    /// Player and dealer tied. Called a push, but the house takes it.
    Push,
    /// Dealer finished closer to 21 than the player.
    DealerBeatsPlayer,
}

impl Outcome {
    /// Returns whether the player won the round.
    ///
    /// A [`Outcome::Push`] counts as a loss.
    #[must_use]
    pub const fn is_player_win(self) -> bool {
        matches!(self, Self::DealerBusted | Self::PlayerBeatsDealer)
    }

    /// Returns the message announced to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBusted => "You Busted, so you lose.",
            Self::DealerBusted => "Dealer went BUST, Player wins! Yay for you!!",
            Self::PlayerBeatsDealer => "You beat the Dealer!",
            Self::Push => "Push: The house wins, you Lose.",
            Self::DealerBeatsPlayer => "You lost to the Dealer.",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Compares final hand values and decides the outcome.
///
/// Checks run in order and the first match wins: player bust, dealer bust,
/// player higher, tie, dealer higher.
///
/// ```
/// use bjsolo::{Outcome, determine_outcome};
///
/// assert_eq!(determine_outcome(22, 25), Outcome::PlayerBusted);
/// assert_eq!(determine_outcome(18, 18), Outcome::Push);
/// assert!(!Outcome::Push.is_player_win());
/// ```
#[must_use]
pub const fn determine_outcome(player_value: u8, dealer_value: u8) -> Outcome {
    if player_value > BLACKJACK {
        Outcome::PlayerBusted
    } else if dealer_value > BLACKJACK {
        Outcome::DealerBusted
    } else if dealer_value < player_value {
        Outcome::PlayerBeatsDealer
    } else if dealer_value == player_value {
        Outcome::Push
    } else {
        Outcome::DealerBeatsPlayer
    }
}

/// Result of a finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome for the player.
    pub outcome: Outcome,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// The player's final cards.
    pub player_cards: Vec<Card>,
    /// The dealer's final cards.
    pub dealer_cards: Vec<Card>,
}
