//! Error types for game operations.

use thiserror::Error;

/// The deck has no cards left to draw.
///
/// A single round never needs more than 21 cards, so this only surfaces when
/// a game is handed a deck that was already drawn down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct DeckExhaustedError;

/// Errors that can occur while reading a player decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// The input source has no more lines.
    #[error("input stream exhausted")]
    Exhausted,
    /// The input source failed.
    #[cfg(feature = "std")]
    #[error("failed to read player input: {0}")]
    Read(std::io::ErrorKind),
}

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Cards have already been dealt.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// The deck ran out while dealing.
    #[error(transparent)]
    NoCards(#[from] DeckExhaustedError),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// It is not the player's turn.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The deck ran out while hitting.
    #[error(transparent)]
    NoCards(#[from] DeckExhaustedError),
}

/// Errors that can occur while the dealer plays out their hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// It is not the dealer's turn.
    #[error("invalid game state for dealer play")]
    InvalidState,
    /// The deck ran out while the dealer had to draw.
    #[error(transparent)]
    NoCards(#[from] DeckExhaustedError),
}

/// Errors that can occur during showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Hands are not ready to be compared.
    #[error("invalid game state for showdown")]
    InvalidState,
}

/// Errors that abort [`Game::play`](crate::Game::play).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Dealing failed.
    #[error("deal failed: {0}")]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error("player action failed: {0}")]
    Action(#[from] ActionError),
    /// Dealer play failed.
    #[error("dealer play failed: {0}")]
    Dealer(#[from] DealerError),
    /// Showdown failed.
    #[error("showdown failed: {0}")]
    Showdown(#[from] ShowdownError),
    /// No decision could be read from the player.
    #[error(transparent)]
    Input(#[from] InputError),
}
