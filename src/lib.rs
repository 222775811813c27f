//! Single-player blackjack with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that plays one round against a dealer
//! who draws to 17: the initial deal, the player's hits and stand, the
//! dealer's turn and the showdown. The game never touches the terminal
//! itself; it talks to a [`Renderer`] and an [`InputProvider`]. With the
//! `std` feature, [`console`] supplies ANSI implementations of both.
//!
//! # Example
//!
//! ```
//! use bjsolo::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.deal().unwrap();
//! game.stand().unwrap();
//! game.dealer_play().unwrap();
//! let result = game.showdown().unwrap();
//! assert_eq!(game.state(), GameState::Terminal);
//! println!("{}", result.outcome);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod boundary;
pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use boundary::{Decision, InputProvider, Renderer};
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{
    ActionError, DealError, DealerError, DeckExhaustedError, InputError, PlayError, ShowdownError,
};
pub use game::{Game, GameState};
pub use hand::{BLACKJACK, Hand, hand_value};
pub use options::{GameOptions, InputExhausted};
pub use result::{Outcome, RoundResult, determine_outcome};
