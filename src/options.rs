//! Game configuration options.

/// What [`Game::play`](crate::Game::play) does when the player's input runs
/// out mid-turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputExhausted {
    /// Stop and return the input error to the caller. The game stays in the
    /// player's turn.
    #[default]
    Abort,
    /// Treat the end of input as a stand and finish the round.
    Stand,
}

/// Configuration options for a round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsolo::{GameOptions, InputExhausted};
///
/// let options = GameOptions::default()
///     .with_dealer_stands_on(17)
///     .with_input_exhausted(InputExhausted::Stand);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Hand value at which the dealer stops drawing.
    pub dealer_stands_on: u8,
    /// Behavior when the player's input runs out.
    pub input_exhausted: InputExhausted,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_stands_on: 17,
            input_exhausted: InputExhausted::Abort,
        }
    }
}

impl GameOptions {
    /// Sets the hand value at which the dealer stops drawing.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, value: u8) -> Self {
        self.dealer_stands_on = value;
        self
    }

    /// Sets the behavior when the player's input runs out.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::{GameOptions, InputExhausted};
    ///
    /// let options = GameOptions::default().with_input_exhausted(InputExhausted::Stand);
    /// assert_eq!(options.input_exhausted, InputExhausted::Stand);
    /// ```
    #[must_use]
    pub const fn with_input_exhausted(mut self, behavior: InputExhausted) -> Self {
        self.input_exhausted = behavior;
        self
    }
}
