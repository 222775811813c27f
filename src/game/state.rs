//! Game state types.

/// Game state.
///
/// A round moves strictly forward through these states and never revisits
/// one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Waiting for the initial two rounds of cards.
    Dealing,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Hands are final and can be compared.
    Evaluating,
    /// Round has ended; nothing else may change.
    Terminal,
}
