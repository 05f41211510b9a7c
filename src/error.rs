//! Error types for deck and game operations.

use thiserror::Error;

/// Errors that can occur when splitting or indexing a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Not enough cards in the deck to take the requested amount.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
    /// Card index outside the deck bounds.
    #[error("card index out of range")]
    OutOfRange,
}

/// Errors that can occur during dealing or refilling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the draw pile.
    #[error("not enough cards in the draw pile")]
    NotEnoughCards,
}

/// Errors that can occur while taking turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No card at the selected position in the active hand.
    #[error("no card at the selected position")]
    NoSuchCard,
}
