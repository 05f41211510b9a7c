//! Game state types.

use core::fmt;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// The deck has been created but not yet dealt.
    Dealing,
    /// Waiting for the active player to select a card.
    AwaitingMove,
    /// Both hands are empty and must be refilled from the draw pile.
    Refilling,
    /// The game has ended.
    Over,
}

/// One of the two participants in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// The human player.
    Human,
    /// The computer opponent.
    Computer,
}

impl Player {
    /// Returns the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Human => Self::Computer,
            Self::Computer => Self::Human,
        }
    }

    /// Index into per-player storage.
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Human => 0,
            Self::Computer => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => f.write_str("Player"),
            Self::Computer => f.write_str("Computer"),
        }
    }
}

/// Outcome of advancing the turn loop to the top of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// The active player must select a card to play.
    Turn(Player),
    /// Both hands are empty and the draw pile can still deal a full hand
    /// to each player; call [`Game::refill`](crate::Game::refill) before
    /// continuing.
    NeedsRefill,
    /// The game has ended. Carries the player whose turn it would have
    /// been; the game computes no score, so this is an end marker rather
    /// than a winner.
    Over(Player),
}
