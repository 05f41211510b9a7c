//! Game engine and state management.
//!
//! The engine owns the draw pile, the table pile, and both hands as
//! immutable [`Deck`] values, replacing each one with the deck returned by
//! the operation that changed it. All card movement goes through the
//! phase-gated operations (`deal`, `refill`, `play`, `abort`), so the
//! 52-card total across the four piles holds for the lifetime of a game.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::options::GameOptions;

mod deal;
pub mod state;
mod turn;

pub use state::{GameState, Player, Progress};

/// An Indigo game: two players alternately moving cards from their hands
/// onto a shared table pile until the draw pile and both hands are empty.
///
/// The game never computes a score. At termination it reports the player
/// whose turn it would have been, both on normal exhaustion and on
/// cancellation via [`Game::abort`].
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Cards not yet dealt.
    draw_pile: Deck,
    /// The shared table pile; cards are appended on top.
    table: Deck,
    /// Hands, indexed by player.
    hands: [Deck; 2],
    /// The player to move next.
    active: Player,
    /// Current game state.
    state: GameState,
    /// The player recorded at termination.
    finished_by: Option<Player>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed. `first` is the player who
    /// moves first once the cards are dealt.
    ///
    /// # Example
    ///
    /// ```
    /// use indigo::{Game, GameOptions, GameState, Player};
    ///
    /// let game = Game::new(GameOptions::default(), Player::Human, 42);
    /// assert_eq!(game.state(), GameState::Dealing);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, first: Player, seed: u64) -> Self {
        Self {
            options,
            draw_pile: Deck::sorted(),
            table: Deck::empty(),
            hands: [Deck::empty(), Deck::empty()],
            active: first,
            state: GameState::Dealing,
            finished_by: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player whose turn it is.
    #[must_use]
    pub const fn active_player(&self) -> Player {
        self.active
    }

    /// Returns the table pile.
    #[must_use]
    pub const fn table(&self) -> &Deck {
        &self.table
    }

    /// Returns the given player's hand.
    #[must_use]
    pub const fn hand(&self, player: Player) -> &Deck {
        &self.hands[player.index()]
    }

    /// Returns the draw pile.
    #[must_use]
    pub const fn draw_pile(&self) -> &Deck {
        &self.draw_pile
    }

    /// Returns the number of cards remaining in the draw pile.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.draw_pile.len()
    }

    /// Returns the player recorded at termination, or `None` while the
    /// game is still in progress. This is the player whose turn it would
    /// have been, not a computed winner.
    #[must_use]
    pub const fn finished_by(&self) -> Option<Player> {
        self.finished_by
    }

    /// Returns the total number of cards across the draw pile, the table,
    /// and both hands. Constant at 52 from the deal onwards.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.draw_pile.len()
            + self.table.len()
            + self.hands[Player::Human.index()].len()
            + self.hands[Player::Computer.index()].len()
    }
}
