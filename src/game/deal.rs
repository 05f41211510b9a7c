//! Dealing and refilling hands.

use log::debug;

use crate::error::DealError;
use crate::game::{Game, GameState, Player};

impl Game {
    /// Shuffles the deck and deals the opening layout: the table cards
    /// first, then the human hand, then the computer hand. The remaining
    /// cards form the draw pile.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InvalidState`] if the game has already been
    /// dealt, and [`DealError::NotEnoughCards`] if the options ask for
    /// more cards than the deck holds.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }

        let needed = self.options.table_cards + 2 * self.options.hand_cards;
        if needed > self.draw_pile.len() {
            return Err(DealError::NotEnoughCards);
        }

        let shuffled = self.draw_pile.shuffled(&mut self.rng);
        let (table, rest) = shuffled
            .take(self.options.table_cards)
            .map_err(|_| DealError::NotEnoughCards)?;
        let (human, rest) = rest
            .take(self.options.hand_cards)
            .map_err(|_| DealError::NotEnoughCards)?;
        let (computer, rest) = rest
            .take(self.options.hand_cards)
            .map_err(|_| DealError::NotEnoughCards)?;

        self.table = table;
        self.hands[Player::Human.index()] = human;
        self.hands[Player::Computer.index()] = computer;
        self.draw_pile = rest;
        self.state = GameState::AwaitingMove;

        debug!(
            "dealt {} table cards, {} per hand, {} left in the draw pile",
            self.table.len(),
            self.options.hand_cards,
            self.draw_pile.len()
        );
        Ok(())
    }

    /// Deals a fresh hand to each player from the draw pile, human first,
    /// preserving draw-pile order. The active player is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InvalidState`] unless the game is in the
    /// [`GameState::Refilling`] state, and [`DealError::NotEnoughCards`]
    /// if the draw pile cannot cover both hands.
    pub fn refill(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Refilling {
            return Err(DealError::InvalidState);
        }

        if 2 * self.options.hand_cards > self.draw_pile.len() {
            return Err(DealError::NotEnoughCards);
        }

        let (human, rest) = self
            .draw_pile
            .take(self.options.hand_cards)
            .map_err(|_| DealError::NotEnoughCards)?;
        let (computer, rest) = rest
            .take(self.options.hand_cards)
            .map_err(|_| DealError::NotEnoughCards)?;

        self.hands[Player::Human.index()] = human;
        self.hands[Player::Computer.index()] = computer;
        self.draw_pile = rest;
        self.state = GameState::AwaitingMove;

        debug!(
            "refilled both hands, {} left in the draw pile",
            self.draw_pile.len()
        );
        Ok(())
    }
}
