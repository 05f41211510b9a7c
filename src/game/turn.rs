//! The turn loop: advancing, playing cards, and cancellation.

use log::debug;

use crate::card::Card;
use crate::error::{DeckError, PlayError};
use crate::game::{Game, GameState, Player, Progress};

impl Game {
    /// Advances to the top of a turn and reports what must happen next.
    ///
    /// When both hands are empty this transitions to
    /// [`GameState::Refilling`] if the draw pile can still cover a full
    /// hand for each player, or ends the game if it cannot, so a reported
    /// [`Progress::NeedsRefill`] guarantees the following
    /// [`Game::refill`] succeeds. Once the game is over, repeated calls
    /// keep returning [`Progress::Over`].
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::InvalidState`] if the cards have not been
    /// dealt yet.
    pub fn advance(&mut self) -> Result<Progress, PlayError> {
        match self.state {
            GameState::Dealing => Err(PlayError::InvalidState),
            GameState::Refilling => Ok(Progress::NeedsRefill),
            GameState::Over => Ok(Progress::Over(self.finished_by.unwrap_or(self.active))),
            GameState::AwaitingMove => {
                let hands_empty = self.hand(Player::Human).is_empty()
                    && self.hand(Player::Computer).is_empty();
                if !hands_empty {
                    return Ok(Progress::Turn(self.active));
                }
                if self.draw_pile.len() < 2 * self.options.hand_cards {
                    debug!(
                        "hands empty, draw pile cannot cover a refill on {}'s turn",
                        self.active
                    );
                    self.state = GameState::Over;
                    self.finished_by = Some(self.active);
                    Ok(Progress::Over(self.active))
                } else {
                    self.state = GameState::Refilling;
                    Ok(Progress::NeedsRefill)
                }
            }
        }
    }

    /// Plays the card at `index` from the active player's hand: the card
    /// is removed from the hand, appended on top of the table pile, and
    /// the turn passes to the opponent. Returns the played card.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::InvalidState`] unless the game is awaiting a
    /// move, and [`PlayError::NoSuchCard`] if `index` is outside the
    /// active hand.
    pub fn play(&mut self, index: usize) -> Result<Card, PlayError> {
        if self.state != GameState::AwaitingMove {
            return Err(PlayError::InvalidState);
        }

        let (card, rest) = self.hands[self.active.index()]
            .take_at(index)
            .map_err(|err| match err {
                DeckError::OutOfRange | DeckError::NotEnoughCards => PlayError::NoSuchCard,
            })?;

        self.hands[self.active.index()] = rest;
        self.table = self.table.with_card(card);
        debug!("{} plays {card}", self.active);
        self.active = self.active.opponent();
        Ok(card)
    }

    /// Ends the game immediately on behalf of the active player, without
    /// consuming a card or altering the table. Used when a human cancels
    /// card selection; the current actor is recorded as the end marker,
    /// mirroring normal termination.
    pub fn abort(&mut self) {
        if self.state == GameState::Over {
            return;
        }
        debug!("game aborted on {}'s turn", self.active);
        self.state = GameState::Over;
        self.finished_by = Some(self.active);
    }
}
