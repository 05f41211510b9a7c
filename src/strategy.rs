//! Move-selection strategies.

use crate::deck::Deck;

/// Interface implemented by different move-selection strategies.
///
/// A strategy is consulted once per turn with the shared table pile and
/// the acting player's hand, and answers with an index into the hand.
/// `None` signals cancellation, which ends the game loop immediately.
pub trait Strategy {
    /// Choose the index of the card to play from `hand`, or `None` to
    /// cancel.
    fn select_card(&mut self, table: &Deck, hand: &Deck) -> Option<usize>;
}

/// The computer strategy: always plays the first card in hand.
///
/// # Example
///
/// ```
/// use indigo::{Deck, FirstCard, Strategy};
///
/// let mut strategy = FirstCard;
/// let hand = Deck::sorted().take(3).unwrap().0;
/// assert_eq!(strategy.select_card(&Deck::empty(), &hand), Some(0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCard;

impl Strategy for FirstCard {
    fn select_card(&mut self, _table: &Deck, hand: &Deck) -> Option<usize> {
        (!hand.is_empty()).then_some(0)
    }
}
