//! Immutable deck of cards.
//!
//! Every operation on a [`Deck`] returns a new value; nothing mutates the
//! receiver. Callers thread the returned deck forward, so a single game
//! never aliases two live versions of the same pile.

use alloc::vec::Vec;
use core::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, Rank, Suit};
use crate::error::DeckError;

/// An ordered, immutable sequence of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    /// Cards in order. The last card is the top of a pile.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates the standard 52-card deck in its canonical sorted order:
    /// by suit (clubs, diamonds, hearts, spades), then by descending rank
    /// within each suit.
    ///
    /// # Example
    ///
    /// ```
    /// use indigo::{Deck, Rank, Suit};
    ///
    /// let deck = Deck::sorted();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck.get(0).unwrap().rank, Rank::King);
    /// assert_eq!(deck.get(0).unwrap().suit, Suit::Club);
    /// ```
    #[must_use]
    pub fn sorted() -> Self {
        let mut cards = Vec::with_capacity(crate::card::DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL.iter().rev() {
                cards.push(Card::new(*rank, suit));
            }
        }
        Self { cards }
    }

    /// Returns a new deck with the same cards in a uniformly random order.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut cards = self.cards.clone();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Splits off the first `n` cards.
    ///
    /// Returns the taken cards as a new deck together with the remainder,
    /// both in their original relative order.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NotEnoughCards`] if `n` exceeds the deck size.
    pub fn take(&self, n: usize) -> Result<(Self, Self), DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::NotEnoughCards);
        }
        let taken = Self {
            cards: self.cards[..n].to_vec(),
        };
        let rest = Self {
            cards: self.cards[n..].to_vec(),
        };
        Ok((taken, rest))
    }

    /// Removes the card at `index`.
    ///
    /// Returns the card together with a new deck holding the remaining
    /// cards in their original relative order.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::OutOfRange`] if `index` is not within
    /// `0..len()`.
    pub fn take_at(&self, index: usize) -> Result<(Card, Self), DeckError> {
        if index >= self.cards.len() {
            return Err(DeckError::OutOfRange);
        }
        let mut cards = self.cards.clone();
        let card = cards.remove(index);
        Ok((card, Self { cards }))
    }

    /// Returns a new deck with `card` appended at the end.
    #[must_use]
    pub fn with_card(&self, card: Card) -> Self {
        let mut cards = self.cards.clone();
        cards.push(card);
        Self { cards }
    }

    /// Returns a new deck with all cards of `other` appended at the end.
    #[must_use]
    pub fn with_deck(&self, other: &Self) -> Self {
        let mut cards = self.cards.clone();
        cards.extend_from_slice(&other.cards);
        Self { cards }
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the card at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Returns the top card of the pile (the most recently appended card).
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Returns the cards as a slice.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns an iterator over the cards.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for Deck {
    /// Formats the deck as a space-separated card list.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
