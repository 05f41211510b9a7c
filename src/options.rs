//! Game configuration options.

/// Configuration options for an Indigo game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use indigo::GameOptions;
///
/// let options = GameOptions::default()
///     .with_table_cards(4)
///     .with_hand_cards(6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of cards dealt face up to the table at the start.
    pub table_cards: usize,
    /// Number of cards in each freshly dealt hand.
    pub hand_cards: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            table_cards: 4,
            hand_cards: 6,
        }
    }
}

impl GameOptions {
    /// Sets the number of cards dealt to the table at the start.
    ///
    /// # Example
    ///
    /// ```
    /// use indigo::GameOptions;
    ///
    /// let options = GameOptions::default().with_table_cards(8);
    /// assert_eq!(options.table_cards, 8);
    /// ```
    #[must_use]
    pub const fn with_table_cards(mut self, table_cards: usize) -> Self {
        self.table_cards = table_cards;
        self
    }

    /// Sets the number of cards in each dealt hand.
    ///
    /// # Example
    ///
    /// ```
    /// use indigo::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_cards(4);
    /// assert_eq!(options.hand_cards, 4);
    /// ```
    #[must_use]
    pub const fn with_hand_cards(mut self, hand_cards: usize) -> Self {
        self.hand_cards = hand_cards;
        self
    }
}
