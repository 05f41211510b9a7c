//! Property tests for the deck model.

use std::collections::HashSet;

use indigo::{Card, DECK_SIZE, Deck, FirstCard, Game, GameOptions, Player, Progress, Strategy};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn take_reconstructs_the_deck(seed in any::<u64>(), n in 0usize..=DECK_SIZE) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::sorted().shuffled(&mut rng);
        let (taken, rest) = deck.take(n).unwrap();
        prop_assert_eq!(taken.len(), n);
        prop_assert_eq!(taken.len() + rest.len(), deck.len());
        prop_assert_eq!(taken.with_deck(&rest), deck);
    }

    #[test]
    fn take_at_preserves_relative_order(seed in any::<u64>(), index in 0usize..DECK_SIZE) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::sorted().shuffled(&mut rng);
        let (card, rest) = deck.take_at(index).unwrap();
        prop_assert_eq!(Some(card), deck.get(index));

        let mut expected: Vec<Card> = deck.cards().to_vec();
        expected.remove(index);
        prop_assert_eq!(rest.cards(), expected.as_slice());
    }

    #[test]
    fn shuffle_preserves_the_multiset(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::sorted();
        let shuffled = deck.shuffled(&mut rng);
        prop_assert_eq!(shuffled.len(), DECK_SIZE);

        // The 52 cards are distinct, so set equality is multiset equality.
        let unique: HashSet<Card> = shuffled.iter().copied().collect();
        prop_assert_eq!(unique.len(), DECK_SIZE);
        for card in &deck {
            prop_assert!(unique.contains(card));
        }
    }

    #[test]
    fn seeded_games_keep_the_card_count_invariant(seed in any::<u64>()) {
        let mut game = Game::new(GameOptions::default(), Player::Computer, seed);
        game.deal().unwrap();

        let mut strategy = FirstCard;
        loop {
            prop_assert_eq!(game.total_cards(), DECK_SIZE);
            match game.advance().unwrap() {
                Progress::Turn(player) => {
                    let index = strategy
                        .select_card(game.table(), game.hand(player))
                        .unwrap();
                    game.play(index).unwrap();
                }
                Progress::NeedsRefill => game.refill().unwrap(),
                Progress::Over(player) => {
                    prop_assert_eq!(player, Player::Computer);
                    break;
                }
            }
        }
        prop_assert_eq!(game.table().len(), DECK_SIZE);
    }
}
