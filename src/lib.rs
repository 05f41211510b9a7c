//! A console Indigo card game engine with optional `no_std` support.
//!
//! The crate provides an immutable [`Deck`] model and a [`Game`] type that
//! manages the full turn loop: dealing, alternating moves, refilling hands,
//! and termination. Move selection is abstracted behind the [`Strategy`]
//! trait with a scripted computer implementation and (with the `std`
//! feature) an interactive console implementation.
//!
//! # Example
//!
//! ```
//! use indigo::{FirstCard, Game, GameOptions, Player, Progress, Strategy};
//!
//! let mut game = Game::new(GameOptions::default(), Player::Computer, 42);
//! game.deal().unwrap();
//!
//! let mut strategy = FirstCard;
//! loop {
//!     match game.advance().unwrap() {
//!         Progress::Turn(player) => {
//!             let hand = game.hand(player);
//!             let index = strategy.select_card(game.table(), hand).unwrap();
//!             game.play(index).unwrap();
//!         }
//!         Progress::NeedsRefill => game.refill().unwrap(),
//!         Progress::Over(_) => break,
//!     }
//! }
//! assert_eq!(game.table().len(), 52);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
#[cfg(feature = "std")]
mod logging;
pub mod options;
pub mod strategy;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
#[cfg(feature = "std")]
pub use console::{ConsolePlayer, YesNo, prompt_line, prompt_yes_no};
pub use deck::Deck;
pub use error::{DealError, DeckError, PlayError};
pub use game::{Game, GameState, Player, Progress};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use options::GameOptions;
pub use strategy::{FirstCard, Strategy};
