//! Console input helpers and the interactive human strategy.

use std::io;

use crate::deck::Deck;
use crate::strategy::Strategy;

/// A yes/no answer to a console prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    /// The user answered yes.
    Yes,
    /// The user answered no.
    No,
}

impl YesNo {
    /// Parses a case-insensitive `yes`/`no` answer.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "yes" => Some(Self::Yes),
            "no" => Some(Self::No),
            _ => None,
        }
    }
}

/// Prints `prompt` on its own line and reads the next line of input,
/// trimmed and lowercased. Returns an empty string on a read error.
#[must_use]
pub fn prompt_line(prompt: &str) -> String {
    println!("{prompt}");

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

/// Prompts until the user answers `yes` or `no` (case-insensitive).
#[must_use]
pub fn prompt_yes_no(prompt: &str) -> YesNo {
    loop {
        if let Some(answer) = YesNo::parse(&prompt_line(prompt)) {
            return answer;
        }
    }
}

/// The interactive human strategy: lists the hand and reads a 1-indexed
/// selection from standard input.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePlayer;

impl ConsolePlayer {
    /// Creates a new console player.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Strategy for ConsolePlayer {
    /// Prints the hand as a 1-indexed space-separated list and prompts for
    /// a selection. Accepts an in-range number or the `exit` token
    /// (returning `None`); anything else re-prompts.
    fn select_card(&mut self, _table: &Deck, hand: &Deck) -> Option<usize> {
        let listed: Vec<String> = hand
            .iter()
            .enumerate()
            .map(|(i, card)| format!("{}){card}", i + 1))
            .collect();
        println!("Cards in hand: {}", listed.join(" "));

        loop {
            let input = prompt_line(&format!("Choose a card to play (1-{}):", hand.len()));
            if input == "exit" {
                return None;
            }
            match input.parse::<usize>() {
                Ok(number) if (1..=hand.len()).contains(&number) => return Some(number - 1),
                _ => {}
            }
        }
    }
}
