//! Console front-end for the Indigo card game.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, Subcommand};
use indigo::{
    ConsolePlayer, DECK_SIZE, Deck, FirstCard, Game, GameOptions, Player, Progress, Strategy,
    YesNo, init_logging, prompt_yes_no,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against the computer (the default).
    Play,
    /// Explore a deck with the reset, shuffle, get, and exit actions.
    Inspect,
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => play_game(seed),
        Commands::Inspect => inspect_deck(seed),
    }
}

/// Runs the full game loop against the first-card computer strategy.
fn play_game(seed: u64) -> anyhow::Result<()> {
    let first = match prompt_yes_no("Play first?") {
        YesNo::Yes => Player::Human,
        YesNo::No => Player::Computer,
    };

    let mut game = Game::new(GameOptions::default(), first, seed);
    game.deal()?;

    let mut human = ConsolePlayer::new();
    let mut computer = FirstCard;

    loop {
        match game.advance()? {
            Progress::NeedsRefill => game.refill()?,
            Progress::Over(_) => {
                print_table(game.table());
                break;
            }
            Progress::Turn(player) => {
                print_table(game.table());
                let strategy: &mut dyn Strategy = match player {
                    Player::Human => &mut human,
                    Player::Computer => &mut computer,
                };
                match strategy.select_card(game.table(), game.hand(player)) {
                    Some(index) => {
                        let card = game.play(index)?;
                        if player == Player::Computer {
                            println!("Computer plays {card}");
                        }
                    }
                    None => {
                        game.abort();
                        break;
                    }
                }
            }
        }
    }

    println!("Game Over");
    Ok(())
}

fn print_table(table: &Deck) {
    match table.top() {
        Some(top) => println!(
            "\n{} cards on the table, and the top card is {top}",
            table.len()
        ),
        None => println!("\nNo cards on the table"),
    }
}

/// Prints `prompt` on its own line, then a `> ` input marker, and reads
/// the answer.
fn prompt_input(prompt: &str) -> String {
    println!("{prompt}");
    print!("> ");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

/// Interactive deck explorer: reset, shuffle, and take cards off the top.
fn inspect_deck(seed: u64) -> anyhow::Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut deck = Deck::sorted();

    loop {
        match prompt_input("Choose an action (reset, shuffle, get, exit):").as_str() {
            "reset" => {
                println!("Card deck is reset.");
                deck = Deck::sorted();
            }
            "shuffle" => {
                println!("Card deck is shuffled.");
                deck = deck.shuffled(&mut rng);
            }
            "get" => match prompt_input("Number of cards:").parse::<usize>() {
                Ok(number) if (1..=DECK_SIZE).contains(&number) => {
                    if number > deck.len() {
                        println!("The remaining cards are insufficient to meet the request.");
                    } else {
                        let (taken, rest) = deck.take(number)?;
                        println!("{taken}");
                        deck = rest;
                    }
                }
                _ => println!("Invalid number of cards."),
            },
            "exit" => {
                println!("Bye");
                return Ok(());
            }
            _ => println!("Wrong action."),
        }
    }
}
