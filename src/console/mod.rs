//! The interactive console loop: reads one line per turn from stdin, hands it
//! to the command processor, prints the resulting message block, and repeats
//! until the session reaches a terminal state. Commands are serialized by
//! construction - the loop never reads a second line while one is in flight.

use anyhow::Result;
use log::{debug, info};
use rand::Rng;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::config::GameConfig;
use crate::game::{process_command, GameState};
use crate::logutil::escape_log;

const PROMPT: &str = "What do you want to do? ";
const FAREWELL: &str = "Thanks for playing!";

/// Run one full game session on stdin/stdout. `seed` pins the board layout
/// when given; otherwise each session gets a fresh random one.
pub async fn run(game: &GameConfig, seed: Option<u64>) -> Result<()> {
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut state = GameState::new(seed, game.grid_size, &game.treasures);
    info!(
        "Session started: {}x{} grid, {} treasures, seed {}",
        game.grid_size,
        game.grid_size,
        state.treasures.len(),
        seed
    );

    println!("Welcome to GridHunt!");
    println!(
        "{} treasures are hidden on a {}x{} grid - and so is a monster.",
        state.treasures.len(),
        game.grid_size,
        game.grid_size
    );
    println!("Move with L, R, U or D; Q quits. A growl means the monster is close.");
    println!("You start at {}.", state.player);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut turns: u32 = 0;
    let outcome = loop {
        print!("{}", PROMPT);
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            // stdin closed under us: leave without a confirmation exchange
            break "eof";
        };
        debug!("Command: '{}'", escape_log(&line));
        turns += 1;

        let (proceed, messages) = process_command(&mut state, &line);
        for message in &messages {
            println!("{}", message);
        }
        if proceed {
            continue;
        }
        // Quit is the only stop that carries no message; death and win arrive
        // with their final report already printed above.
        if messages.is_empty() {
            if confirm_quit(&mut lines).await? {
                break "quit";
            }
            continue;
        }
        break if state.all_treasures_found() {
            "win"
        } else {
            "death"
        };
    };

    println!("{}", FAREWELL);
    info!(
        "Session over ({}) after {} commands, {}/{} treasures found",
        outcome,
        turns,
        state.found_count,
        state.treasures.len()
    );
    Ok(())
}

async fn confirm_quit(lines: &mut Lines<BufReader<Stdin>>) -> Result<bool> {
    print!("Are you sure you want to quit? (y/n) ");
    std::io::stdout().flush()?;
    match lines.next_line().await? {
        Some(answer) => Ok(answer.trim().to_lowercase().starts_with('y')),
        None => Ok(true),
    }
}
