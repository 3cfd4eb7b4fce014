//! Turn processing: raw command text in, narrative messages and a
//! continue/stop flag out. Rejected input (empty, unrecognized, blocked moves)
//! is an ordinary message, never an error; the session only stops on death,
//! a full treasure haul, or quit.

use super::point::Point;
use super::state::GameState;

/// The closed set of recognized inputs after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Left,
    Right,
    Up,
    Down,
    Quit,
    Empty,
    Unknown,
}

/// Lowercase and trim, then match the whole token. Anything that is not exactly
/// one of the five single-letter commands is `Unknown`.
fn parse_command(raw: &str) -> Command {
    match raw.trim().to_lowercase().as_str() {
        "" => Command::Empty,
        "l" => Command::Left,
        "r" => Command::Right,
        "u" => Command::Up,
        "d" => Command::Down,
        "q" => Command::Quit,
        _ => Command::Unknown,
    }
}

/// Move the player onto `new_location` and resolve the turn: death check first,
/// then treasure pickup (with win detection), then the proximity growl on the
/// non-terminal path. Returns `(continue, messages)` in emission order.
pub fn enter_location(state: &mut GameState, new_location: Point) -> (bool, Vec<String>) {
    let mut messages = Vec::new();
    state.player = new_location;
    let here = state.player;
    messages.push(format!("You are now at {}.", here));

    if state.monster == here {
        messages.push("The monster got you! You are dead.".to_string());
        return (false, messages);
    }

    if let Some(treasure) = state
        .treasures
        .iter_mut()
        .find(|t| t.location == Some(here))
    {
        messages.push(format!("You found the {}!", treasure.name));
        treasure.location = None;
        state.found_count += 1;
        if state.all_treasures_found() {
            messages.push(format!(
                "You win! You found all {} treasures.",
                state.found_count
            ));
            return (false, messages);
        }
        let remaining = state.remaining();
        if remaining == 1 {
            messages.push("Only 1 more treasure to find!".to_string());
        } else {
            messages.push(format!("There are {} more treasures to find.", remaining));
        }
    }

    if state.monster.is_adjacent(here) {
        messages.push("You hear a deep growl nearby...".to_string());
    }

    (true, messages)
}

/// Map one line of user input to a turn. Boundary-blocked moves and junk input
/// leave the state untouched and keep the session alive; `q` stops with no
/// message of its own (the console loop owns the quit confirmation).
pub fn process_command(state: &mut GameState, raw: &str) -> (bool, Vec<String>) {
    let candidate = match parse_command(raw) {
        Command::Empty => return (true, vec!["What??".to_string()]),
        Command::Unknown => {
            return (true, vec!["I don't know what you mean".to_string()]);
        }
        Command::Quit => return (false, Vec::new()),
        Command::Left if state.player.x > 1 => {
            Some(Point::new(state.player.x - 1, state.player.y))
        }
        Command::Right if state.player.x < state.grid_size => {
            Some(Point::new(state.player.x + 1, state.player.y))
        }
        Command::Up if state.player.y > 1 => Some(Point::new(state.player.x, state.player.y - 1)),
        Command::Down if state.player.y < state.grid_size => {
            Some(Point::new(state.player.x, state.player.y + 1))
        }
        Command::Left | Command::Right | Command::Up | Command::Down => None,
    };
    match candidate {
        Some(destination) => enter_location(state, destination),
        None => (true, vec!["You can't move in that direction!".to_string()]),
    }
}
