//! Session state: player, monster, treasures, and the win/lose bookkeeping.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::place::choose_unoccupied;
use super::point::Point;

/// Default side length of the square board.
pub const DEFAULT_GRID_SIZE: i32 = 5;

/// The cell every game starts from.
pub const START: Point = Point { x: 1, y: 1 };

/// A named treasure. `location` becomes `None` once found and is never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Treasure {
    pub name: String,
    pub location: Option<Point>,
}

/// The single mutable aggregate for one game session. Created once at startup,
/// mutated turn-by-turn by the command processor, discarded when the session
/// ends. Fields are public so tests can build exact board layouts directly.
#[derive(Debug, Clone)]
pub struct GameState {
    pub grid_size: i32,
    pub player: Point,
    /// Fixed for the whole session; the monster never moves.
    pub monster: Point,
    /// Insertion order is the canonical treasure list.
    pub treasures: Vec<Treasure>,
    /// Always equals the number of treasures whose location is `None`.
    pub found_count: usize,
}

impl GameState {
    /// Build a fresh session: player at (1, 1), then monster, then each treasure
    /// in input order, all on distinct random cells. Callers draw `seed` from
    /// `rand::thread_rng()` for normal play or pin it for reproducible boards.
    pub fn new(seed: u64, grid_size: i32, treasure_names: &[String]) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut used = vec![START];
        let monster = choose_unoccupied(&mut rng, &mut used, grid_size);
        let treasures = treasure_names
            .iter()
            .map(|name| Treasure {
                name: name.clone(),
                location: Some(choose_unoccupied(&mut rng, &mut used, grid_size)),
            })
            .collect();
        GameState {
            grid_size,
            player: START,
            monster,
            treasures,
            found_count: 0,
        }
    }

    pub fn all_treasures_found(&self) -> bool {
        self.found_count == self.treasures.len()
    }

    pub fn remaining(&self) -> usize {
        self.treasures.len() - self.found_count
    }
}
