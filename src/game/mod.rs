//! Core game model: grid points, random placement, session state, and turn
//! processing. Everything here is synchronous and I/O-free; the console loop
//! owns the single live [`GameState`] and feeds it one command at a time.

pub mod place;
pub mod point;
pub mod state;
pub mod turn;

pub use place::choose_unoccupied;
pub use point::Point;
pub use state::{GameState, Treasure, DEFAULT_GRID_SIZE, START};
pub use turn::{enter_location, process_command};
