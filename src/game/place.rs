//! Random, non-colliding placement of board entities.

use rand::rngs::StdRng;
use rand::Rng;

use super::point::Point;

/// Pick a uniformly random cell in `[1, grid_size]` on both axes that is not
/// already in `used`, record it in `used`, and return it.
///
/// Re-samples until it finds a free cell and never signals failure, so callers
/// must leave room on the board: at most `grid_size * grid_size` locations can
/// ever be requested, and config validation enforces that bound before a game
/// starts. On a saturated grid this loop would not terminate.
pub fn choose_unoccupied(rng: &mut StdRng, used: &mut Vec<Point>, grid_size: i32) -> Point {
    loop {
        let candidate = Point::new(rng.gen_range(1..=grid_size), rng.gen_range(1..=grid_size));
        if !used.contains(&candidate) {
            used.push(candidate);
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn chosen_cells_are_in_bounds_and_recorded() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut used = vec![Point::new(1, 1)];
        let p = choose_unoccupied(&mut rng, &mut used, 5);
        assert!((1..=5).contains(&p.x) && (1..=5).contains(&p.y));
        assert_eq!(used.len(), 2);
        assert_eq!(used[1], p);
    }

    #[test]
    fn never_repeats_a_used_cell() {
        // Fill a 3x3 board almost completely; the allocator must find the holes.
        let mut rng = StdRng::seed_from_u64(42);
        let mut used: Vec<Point> = Vec::new();
        for _ in 0..9 {
            choose_unoccupied(&mut rng, &mut used, 3);
        }
        let mut sorted: Vec<(i32, i32)> = used.iter().map(|p| (p.x, p.y)).collect();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 9, "all nine cells of a 3x3 grid, no repeats");
    }
}
