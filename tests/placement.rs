use gridhunt::game::{GameState, Point};

fn names() -> Vec<String> {
    ["coin", "gem", "chalice", "crown", "scepter", "orb"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn occupied_cells(gs: &GameState) -> Vec<Point> {
    let mut cells = vec![gs.player, gs.monster];
    for t in &gs.treasures {
        cells.push(t.location.expect("fresh board, nothing found yet"));
    }
    cells
}

#[test]
fn every_seed_places_all_entities_on_distinct_cells() {
    for seed in 0..200 {
        let gs = GameState::new(seed, 5, &names());
        let cells = occupied_cells(&gs);
        for i in 0..cells.len() {
            for j in (i + 1)..cells.len() {
                assert_ne!(
                    cells[i], cells[j],
                    "seed {} placed two entities on {}",
                    seed, cells[i]
                );
            }
        }
    }
}

#[test]
fn every_placement_is_inside_the_board() {
    for seed in 0..200 {
        for grid_size in [2, 3, 5, 8] {
            // Keep the treasure list within the board's capacity.
            let count = ((grid_size * grid_size - 2) as usize).min(6);
            let gs = GameState::new(seed, grid_size, &names()[..count]);
            for cell in occupied_cells(&gs) {
                assert!(
                    (1..=grid_size).contains(&cell.x) && (1..=grid_size).contains(&cell.y),
                    "seed {} grid {} put an entity at {}",
                    seed,
                    grid_size,
                    cell
                );
            }
        }
    }
}

#[test]
fn monster_and_treasures_avoid_the_start_cell() {
    let start = Point::new(1, 1);
    for seed in 0..200 {
        let gs = GameState::new(seed, 5, &names());
        assert_eq!(gs.player, start);
        assert_ne!(gs.monster, start, "seed {} put the monster on the start", seed);
        for t in &gs.treasures {
            assert_ne!(
                t.location,
                Some(start),
                "seed {} hid {} on the start cell",
                seed,
                t.name
            );
        }
    }
}

#[test]
fn the_same_seed_rebuilds_the_same_board() {
    let a = GameState::new(0xC0FFEE, 5, &names());
    let b = GameState::new(0xC0FFEE, 5, &names());
    assert_eq!(a.player, b.player);
    assert_eq!(a.monster, b.monster);
    assert_eq!(a.treasures.len(), b.treasures.len());
    for (ta, tb) in a.treasures.iter().zip(&b.treasures) {
        assert_eq!(ta.name, tb.name);
        assert_eq!(ta.location, tb.location);
    }
}
