use life_engine::application::Viewport;
use life_engine::domain::{Cell, Grid, LifeEngine, Topology, presets};
use proptest::prelude::*;

fn grid_from_bits(rows: usize, cols: usize, bits: &[bool]) -> Grid {
    let mut grid = Grid::new(rows, cols).unwrap();
    for (idx, &alive) in bits.iter().enumerate() {
        grid.set(idx / cols, idx % cols, Cell::from(alive));
    }
    grid
}

fn arb_grid() -> impl Strategy<Value = Grid> {
    (1usize..24, 1usize..24).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(any::<bool>(), rows * cols)
            .prop_map(move |bits| grid_from_bits(rows, cols, &bits))
    })
}

fn arb_topology() -> impl Strategy<Value = Topology> {
    prop_oneof![Just(Topology::Bounded), Just(Topology::Toroidal)]
}

/// Reference count that never relies on the grid's own neighbor logic
fn naive_count(grid: &Grid, row: usize, col: usize, topology: Topology) -> u8 {
    let (rows, cols) = grid.dimensions();
    let mut count = 0;
    for dr in [-1i64, 0, 1] {
        for dc in [-1i64, 0, 1] {
            if dr == 0 && dc == 0 {
                continue;
            }
            let (r, c) = (row as i64 + dr, col as i64 + dc);
            let (r, c) = match topology {
                Topology::Toroidal => (r.rem_euclid(rows as i64), c.rem_euclid(cols as i64)),
                Topology::Bounded => (r, c),
            };
            if r < 0 || c < 0 {
                continue;
            }
            if grid.get(r as usize, c as usize) == Some(Cell::Alive) {
                count += 1;
            }
        }
    }
    count
}

proptest! {
    #[test]
    fn dead_grid_stays_dead(rows in 1usize..40, cols in 1usize..40, steps in 1usize..6, topology in arb_topology()) {
        let engine = LifeEngine::new(topology);
        let grid = (0..steps).fold(Grid::new(rows, cols).unwrap(), |grid, _| engine.step(&grid));
        prop_assert!(grid.is_empty());
    }

    #[test]
    fn step_matches_reference(grid in arb_grid(), topology in arb_topology()) {
        let engine = LifeEngine::new(topology);
        let next = engine.step(&grid);
        prop_assert_eq!(next.dimensions(), grid.dimensions());
        for (row, col, cell) in grid.iter_cells() {
            let n = naive_count(&grid, row, col, topology);
            let expected = matches!((cell, n), (Cell::Alive, 2 | 3) | (Cell::Dead, 3));
            prop_assert_eq!(next.get(row, col), Some(Cell::from(expected)));
        }
    }

    #[test]
    fn serial_and_parallel_agree(grid in arb_grid(), topology in arb_topology()) {
        let engine = LifeEngine::new(topology);
        prop_assert_eq!(engine.step_serial(&grid), engine.step_parallel(&grid));
    }

    #[test]
    fn double_toggle_restores(grid in arb_grid(), row in 0usize..30, col in 0usize..30) {
        let engine = LifeEngine::default();
        let twice = engine.toggle(&engine.toggle(&grid, row, col), row, col);
        prop_assert_eq!(twice, grid);
    }

    #[test]
    fn bounded_placement_never_panics(row in -1000isize..1000, col in -1000isize..1000) {
        let engine = LifeEngine::new(Topology::Bounded);
        let grid = Grid::new(12, 12).unwrap();
        let placed = engine.place_pattern(&grid, (row, col), &presets::pulsar());
        for (r, c) in placed.iter_alive() {
            let offset = (r as isize - row, c as isize - col);
            prop_assert!(presets::pulsar().offsets.contains(&offset));
        }
    }

    #[test]
    fn viewport_offset_stays_in_bounds(pans in prop::collection::vec((-3000.0f32..3000.0, -3000.0f32..3000.0), 1..20)) {
        let mut viewport = Viewport::centered(500, 500, 10.0, 800.0, 600.0);
        let (max_x, max_y) = viewport.max_offset();
        for (dx, dy) in pans {
            viewport.pan(dx, dy);
            let (x, y) = viewport.offset();
            prop_assert!((0.0..=max_x).contains(&x));
            prop_assert!((0.0..=max_y).contains(&y));
            let visible = viewport.visible_cells().unwrap();
            prop_assert!(*visible.rows.end() < 500 && *visible.cols.end() < 500);
        }
    }
}

#[test]
fn isolated_cell_dies_under_both_policies() {
    for topology in [Topology::Bounded, Topology::Toroidal] {
        let mut grid = Grid::new(6, 6).unwrap();
        grid.toggle(0, 0);
        assert!(LifeEngine::new(topology).step(&grid).is_empty());
    }
}

#[test]
fn block_is_still_life_under_both_policies() {
    for topology in [Topology::Bounded, Topology::Toroidal] {
        let engine = LifeEngine::new(topology);
        let grid = engine.place_pattern(&Grid::new(8, 8).unwrap(), (3, 3), &presets::block());
        assert_eq!(engine.step(&grid), grid);
    }
}

#[test]
fn glider_moves_one_diagonal_every_four_generations() {
    let engine = LifeEngine::new(Topology::Toroidal);
    let empty = Grid::new(20, 20).unwrap();
    let mut grid = engine.place_pattern(&empty, (5, 5), &presets::glider());
    for _ in 0..4 {
        grid = engine.step(&grid);
    }
    let expected: Vec<_> = presets::glider()
        .offsets
        .iter()
        .map(|&(dr, dc)| ((5 + 1 + dr) as usize, (5 + 1 + dc) as usize))
        .collect();
    let mut alive: Vec<_> = grid.iter_alive().collect();
    let mut expected_sorted = expected.clone();
    alive.sort();
    expected_sorted.sort();
    assert_eq!(alive, expected_sorted);
}
