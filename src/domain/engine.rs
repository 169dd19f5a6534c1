use rayon::prelude::*;
use tracing::trace;

use super::{Cell, Grid, Pattern, Rule, Topology};

/// Grids with at least this many cells step in parallel by default.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 100 * 100;

/// Stateless generation stepper.
///
/// Holds only configuration (edge policy, rule, when to go parallel). Every
/// operation is a function of the grid it is handed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LifeEngine {
    topology: Topology,
    rule: Rule,
    parallel_threshold: usize,
}

impl Default for LifeEngine {
    fn default() -> Self {
        Self::new(Topology::default())
    }
}

impl LifeEngine {
    pub fn new(topology: Topology) -> Self {
        Self {
            topology,
            rule: Rule::CONWAY,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rule = rule;
        self
    }

    /// Cell count at which `step` switches to the rayon path.
    /// `usize::MAX` keeps everything serial.
    pub fn with_parallel_threshold(mut self, cells: usize) -> Self {
        self.parallel_threshold = cells;
        self
    }

    pub const fn topology(&self) -> Topology {
        self.topology
    }

    pub const fn rule(&self) -> Rule {
        self.rule
    }

    /// Advance one generation, leaving `grid` untouched
    pub fn step(&self, grid: &Grid) -> Grid {
        let (rows, cols) = grid.dimensions();
        if rows * cols >= self.parallel_threshold {
            self.step_parallel(grid)
        } else {
            self.step_serial(grid)
        }
    }

    /// Pure functional evolution - returns new grid (serial)
    pub fn step_serial(&self, grid: &Grid) -> Grid {
        let (rows, cols) = grid.dimensions();
        let cells = grid
            .cells()
            .iter()
            .enumerate()
            .map(|(idx, &cell)| self.next_state(grid, idx / cols, idx % cols, cell))
            .collect();
        Grid::from_cells(rows, cols, cells)
    }

    /// Row-parallel evolution with rayon; same result as `step_serial`
    pub fn step_parallel(&self, grid: &Grid) -> Grid {
        let (rows, cols) = grid.dimensions();
        let mut cells = vec![Cell::Dead; rows * cols];
        cells
            .par_chunks_mut(cols)
            .enumerate()
            .for_each(|(row, out)| {
                let current = grid.cells();
                for (col, slot) in out.iter_mut().enumerate() {
                    *slot = self.next_state(grid, row, col, current[row * cols + col]);
                }
            });
        trace!(rows, cols, "parallel step");
        Grid::from_cells(rows, cols, cells)
    }

    #[inline]
    fn next_state(&self, grid: &Grid, row: usize, col: usize, cell: Cell) -> Cell {
        let neighbors = grid.count_live_neighbors(row, col, self.topology);
        self.rule.evolve(cell, neighbors)
    }

    /// Copy of `grid` with one cell flipped; out of bounds returns an
    /// unchanged copy
    pub fn toggle(&self, grid: &Grid, row: usize, col: usize) -> Grid {
        let mut next = grid.clone();
        next.toggle(row, col);
        next
    }

    /// Copy of `grid` with `pattern` stamped at `origin`
    pub fn place_pattern(&self, grid: &Grid, origin: (isize, isize), pattern: &Pattern) -> Grid {
        let mut next = grid.clone();
        self.place_pattern_in_place(&mut next, origin, pattern);
        next
    }

    /// Set alive every cell at `origin + offset`.
    ///
    /// Offsets that land off the grid are dropped under
    /// `Topology::Bounded` and wrapped under `Topology::Toroidal`. Returns
    /// how many offsets landed on the grid.
    pub fn place_pattern_in_place(
        &self,
        grid: &mut Grid,
        origin: (isize, isize),
        pattern: &Pattern,
    ) -> usize {
        let (rows, cols) = grid.dimensions();
        pattern
            .offsets
            .iter()
            .filter_map(|&(dr, dc)| {
                let row = self.resolve_signed(origin.0.checked_add(dr)?, rows)?;
                let col = self.resolve_signed(origin.1.checked_add(dc)?, cols)?;
                Some((row, col))
            })
            .filter(|&(row, col)| grid.set(row, col, Cell::Alive))
            .count()
    }

    fn resolve_signed(&self, index: isize, len: usize) -> Option<usize> {
        match self.topology {
            Topology::Bounded => usize::try_from(index).ok().filter(|&i| i < len),
            Topology::Toroidal => Some(index.rem_euclid(isize::try_from(len).ok()?) as usize),
        }
    }
}
