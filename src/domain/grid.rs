use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use super::{Cell, Topology};

/// Random fill request: probability of a live cell plus the RNG seed
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Seed {
    pub density: f64,
    pub rng_seed: u64,
}

#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    ZeroDimension { rows: usize, cols: usize },
    #[error("grid of {rows}x{cols} cells does not fit in memory")]
    TooLarge { rows: usize, cols: usize },
    #[error("seed density must be within 0.0..=1.0, got {0}")]
    InvalidDensity(f64),
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("unexpected character {ch:?} in row {row}, use '#' or '.'")]
    BadCharacter { row: usize, ch: char },
}

/// Grid manages the 2D cellular automaton state.
///
/// Cells are addressed `(row, col)`, zero-based and stored row-major. The
/// dimensions are fixed for the lifetime of the value; resizing means
/// building a new grid.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::ZeroDimension { rows, cols });
        }
        let len = rows
            .checked_mul(cols)
            .ok_or(GridError::TooLarge { rows, cols })?;
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Dead; len],
        })
    }

    /// Create a grid where every cell is independently alive with
    /// probability `density`
    pub fn random<R: Rng>(
        rows: usize,
        cols: usize,
        density: f64,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(rows, cols)?;
        grid.randomize(density, rng)?;
        Ok(grid)
    }

    /// All-dead grid, or a reproducibly seeded one when `seed` is given
    pub fn initialize(rows: usize, cols: usize, seed: Option<Seed>) -> Result<Self, GridError> {
        match seed {
            None => Self::new(rows, cols),
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed.rng_seed);
                Self::random(rows, cols, seed.density, &mut rng)
            }
        }
    }

    /// Parse rows of `#` (alive) and `.` (dead)
    pub fn from_ascii(lines: &[&str]) -> Result<Self, GridError> {
        let cols = lines.first().map_or(0, |line| line.chars().count());
        let mut grid = Self::new(lines.len(), cols)?;
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(GridError::RaggedRow {
                    row,
                    found,
                    expected: cols,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '#' => Cell::Alive,
                    '.' => Cell::Dead,
                    _ => return Err(GridError::BadCharacter { row, ch }),
                };
                grid.set(row, col, cell);
            }
        }
        Ok(grid)
    }

    /// Grid dimensions as `(rows, cols)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Convert 2D coordinates to 1D index
    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Get cell at position, `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.contains(row, col)
            .then(|| self.cells[self.index(row, col)])
    }

    /// Set cell at position. Returns `false` (and does nothing) when out of
    /// bounds.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        if !self.contains(row, col) {
            return false;
        }
        let idx = self.index(row, col);
        self.cells[idx] = cell;
        true
    }

    /// Flip a cell in place. Out of bounds is a no-op returning `false`.
    pub fn toggle(&mut self, row: usize, col: usize) -> bool {
        match self.get(row, col) {
            Some(cell) => self.set(row, col, cell.toggle()),
            None => false,
        }
    }

    /// Borrow one row of cells
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        (row < self.rows).then(|| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// Count live cells in the Moore neighborhood of `(row, col)`.
    ///
    /// Only in-range indices are ever read; under `Topology::Bounded`
    /// neighbors past the edge simply do not count.
    pub fn count_live_neighbors(&self, row: usize, col: usize, topology: Topology) -> u8 {
        let mut count = 0;
        for dr in -1..=1isize {
            let Some(r) = topology.resolve(row, dr, self.rows) else {
                continue;
            };
            for dc in -1..=1isize {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let Some(c) = topology.resolve(col, dc, self.cols) else {
                    continue;
                };
                count += self.cells[self.index(r, c)].state();
            }
        }
        count
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Reseed every cell, alive with probability `density`
    pub fn randomize<R: Rng>(&mut self, density: f64, rng: &mut R) -> Result<(), GridError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(GridError::InvalidDensity(density));
        }
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(density)));
        Ok(())
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }

    /// Positions of every live cell, row-major
    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
    }

    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_dimensions() {
        assert_eq!(
            Grid::new(0, 5),
            Err(GridError::ZeroDimension { rows: 0, cols: 5 })
        );
        assert!(Grid::new(3, 0).is_err());
    }

    #[test]
    fn test_rejects_overflowing_dimensions() {
        assert_eq!(
            Grid::new(usize::MAX, 2),
            Err(GridError::TooLarge { rows: usize::MAX, cols: 2 })
        );
        assert!(matches!(
            Grid::initialize(usize::MAX / 2 + 1, 2, None),
            Err(GridError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(4, 7).unwrap();
        assert_eq!(grid.dimensions(), (4, 7));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_out_of_bounds_is_sentinel() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert_eq!(grid.get(3, 0), None);
        assert!(!grid.set(0, 3, Cell::Alive));
        assert!(!grid.toggle(10, 10));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_toggle_flips_single_cell() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert!(grid.toggle(1, 2));
        assert_eq!(grid.get(1, 2), Some(Cell::Alive));
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn test_count_neighbors_bounded_vs_toroidal() {
        let grid = Grid::from_ascii(&["#..", "...", "..#"]).unwrap();
        // Corner (0,0) only sees (2,2) through the wrap.
        assert_eq!(grid.count_live_neighbors(0, 0, Topology::Bounded), 0);
        assert_eq!(grid.count_live_neighbors(0, 0, Topology::Toroidal), 1);
        assert_eq!(grid.count_live_neighbors(1, 1, Topology::Bounded), 2);
    }

    #[test]
    fn test_random_density_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        let full = Grid::random(5, 5, 1.0, &mut rng).unwrap();
        assert_eq!(full.population(), 25);
        let empty = Grid::random(5, 5, 0.0, &mut rng).unwrap();
        assert!(empty.is_empty());
        assert_eq!(
            Grid::random(5, 5, 1.5, &mut rng),
            Err(GridError::InvalidDensity(1.5))
        );
    }

    #[test]
    fn test_random_is_reproducible() {
        let a = Grid::random(20, 20, 0.3, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = Grid::random(20, 20, 0.3, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_initialize_with_and_without_seed() {
        assert!(Grid::initialize(6, 6, None).unwrap().is_empty());
        let seed = Seed { density: 0.3, rng_seed: 5 };
        let a = Grid::initialize(30, 30, Some(seed)).unwrap();
        assert_eq!(a, Grid::initialize(30, 30, Some(seed)).unwrap());
        assert!(a.population() > 0 && a.population() < 900);
    }

    #[test]
    fn test_from_ascii_validation() {
        assert!(matches!(
            Grid::from_ascii(&["##", "#"]),
            Err(GridError::RaggedRow { row: 1, .. })
        ));
        assert!(matches!(
            Grid::from_ascii(&["#x"]),
            Err(GridError::BadCharacter { row: 0, ch: 'x' })
        ));
    }

    #[test]
    fn test_iter_alive_row_major() {
        let grid = Grid::from_ascii(&[".#", "#."]).unwrap();
        let alive: Vec<_> = grid.iter_alive().collect();
        assert_eq!(alive, vec![(0, 1), (1, 0)]);
    }
}
