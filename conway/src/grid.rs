// grid.rs - Toroidal grid for Conway's Game of Life

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use log::trace;
use rand::Rng;

use crate::error::{Error, Result};
use crate::pattern::{ALIVE, DEAD};

// Default grid size
pub const ROW_COUNT: usize = 40;
pub const COLUMN_COUNT: usize = 40;

/// Dimensions of a grid. Fixed for the lifetime of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
}

impl GridConfig {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    pub(crate) fn check(&self, row: usize, col: usize) -> Result<()> {
        if self.contains(row, col) {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(ROW_COUNT, COLUMN_COUNT)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    pub fn toggled(self) -> Self {
        match self {
            CellState::Alive => CellState::Dead,
            CellState::Dead => CellState::Alive,
        }
    }

    /// Conway's rule: B3/S23.
    pub fn next(self, live_neighbors: usize) -> Self {
        match (self, live_neighbors) {
            (CellState::Alive, 2) | (CellState::Alive, 3) => CellState::Alive, // Survival
            (CellState::Dead, 3) => CellState::Alive,                          // Birth
            _ => CellState::Dead,                                              // Death or stays dead
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive { CellState::Alive } else { CellState::Dead }
    }
}

/// Fixed-size grid whose edges wrap around in both axes.
///
/// Cells are stored row-major. A second buffer holds the generation being
/// computed and is swapped in once every cell has been evaluated, so each
/// step reads only the previous generation.
#[derive(Debug, Clone)]
pub struct Grid {
    config: GridConfig,
    cells: Vec<CellState>,
    next: Vec<CellState>,
}

impl Grid {
    /// Returns an all-dead grid.
    pub fn new(config: GridConfig) -> Self {
        let len = config.rows * config.cols;
        Self {
            config,
            cells: vec![CellState::Dead; len],
            next: vec![CellState::Dead; len],
        }
    }

    /// Returns a grid where every cell is independently alive with
    /// probability 1/2.
    pub fn random<R: Rng + ?Sized>(config: GridConfig, rng: &mut R) -> Self {
        let mut grid = Self::new(config);
        for cell in &mut grid.cells {
            *cell = rng.gen_bool(0.5).into();
        }
        grid
    }

    /// Returns a grid with exactly the given cells alive.
    pub fn with_alive<I>(config: GridConfig, alive: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::new(config);
        for (row, col) in alive {
            grid.set(row, col, CellState::Alive)?;
        }
        Ok(grid)
    }

    pub fn config(&self) -> GridConfig {
        self.config
    }
    pub fn rows(&self) -> usize {
        self.config.rows
    }
    pub fn cols(&self) -> usize {
        self.config.cols
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.config.cols + col
    }

    pub fn get(&self, row: usize, col: usize) -> Result<CellState> {
        self.config.check(row, col)?;
        Ok(self.cells[self.index(row, col)])
    }

    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> Result<()> {
        self.config.check(row, col)?;
        let index = self.index(row, col);
        self.cells[index] = state;
        Ok(())
    }

    pub fn toggle(&mut self, row: usize, col: usize) -> Result<()> {
        self.config.check(row, col)?;
        let index = self.index(row, col);
        self.cells[index] = self.cells[index].toggled();
        Ok(())
    }

    /// Number of alive cells among the 8 neighbors of `(row, col)`, wrapping
    /// at the edges.
    pub fn live_neighbors(&self, row: usize, col: usize) -> Result<usize> {
        self.config.check(row, col)?;
        Ok(self.count_neighbors(row, col))
    }

    fn count_neighbors(&self, row: usize, col: usize) -> usize {
        let GridConfig { rows, cols } = self.config;

        let mut count = 0;
        for dr in [-1isize, 0, 1] {
            for dc in [-1isize, 0, 1] {
                if dr == 0 && dc == 0 {
                    continue;
                }
                // On a 1-wide axis the wrapped neighbors land on the cell itself.
                let nr = (row + rows).wrapping_add_signed(dr) % rows;
                let nc = (col + cols).wrapping_add_signed(dc) % cols;
                if self.cells[self.index(nr, nc)].is_alive() {
                    count += 1;
                }
            }
        }
        count
    }

    /// Advances the grid by one generation.
    pub fn step(&mut self) {
        for row in 0..self.config.rows {
            for col in 0..self.config.cols {
                let index = self.index(row, col);
                let count = self.count_neighbors(row, col);
                self.next[index] = self.cells[index].next(count);
            }
        }
        std::mem::swap(&mut self.cells, &mut self.next);
        trace!("stepped grid, population {}", self.population());
    }

    pub fn clear(&mut self) {
        self.cells.fill(CellState::Dead);
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Coordinates of alive cells in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.config.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(move |(index, _)| (index / cols, index % cols))
    }

    /// Rows of the grid, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[CellState]> + '_ {
        // `max(1)` keeps `chunks` valid for a zero-column grid.
        self.cells.chunks(self.config.cols.max(1))
    }

    pub fn state_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.config.hash(&mut hasher);
        self.cells.hash(&mut hasher);
        hasher.finish()
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config && self.cells == other.cells
    }
}

impl Eq for Grid {}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let c = if cell.is_alive() { ALIVE } else { DEAD };
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn alive_set(grid: &Grid) -> Vec<(usize, usize)> {
        grid.alive_cells().collect()
    }

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(GridConfig::default());
        assert_eq!(grid.rows(), ROW_COUNT);
        assert_eq!(grid.cols(), COLUMN_COUNT);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = Grid::new(GridConfig::new(4, 5));
        assert!(matches!(
            grid.get(4, 0),
            Err(Error::OutOfBounds { row: 4, col: 0, rows: 4, cols: 5 })
        ));
        assert!(matches!(grid.toggle(0, 5), Err(Error::OutOfBounds { .. })));
        assert!(matches!(
            grid.set(9, 9, CellState::Alive),
            Err(Error::OutOfBounds { .. })
        ));
        assert!(grid.get(3, 4).is_ok());
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut grid = Grid::random(GridConfig::new(8, 8), &mut rng);
        let before = grid.clone();

        grid.toggle(3, 6).unwrap();
        assert_ne!(grid.get(3, 6).unwrap(), before.get(3, 6).unwrap());
        grid.toggle(3, 6).unwrap();
        assert_eq!(grid, before);
    }

    #[test]
    fn test_corner_neighbors_wrap() {
        let config = GridConfig::default();
        let grid = Grid::with_alive(config, [(0, 0), (ROW_COUNT - 1, COLUMN_COUNT - 1)]).unwrap();
        assert_eq!(grid.live_neighbors(0, 0).unwrap(), 1);
        assert_eq!(grid.live_neighbors(ROW_COUNT - 1, COLUMN_COUNT - 1).unwrap(), 1);
    }

    #[test]
    fn test_lone_cell_on_single_row_sees_itself() {
        // Above and below wrap onto the cell itself.
        let mut grid = Grid::with_alive(GridConfig::new(1, 5), [(0, 2)]).unwrap();
        assert_eq!(grid.live_neighbors(0, 2).unwrap(), 2);
        grid.step();
        assert_eq!(grid.get(0, 2).unwrap(), CellState::Alive);

        let mut grid = Grid::with_alive(GridConfig::new(5, 1), [(2, 0)]).unwrap();
        assert_eq!(grid.live_neighbors(2, 0).unwrap(), 2);
        grid.step();
        // Its vertical neighbors see it three times over and are born.
        assert_eq!(grid.alive_cells().collect::<Vec<_>>(), vec![(1, 0), (2, 0), (3, 0)]);

        let grid = Grid::with_alive(GridConfig::new(1, 1), [(0, 0)]).unwrap();
        assert_eq!(grid.live_neighbors(0, 0).unwrap(), 8);
    }

    #[test]
    fn test_blinker_wraps_across_edge() {
        // Horizontal blinker on the top row turns vertical through the bottom row.
        let mut grid = Grid::with_alive(GridConfig::new(5, 5), [(0, 0), (0, 1), (0, 2)]).unwrap();
        grid.step();
        assert_eq!(alive_set(&grid), vec![(0, 1), (1, 1), (4, 1)]);
        grid.step();
        assert_eq!(alive_set(&grid), vec![(0, 0), (0, 1), (0, 2)]);
    }

    #[test]
    fn test_glider_one_generation() {
        let mut grid =
            Grid::with_alive(GridConfig::default(), [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]).unwrap();
        grid.step();
        assert_eq!(alive_set(&grid), vec![(1, 0), (1, 2), (2, 1), (2, 2), (3, 1)]);
    }

    #[test]
    fn test_block_is_still_life() {
        let mut grid = Grid::with_alive(GridConfig::new(6, 6), [(2, 2), (2, 3), (3, 2), (3, 3)]).unwrap();
        let before = grid.clone();
        grid.step();
        assert_eq!(grid, before);
    }

    #[test]
    fn test_random_is_seeded() {
        let config = GridConfig::default();
        let a = Grid::random(config, &mut StdRng::seed_from_u64(42));
        let b = Grid::random(config, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
        assert_eq!(a.state_hash(), b.state_hash());

        // 1600 fair coin flips: expected 800, standard deviation 20.
        let population = a.population();
        assert!((600..=1000).contains(&population), "population {}", population);
    }

    #[test]
    fn test_display() {
        let grid = Grid::with_alive(GridConfig::new(2, 3), [(0, 1), (1, 2)]).unwrap();
        assert_eq!(grid.to_string(), ".X.\n..X");
    }

    #[test]
    fn test_clear() {
        let mut grid = Grid::random(GridConfig::new(6, 7), &mut StdRng::seed_from_u64(3));
        grid.clear();
        assert_eq!(grid.population(), 0);
    }

    /// Neighbor count computed independently with signed arithmetic.
    fn reference_neighbors(cells: &[Vec<bool>], row: usize, col: usize) -> usize {
        let rows = cells.len() as i64;
        let cols = cells[0].len() as i64;
        let mut count = 0;
        for dr in -1..=1i64 {
            for dc in -1..=1i64 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let r = (row as i64 + dr).rem_euclid(rows) as usize;
                let c = (col as i64 + dc).rem_euclid(cols) as usize;
                if cells[r][c] {
                    count += 1;
                }
            }
        }
        count
    }

    fn arb_cells() -> impl Strategy<Value = Vec<Vec<bool>>> {
        (1..10usize, 1..10usize).prop_flat_map(|(rows, cols)| {
            prop::collection::vec(prop::collection::vec(any::<bool>(), cols), rows)
        })
    }

    proptest! {
        #[test]
        fn test_step_follows_rule(cells in arb_cells()) {
            let config = GridConfig::new(cells.len(), cells[0].len());
            let alive = cells.iter().enumerate().flat_map(|(r, row)| {
                row.iter().enumerate().filter(|(_, a)| **a).map(move |(c, _)| (r, c))
            });
            let mut grid = Grid::with_alive(config, alive).unwrap();
            let mut again = grid.clone();
            grid.step();
            again.step();
            prop_assert_eq!(&grid, &again);

            for (r, row) in cells.iter().enumerate() {
                for (c, &was_alive) in row.iter().enumerate() {
                    let n = reference_neighbors(&cells, r, c);
                    let expected = if was_alive { n == 2 || n == 3 } else { n == 3 };
                    prop_assert_eq!(grid.get(r, c).unwrap().is_alive(), expected);
                }
            }
        }
    }
}
