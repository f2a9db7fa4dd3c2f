// grid.rs - Grid types for Conway's Game of Life

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::config::{GridConfig, SeedPolicy};
use crate::error::Result;

/// Glyph drawn for a live cell.
pub const ALIVE_GLYPH: char = 'o';
/// Glyph drawn for a dead cell.
pub const DEAD_GLYPH: char = ' ';

/// Relative positions of the eight cells surrounding a cell.
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// State of this cell in the next generation given its live neighbour count.
    #[rustfmt::skip]
    pub fn next(self, live_neighbors: u8) -> Cell {
        match (self, live_neighbors) {
            (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,  // Survival
            (Cell::Dead, 3)                     => Cell::Alive,  // Birth
            _                                   => Cell::Dead,   // Under/overpopulation or stays dead
        }
    }

    #[rustfmt::skip]
    pub fn glyph(self) -> char {
        match self {
            Cell::Alive => ALIVE_GLYPH,
            Cell::Dead  => DEAD_GLYPH,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// A fixed-size, non-wrapping grid of cells stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds the first generation from `config`.
    ///
    /// Fails with `Error::InvalidDimension` if either dimension is zero or
    /// the grid has more cells than a `usize` can count.
    pub fn initialize(config: &GridConfig) -> Result<Self> {
        let len = config.validate()?;

        let cells: Vec<Cell> = match &config.seed {
            SeedPolicy::Random { seed } => {
                let mut rng = match seed {
                    Some(seed) => ChaCha8Rng::seed_from_u64(*seed),
                    None => ChaCha8Rng::from_entropy(),
                };
                (0..len).map(|_| Cell::from(rng.gen_bool(0.5))).collect()
            }
            SeedPolicy::Fixed(supplied) => supplied
                .iter()
                .copied()
                .chain(std::iter::repeat(Cell::Dead))
                .take(len)
                .collect(),
        };

        let grid = Self { width: config.width, height: config.height, cells };
        debug!(
            width = grid.width,
            height = grid.height,
            population = grid.population(),
            "grid initialized"
        );
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// # Panics
    /// If `(row, col)` lies outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// In-bounds positions adjacent to `(row, col)`: 8 for interior cells,
    /// 5 along an edge, 3 in a corner (fewer on grids thinner than 3).
    pub fn neighbor_positions(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < self.height && c < self.width).then_some((r, c))
        })
    }

    /// # Panics
    /// If `(row, col)` lies outside the grid.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        self.check_bounds(row, col);
        self.neighbor_positions(row, col)
            .filter(|&(r, c)| self.get(r, c).is_alive())
            .count() as u8
    }

    /// Computes the next generation. Every decision reads `self`, never the
    /// grid being built, so updates are synchronous.
    pub fn step(&self) -> Grid {
        let mut cells = Vec::with_capacity(self.cells.len());
        for row in 0..self.height {
            for col in 0..self.width {
                let count = self.count_live_neighbors(row, col);
                cells.push(self.get(row, col).next(count));
            }
        }

        let next = Grid { width: self.width, height: self.height, cells };
        debug!(population = next.population(), "stepped");
        next
    }

    /// One line per row, cells separated by a single space, each row
    /// newline-terminated.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.height * self.width * 2);
        for row in self.cells.chunks(self.width) {
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    out.push(' ');
                }
                out.push(cell.glyph());
            }
            out.push('\n');
        }
        out
    }

    fn index(&self, row: usize, col: usize) -> usize {
        self.check_bounds(row, col);
        row * self.width + col
    }

    fn check_bounds(&self, row: usize, col: usize) {
        assert!(
            row < self.height && col < self.width,
            "position ({row}, {col}) outside {}x{} grid",
            self.width,
            self.height
        );
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
