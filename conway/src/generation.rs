// generation.rs - A grid paired with its generation number

use crate::grid::Grid;

/// The current grid and how many steps produced it.
/// Stepping replaces the grid; no history is kept.
#[derive(Debug, Clone)]
pub struct Generation {
    index: u64,
    grid: Grid,
}

impl Generation {
    pub fn new(grid: Grid) -> Self {
        Self { index: 0, grid }
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Replaces the grid with its successor.
    pub fn advance(&mut self) {
        self.grid = self.grid.step();
        self.index += 1;
    }

    /// Text written to the screen for this generation: a header line, then the grid.
    pub fn frame(&self) -> String {
        format!("Generation {}\n{}", self.index, self.grid.render())
    }
}
