// lib.rs - Conway's Game of Life core
//
// Rules, applied to every cell from the same snapshot of the grid:
//   1. A live cell with fewer than two live neighbours dies.
//   2. A live cell with two or three live neighbours lives on.
//   3. A live cell with more than three live neighbours dies.
//   4. A dead cell with exactly three live neighbours becomes alive.
//
// The grid does not wrap: positions past an edge simply don't exist.

pub mod config;
pub mod error;
pub mod generation;
pub mod grid;
pub mod history;
pub mod patterns;
pub mod sink;

pub use config::{GridConfig, SeedPolicy};
pub use error::{Error, Result};
pub use generation::Generation;
pub use grid::{Cell, Grid};
pub use history::CycleDetector;
pub use patterns::{Pattern, PATTERNS};
pub use sink::{FrameSink, TermSink};
