// error.rs - Errors raised while building a grid

use thiserror::Error;

/// Errors from the Game of Life core.
///
/// Only construction can fail; stepping, rendering and neighbour counting
/// are total over a valid grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Width or height was zero or negative.
    #[error("invalid grid dimension: {width}x{height} (both must be positive)")]
    InvalidDimension { width: i64, height: i64 },
}

pub type Result<T> = std::result::Result<T, Error>;
