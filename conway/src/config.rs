// config.rs - Grid construction parameters

use crate::error::{Error, Result};
use crate::grid::Cell;

/// How the first generation is populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedPolicy {
    /// Every cell independently alive with probability 0.5.
    /// A fixed `seed` makes the layout reproducible.
    Random { seed: Option<u64> },
    /// Cells consumed in row-major order; positions past the end are dead.
    Fixed(Vec<Cell>),
}

impl Default for SeedPolicy {
    fn default() -> Self {
        SeedPolicy::Random { seed: None }
    }
}

/// Everything `Grid::initialize` needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
    pub seed: SeedPolicy,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::square(10, SeedPolicy::default())
    }
}

impl GridConfig {
    pub fn new(width: usize, height: usize, seed: SeedPolicy) -> Self {
        Self { width, height, seed }
    }

    /// Same size in both directions.
    pub fn square(size: usize, seed: SeedPolicy) -> Self {
        Self::new(size, size, seed)
    }

    /// Builds a config from signed input, rejecting anything that isn't
    /// a positive `usize`.
    pub fn from_signed(width: i64, height: i64, seed: SeedPolicy) -> Result<Self> {
        let invalid = || Error::InvalidDimension { width, height };
        let w = usize::try_from(width).map_err(|_| invalid())?;
        let h = usize::try_from(height).map_err(|_| invalid())?;
        cell_count(w, h)?;
        Ok(Self::new(w, h, seed))
    }

    /// Checks the dimensions and returns the number of cells.
    pub(crate) fn validate(&self) -> Result<usize> {
        cell_count(self.width, self.height)
    }
}

/// `width * height`, or `InvalidDimension` if either is zero or the
/// product doesn't fit in a `usize`.
pub fn cell_count(width: usize, height: usize) -> Result<usize> {
    match width.checked_mul(height) {
        Some(count) if count > 0 => Ok(count),
        _ => Err(Error::InvalidDimension {
            width: i64::try_from(width).unwrap_or(i64::MAX),
            height: i64::try_from(height).unwrap_or(i64::MAX),
        }),
    }
}
