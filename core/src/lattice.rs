//! Lattice state — the authoritative cell grid.
//!
//! RULE: Only the engine mutates the lattice, once per generation,
//! as a whole-grid replacement committed after every cell is resolved.
//! Everything else gets read access.

use crate::error::{SimError, SimResult};
use serde::{Deserialize, Serialize};

/// Default lattice side length.
pub const DEFAULT_SIZE: usize = 200;

/// State of a single lattice cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    Healthy,
    Affected,
}

/// A square grid of cell states, stored row-major.
/// Dimensions are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lattice {
    size:  usize,
    cells: Vec<CellState>,
}

impl Lattice {
    /// A fresh lattice with every cell healthy.
    pub fn all_healthy(size: usize) -> SimResult<Self> {
        if size == 0 {
            return Err(SimError::ZeroSize);
        }
        Ok(Self {
            size,
            cells: vec![CellState::Healthy; size * size],
        })
    }

    /// A fresh lattice seeded from an externally supplied mask.
    /// The mask must match the lattice side length exactly.
    pub fn from_mask(size: usize, mask: &SeedMask) -> SimResult<Self> {
        if size == 0 {
            return Err(SimError::ZeroSize);
        }
        if mask.size() != size {
            return Err(SimError::DimensionMismatch {
                expected: size * size,
                actual:   mask.cell_count(),
            });
        }
        let cells = mask
            .cells()
            .iter()
            .map(|&affected| {
                if affected {
                    CellState::Affected
                } else {
                    CellState::Healthy
                }
            })
            .collect();
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Cell state at (row, col). Out-of-bounds coordinates are an error,
    /// never a wrap or a default.
    pub fn get(&self, row: usize, col: usize) -> SimResult<CellState> {
        if row >= self.size || col >= self.size {
            return Err(SimError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(self.cells[row * self.size + col])
    }

    /// Row-major view of the whole grid.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Whole-grid replacement — the engine's commit step and reset.
    /// The replacement must have been computed for this lattice's size.
    pub(crate) fn replace_cells(&mut self, cells: Vec<CellState>) {
        debug_assert_eq!(cells.len(), self.cells.len());
        self.cells = cells;
    }
}

/// An externally supplied seed mask: `true` marks a cell that starts
/// the run affected. How the mask was produced (image thresholding,
/// hand-drawn, generated) is the supplier's business — the lattice
/// only checks dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedMask {
    size:  usize,
    cells: Vec<bool>,
}

impl SeedMask {
    pub fn new(size: usize, cells: Vec<bool>) -> SimResult<Self> {
        if size == 0 {
            return Err(SimError::ZeroSize);
        }
        if cells.len() != size * size {
            return Err(SimError::DimensionMismatch {
                expected: size * size,
                actual:   cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Number of cells the mask marks affected.
    pub fn seeded_count(&self) -> u64 {
        self.cells.iter().filter(|&&c| c).count() as u64
    }
}
