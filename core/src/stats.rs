//! Aggregate statistics — pure functions of the current lattice.
//!
//! Nothing here is cached: every call reflects the grid at call time.

use crate::lattice::{CellState, Lattice};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatticeStats {
    pub affected_count:  u64,
    pub healthy_count:   u64,
    pub healthy_percent: f64,
}

pub fn compute(lattice: &Lattice) -> LatticeStats {
    let total = lattice.cell_count() as u64;
    let affected_count = lattice
        .cells()
        .iter()
        .filter(|&&c| c == CellState::Affected)
        .count() as u64;
    let healthy_percent = 100.0 * (1.0 - affected_count as f64 / total as f64);

    LatticeStats {
        affected_count,
        healthy_count: total - affected_count,
        healthy_percent,
    }
}
