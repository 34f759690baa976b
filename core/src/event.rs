//! Simulation events — everything a driver can observe about a run.
//!
//! RULE: The engine reports state changes ONLY through events.
//! Drivers render or log them; they never reach back into engine
//! internals between ticks.

use crate::types::{Generation, RunId};
use serde::{Deserialize, Serialize};

/// Every event emitted during simulation.
/// Variants are added over time — never removed or reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimEvent {
    RunInitialized {
        run_id: RunId,
        seed: u64,
        size: usize,
        seeded_cells: u64,
    },
    GenerationAdvanced {
        generation: Generation,
        converted: u64,
        affected_total: u64,
    },
    SpreadRateChanged {
        generation: Generation,
        old_rate: f64,
        new_rate: f64,
    },
    LatticeReset {
        generation: Generation,
    },
}

impl SimEvent {
    /// Stable string label for logs and wire payloads.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::RunInitialized { .. }    => "run_initialized",
            Self::GenerationAdvanced { .. } => "generation_advanced",
            Self::SpreadRateChanged { .. } => "spread_rate_changed",
            Self::LatticeReset { .. }      => "lattice_reset",
        }
    }
}
