//! Snapshot serialization — full simulation state to/from JSON.
//!
//! A snapshot captures everything needed to resume a run at its
//! current generation: run identity, master seed, spread rate, the
//! counter, and the grid itself. Because draws are indexed by
//! (seed, generation, cell), a resumed run continues exactly as the
//! uninterrupted one would have.

use crate::{
    error::SimResult,
    lattice::Lattice,
    types::{Generation, RunId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub run_id:      RunId,
    pub seed:        u64,
    pub generation:  Generation,
    pub spread_rate: f64,
    pub lattice:     Lattice,
}

impl SimSnapshot {
    pub fn to_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
