use crate::lattice::DEFAULT_SIZE;
use serde::{Deserialize, Serialize};

/// Run configuration: everything a driver chooses before the first tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Lattice side length.
    pub size: usize,
    /// Initial spread rate, (0, 1].
    pub spread_rate: f64,
    /// Master seed for every draw in the run.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            size:        DEFAULT_SIZE,
            spread_rate: 0.5,
            seed:        42,
        }
    }
}

impl SimConfig {
    /// Load from a JSON file.
    /// In tests, use SimConfig::default_test().
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Config with hardcoded defaults for use in tests: a lattice small
    /// enough to eyeball, a rate high enough that spread is visible
    /// within a few generations.
    pub fn default_test() -> Self {
        Self {
            size:        16,
            spread_rate: 0.8,
            seed:        42,
        }
    }
}
