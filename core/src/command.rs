use serde::{Deserialize, Serialize};

/// All driver-issued commands.
/// Variants are added over time — never removed or reordered.
///
/// The control surface (buttons, sliders, schedulers) lives outside
/// this crate; whatever it looks like, it talks to the engine through
/// these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum DriverCommand {
    /// Run this many generations back to back.
    Advance { generations: u64 },

    /// Store a new spread rate for subsequent ticks.
    SetSpreadRate { rate: f64 },

    /// Return the lattice to all-healthy, generation 0.
    Reset,
}
