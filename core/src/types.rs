//! Shared primitive types used across the entire simulation.

/// A simulation generation. One generation = one whole-lattice update.
pub type Generation = u64;

/// The canonical run identifier.
pub type RunId = String;
