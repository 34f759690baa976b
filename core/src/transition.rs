//! The per-generation transition rule.
//!
//! RULES:
//!   - An affected cell stays affected. Spread is one-directional;
//!     there is no recovery and no death.
//!   - A healthy cell with zero affected neighbors stays healthy. The
//!     guard is explicit — it must hold even if the threshold formula
//!     ever stops being multiplicative in the neighbor count.
//!   - A healthy cell with k affected neighbors converts when its
//!     uniform draw lands below `rate * (k / 8)`.
//!
//! The next generation is computed wholly from a frozen snapshot of
//! the current one; the caller commits the result as a unit.

use crate::{
    error::{SimError, SimResult},
    lattice::{CellState, Lattice},
    rng::DrawSource,
    types::Generation,
};

/// Size of the 8-connected neighborhood, the denominator of the
/// infection threshold.
const NEIGHBORHOOD: f64 = 8.0;

/// Accepted spread rates are finite and in (0, 1]. Anything else is
/// rejected — never clamped.
pub fn validate_spread_rate(rate: f64) -> SimResult<f64> {
    if rate.is_finite() && rate > 0.0 && rate <= 1.0 {
        Ok(rate)
    } else {
        Err(SimError::InvalidParameter { rate })
    }
}

/// Compute the next generation's cells from the current lattice, its
/// neighbor-count field, and one draw per exposed cell. `generation`
/// is the generation being produced and indexes the draws, so the
/// result depends only on (lattice, counts, rate, generation, source)
/// — never on iteration order.
///
/// Returns the full replacement grid and the number of cells that
/// converted.
pub fn next_generation(
    lattice: &Lattice,
    counts: &[u8],
    rate: f64,
    generation: Generation,
    draws: &mut dyn DrawSource,
) -> SimResult<(Vec<CellState>, u64)> {
    let rate = validate_spread_rate(rate)?;
    debug_assert_eq!(counts.len(), lattice.cell_count());

    let mut next = Vec::with_capacity(lattice.cell_count());
    let mut converted: u64 = 0;

    for (index, (&cell, &k)) in lattice.cells().iter().zip(counts).enumerate() {
        let state = match (cell, k) {
            (CellState::Affected, _) => CellState::Affected,
            (CellState::Healthy, 0) => CellState::Healthy,
            (CellState::Healthy, k) => {
                let threshold = rate * (f64::from(k) / NEIGHBORHOOD);
                if draws.draw(generation, index) < threshold {
                    converted += 1;
                    CellState::Affected
                } else {
                    CellState::Healthy
                }
            }
        };
        next.push(state);
    }

    Ok((next, converted))
}
