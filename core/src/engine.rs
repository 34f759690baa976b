//! The simulation engine — owns the lattice and drives generations.
//!
//! TICK SHAPE (fixed, never reordered):
//!   1. Count affected neighbors over the frozen current grid.
//!   2. Resolve every cell against its coordinate-indexed draw.
//!   3. Commit: swap in the next grid, increment the generation counter.
//!
//! RULES:
//!   - Every cell resolves against the prior generation's snapshot only.
//!   - A tick either completes fully or leaves the current generation
//!     untouched. There is no partially applied grid.
//!   - All randomness flows through the engine's DrawSource.
//!   - The engine has no notion of wall-clock time, timers, pause, or
//!     speed. Pacing belongs to the external driver.

use crate::{
    command::DriverCommand,
    config::SimConfig,
    error::SimResult,
    event::SimEvent,
    lattice::{CellState, Lattice, SeedMask},
    neighbors,
    rng::{DrawSource, SeededDraws},
    snapshot::SimSnapshot,
    stats::{self, LatticeStats},
    transition,
    types::{Generation, RunId},
};

pub struct SimEngine {
    pub run_id:  RunId,
    seed:        u64,
    spread_rate: f64,
    generation:  Generation,
    lattice:     Lattice,
    draws:       Box<dyn DrawSource>,
}

impl SimEngine {
    /// Build a fresh engine at generation 0. With a mask, the lattice
    /// starts from it; without one, all cells start healthy.
    pub fn new(run_id: RunId, config: &SimConfig, mask: Option<&SeedMask>) -> SimResult<Self> {
        let spread_rate = transition::validate_spread_rate(config.spread_rate)?;
        let lattice = match mask {
            Some(mask) => Lattice::from_mask(config.size, mask)?,
            None => Lattice::all_healthy(config.size)?,
        };
        Ok(Self {
            run_id,
            seed: config.seed,
            spread_rate,
            generation: 0,
            lattice,
            draws: Box::new(SeededDraws::new(config.seed)),
        })
    }

    /// Engine over the test config. Used throughout the test suite.
    pub fn build_test(run_id: RunId) -> SimResult<Self> {
        Self::new(run_id, &SimConfig::default_test(), None)
    }

    /// Swap in a non-default draw source. Deterministic tests use this
    /// to force or forbid every conversion.
    pub fn with_draws(mut self, draws: Box<dyn DrawSource>) -> Self {
        self.draws = draws;
        self
    }

    /// Rebuild an engine from a snapshot, resuming at its generation.
    pub fn from_snapshot(snapshot: SimSnapshot) -> SimResult<Self> {
        let spread_rate = transition::validate_spread_rate(snapshot.spread_rate)?;
        Ok(Self {
            run_id:     snapshot.run_id,
            seed:       snapshot.seed,
            spread_rate,
            generation: snapshot.generation,
            lattice:    snapshot.lattice,
            draws:      Box::new(SeededDraws::new(snapshot.seed)),
        })
    }

    /// Advance one generation. This is the core simulation step.
    pub fn advance_generation(&mut self) -> SimResult<SimEvent> {
        let counts = neighbors::affected_neighbor_counts(&self.lattice);
        let next_gen = self.generation + 1;
        let (next_cells, converted) = transition::next_generation(
            &self.lattice,
            &counts,
            self.spread_rate,
            next_gen,
            self.draws.as_mut(),
        )?;

        // Commit point: nothing above mutates the engine.
        self.lattice.replace_cells(next_cells);
        self.generation = next_gen;

        let affected_total = stats::compute(&self.lattice).affected_count;
        log::debug!(
            "gen={next_gen} converted={converted} affected={affected_total} rate={:.3}",
            self.spread_rate
        );

        Ok(SimEvent::GenerationAdvanced {
            generation: next_gen,
            converted,
            affected_total,
        })
    }

    /// Run n generations in a loop. Emits RunInitialized first when
    /// starting from generation 0, so seed and seeding are observable.
    pub fn run_generations(&mut self, n: u64) -> SimResult<Vec<SimEvent>> {
        let mut events = Vec::with_capacity(n as usize + 1);
        if self.generation == 0 {
            events.push(SimEvent::RunInitialized {
                run_id: self.run_id.clone(),
                seed: self.seed,
                size: self.lattice.size(),
                seeded_cells: stats::compute(&self.lattice).affected_count,
            });
        }
        for _ in 0..n {
            events.push(self.advance_generation()?);
        }
        Ok(events)
    }

    /// Return the lattice to all-healthy, generation 0. The stored
    /// spread rate survives; a seed mask does not — re-seeding takes a
    /// fresh engine.
    pub fn reset(&mut self) -> SimEvent {
        self.lattice
            .replace_cells(vec![CellState::Healthy; self.lattice.cell_count()]);
        self.generation = 0;
        log::debug!("lattice reset, generation back to 0");
        SimEvent::LatticeReset { generation: 0 }
    }

    /// Store a new spread rate for subsequent ticks. Already-computed
    /// generations are not revisited. Invalid rates are rejected and
    /// the stored rate keeps its old value.
    pub fn set_spread_rate(&mut self, rate: f64) -> SimResult<SimEvent> {
        let new_rate = transition::validate_spread_rate(rate)?;
        let old_rate = self.spread_rate;
        self.spread_rate = new_rate;
        Ok(SimEvent::SpreadRateChanged {
            generation: self.generation,
            old_rate,
            new_rate,
        })
    }

    /// Apply one driver command, returning whatever events it produced.
    pub fn apply(&mut self, command: &DriverCommand) -> SimResult<Vec<SimEvent>> {
        match command {
            DriverCommand::Advance { generations } => self.run_generations(*generations),
            DriverCommand::SetSpreadRate { rate } => Ok(vec![self.set_spread_rate(*rate)?]),
            DriverCommand::Reset => Ok(vec![self.reset()]),
        }
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn spread_rate(&self) -> f64 {
        self.spread_rate
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn cell(&self, row: usize, col: usize) -> SimResult<CellState> {
        self.lattice.get(row, col)
    }

    /// Aggregate statistics over the lattice as it stands right now.
    pub fn statistics(&self) -> LatticeStats {
        stats::compute(&self.lattice)
    }

    /// Complete current state, ready to serialize.
    pub fn snapshot(&self) -> SimSnapshot {
        SimSnapshot {
            run_id:      self.run_id.clone(),
            seed:        self.seed,
            generation:  self.generation,
            spread_rate: self.spread_rate,
            lattice:     self.lattice.clone(),
        }
    }
}
