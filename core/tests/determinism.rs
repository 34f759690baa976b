//! THE MOST IMPORTANT TEST IN THE PROJECT.
//!
//! Two engines, same seed, same operations.
//! They must hold bit-identical lattices at every generation.
//! Any divergence is a blocker — do not merge until fixed.

use contagion_core::{
    config::SimConfig,
    engine::SimEngine,
    lattice::SeedMask,
    rng::{DrawSource, SeededDraws},
};

fn seeded_config(seed: u64) -> SimConfig {
    SimConfig {
        size: 32,
        spread_rate: 0.35,
        seed,
    }
}

fn center_mask(size: usize) -> SeedMask {
    let mut cells = vec![false; size * size];
    cells[(size / 2) * size + size / 2] = true;
    SeedMask::new(size, cells).expect("center mask")
}

#[test]
fn same_seed_produces_identical_generation_sequences() {
    let _ = env_logger::builder().is_test(true).try_init();

    const SEED: u64 = 0xDEAD_BEEF_CAFE_1234;
    const GENERATIONS: u64 = 60;

    let config = seeded_config(SEED);
    let mask = center_mask(config.size);
    let mut engine_a = SimEngine::new("det-a".into(), &config, Some(&mask)).expect("engine_a");
    let mut engine_b = SimEngine::new("det-b".into(), &config, Some(&mask)).expect("engine_b");

    for gen in 1..=GENERATIONS {
        engine_a.advance_generation().expect("engine_a tick");
        engine_b.advance_generation().expect("engine_b tick");
        assert_eq!(
            engine_a.lattice(),
            engine_b.lattice(),
            "Lattices diverged at generation {gen}"
        );
    }
}

#[test]
fn different_seeds_produce_different_runs() {
    let config_a = seeded_config(42);
    let config_b = seeded_config(99);
    let mask = center_mask(config_a.size);

    let mut engine_a = SimEngine::new("det-42".into(), &config_a, Some(&mask)).expect("engine_a");
    let mut engine_b = SimEngine::new("det-99".into(), &config_b, Some(&mask)).expect("engine_b");

    let mut any_different = false;
    for _ in 0..40 {
        engine_a.advance_generation().expect("tick a");
        engine_b.advance_generation().expect("tick b");
        if engine_a.lattice() != engine_b.lattice() {
            any_different = true;
            break;
        }
    }
    assert!(
        any_different,
        "Different seeds produced identical runs — the seed is not being used"
    );
}

#[test]
fn draws_are_coordinate_indexed_and_order_independent() {
    let mut source = SeededDraws::new(7);
    let first = source.draw(3, 10);
    let again = source.draw(3, 10);
    assert_eq!(
        first, again,
        "Same (generation, cell) must always yield the same draw"
    );

    // Visiting cells in a different order must not change any draw.
    let mut forward = SeededDraws::new(7);
    let mut backward = SeededDraws::new(7);
    let fwd: Vec<f64> = (0..16).map(|i| forward.draw(5, i)).collect();
    let mut bwd: Vec<f64> = (0..16).rev().map(|i| backward.draw(5, i)).collect();
    bwd.reverse();
    assert_eq!(fwd, bwd, "Draws depend on iteration order");
}

#[test]
fn draws_land_in_the_unit_interval() {
    let mut source = SeededDraws::new(0xFEED);
    for generation in 0..4 {
        for cell in 0..100 {
            let u = source.draw(generation, cell);
            assert!(
                (0.0..1.0).contains(&u),
                "Draw {u} for gen {generation} cell {cell} is outside [0, 1)"
            );
        }
    }
}
