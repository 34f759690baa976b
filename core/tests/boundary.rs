//! Boundary fidelity: out-of-bounds neighbors count as healthy, so the
//! maximum neighbor count is 3 at a corner, 5 on an edge, 8 inside.
//! The rim's structural disadvantage is intended behavior.

use contagion_core::{
    lattice::{Lattice, SeedMask},
    neighbors::affected_neighbor_counts,
};

#[test]
fn neighbor_maxima_by_position_class_on_a_saturated_lattice() {
    let size = 5;
    let mask = SeedMask::new(size, vec![true; size * size]).expect("mask");
    let lattice = Lattice::from_mask(size, &mask).expect("lattice");

    let counts = affected_neighbor_counts(&lattice);

    for row in 0..size {
        for col in 0..size {
            let on_row_rim = row == 0 || row == size - 1;
            let on_col_rim = col == 0 || col == size - 1;
            let expected = match (on_row_rim, on_col_rim) {
                (true, true) => 3,   // corner
                (false, false) => 8, // interior
                _ => 5,              // edge
            };
            assert_eq!(
                counts[lattice.index(row, col)],
                expected,
                "Wrong neighbor count at ({row}, {col})"
            );
        }
    }
}

#[test]
fn single_affected_cell_touches_only_its_neighborhood() {
    let size = 4;
    let mut cells = vec![false; size * size];
    cells[size + 1] = true;
    let mask = SeedMask::new(size, cells).expect("mask");
    let lattice = Lattice::from_mask(size, &mask).expect("lattice");

    let counts = affected_neighbor_counts(&lattice);

    for row in 0..size {
        for col in 0..size {
            let is_seed = row == 1 && col == 1;
            let adjacent = row.abs_diff(1) <= 1 && col.abs_diff(1) <= 1 && !is_seed;
            let expected = u8::from(adjacent);
            assert_eq!(
                counts[lattice.index(row, col)],
                expected,
                "Wrong neighbor count at ({row}, {col})"
            );
        }
    }
}

#[test]
fn one_by_one_lattice_has_no_neighbors() {
    let mask = SeedMask::new(1, vec![true]).expect("mask");
    let lattice = Lattice::from_mask(1, &mask).expect("lattice");

    assert_eq!(affected_neighbor_counts(&lattice), vec![0]);
}
