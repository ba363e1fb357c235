//! Honeycomb invariant test helpers.
//!
//! These functions verify the structural guarantees a built comb must
//! satisfy regardless of radius or blocked set. Reused across the grid
//! test modules at several radii.

use crate::comb::{hex_cell_count, Honeycomb};
use indexmap::IndexSet;
use waggle_core::{CellId, CubeCoord, Direction};

/// Assert the cell count matches the closed form `3r² + 3r + 1`.
pub fn assert_cell_count_closed_form(comb: &Honeycomb) {
    assert_eq!(
        comb.cell_count() as u64,
        hex_cell_count(comb.radius()),
        "cell count does not match closed form for radius {}",
        comb.radius()
    );
}

/// Assert identities are exactly `1..=count` in iteration order.
pub fn assert_identities_sequential(comb: &Honeycomb) {
    for (rank, cell) in comb.cells().enumerate() {
        assert_eq!(
            cell.id(),
            CellId(rank as u32 + 1),
            "identity out of sequence at rank {rank}"
        );
    }
}

/// Assert no two cells share a coordinate.
pub fn assert_coords_unique(comb: &Honeycomb) {
    let unique: IndexSet<CubeCoord> = comb.cells().map(|c| c.coord()).collect();
    assert_eq!(unique.len(), comb.cell_count(), "duplicate coordinates");
}

/// Assert rank, identity, and coordinate lookups agree on every cell.
pub fn assert_lookups_agree(comb: &Honeycomb) {
    for (rank, cell) in comb.cells().enumerate() {
        assert_eq!(comb.rank(&cell.coord()), Some(rank));
        assert_eq!(comb.cell(cell.id()), Some(cell));
        assert_eq!(comb.cell_by_rank(rank), Some(cell));
        assert_eq!(comb.cell_entry(&cell.coord()), Some((rank, cell)));
    }
}

/// Assert `b in neighbours(a)` implies `a in neighbours(b)`, stepping back
/// via the opposite direction.
pub fn assert_neighbours_symmetric(comb: &Honeycomb) {
    for cell in comb.cells() {
        for dir in Direction::ALL {
            let forward = cell.coord().neighbour(dir);
            if let Some(nb) = comb.cell_at(&forward) {
                let back = nb.coord().neighbour(dir.opposite());
                assert_eq!(
                    back,
                    cell.coord(),
                    "neighbour symmetry violated between {} and {}",
                    cell.coord(),
                    nb.coord()
                );
            }
        }
    }
}

/// Assert every in-grid cell pair is mutually listed by `neighbours`.
pub fn assert_neighbour_lists_symmetric(comb: &Honeycomb) {
    for cell in comb.cells() {
        for nb in comb.neighbours(cell) {
            assert!(
                comb.neighbours(nb).contains(&cell),
                "{} lists {} but not vice versa",
                cell.coord(),
                nb.coord()
            );
        }
    }
}

/// Run all compliance checks on a comb.
pub fn run_full_compliance(comb: &Honeycomb) {
    assert_cell_count_closed_form(comb);
    assert_identities_sequential(comb);
    assert_coords_unique(comb);
    assert_lookups_agree(comb);
    assert_neighbours_symmetric(comb);
    assert_neighbour_lists_symmetric(comb);
}
