//! Benchmark profiles for the waggle solver.
//!
//! Provides pre-built [`CombConfig`] profiles:
//!
//! - [`puzzle_profile`]: the canonical edge-6 puzzle with eleven blocked cells
//! - [`corner_to_corner_profile`]: opposite corners of an arbitrary-size comb
//! - [`random_blocked_profile`]: seeded random blocking for reproducible runs

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{RngExt, SeedableRng};
use rand_chacha::ChaCha8Rng;
use waggle::prelude::*;

/// The canonical puzzle: edge 6, cell 1 to cell 45, eleven blocked cells.
pub fn puzzle_profile() -> CombConfig {
    CombConfig::new(
        6,
        CellId(1),
        CellId(45),
        [15, 16, 17, 19, 26, 27, 52, 53, 58, 65, 74].map(CellId),
    )
}

/// An unblocked walk between the first and last cells of the scan order,
/// the longest geodesic the comb offers.
pub fn corner_to_corner_profile(edge_length: u32) -> CombConfig {
    let count = hex_cell_count(edge_length - 1) as u32;
    CombConfig::new(edge_length, CellId(1), CellId(count), [])
}

/// Corner-to-corner walk with roughly `blocked_per_hundred`% of interior
/// cells blocked, drawn from a seeded generator so runs are reproducible.
/// The start and target cells are never blocked.
pub fn random_blocked_profile(edge_length: u32, blocked_per_hundred: u32, seed: u64) -> CombConfig {
    let count = hex_cell_count(edge_length - 1) as u32;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let blocked: Vec<CellId> = (2..count)
        .filter(|_| rng.random_range(0..100) < blocked_per_hundred)
        .map(CellId)
        .collect();
    CombConfig::new(edge_length, CellId(1), CellId(count), blocked)
}
