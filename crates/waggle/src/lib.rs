//! Waggle: a hexagonal honeycomb shortest-walk solver.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the waggle sub-crates. For most users, adding `waggle` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use waggle::prelude::*;
//!
//! // Edge-6 comb: walk from cell 1 to cell 45 around eleven blocked cells.
//! let config = CombConfig::new(
//!     6,
//!     CellId(1),
//!     CellId(45),
//!     [15, 16, 17, 19, 26, 27, 52, 53, 58, 65, 74].map(CellId),
//! );
//! let distance = solve(&config).unwrap();
//! assert_eq!(distance, Some(6));
//!
//! // Or build the comb once and search it separately.
//! let comb = Honeycomb::build(&config).unwrap();
//! assert_eq!(comb.cell_count(), 91);
//! assert_eq!(shortest_distance(&comb), Some(6));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `waggle-core` | Cube coordinates, directions, cell identities |
//! | [`grid`] | `waggle-grid` | Solve configuration and honeycomb construction |
//! | [`search`] | `waggle-search` | Breadth-first shortest-distance search |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Cube coordinates, directions, and cell identities (`waggle-core`).
pub use waggle_core as types;

/// Solve configuration and honeycomb construction (`waggle-grid`).
pub use waggle_grid as grid;

/// Breadth-first shortest-distance search (`waggle-search`).
pub use waggle_search as search;

/// Common imports for typical waggle usage.
///
/// ```rust
/// use waggle::prelude::*;
/// ```
pub mod prelude {
    pub use waggle_core::{CellId, CoordError, CubeCoord, Direction};
    pub use waggle_grid::{hex_cell_count, Cell, CombConfig, GridError, Honeycomb};
    pub use waggle_search::{shortest_distance, solve};
}
