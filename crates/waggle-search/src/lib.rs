//! Breadth-first shortest-distance search over honeycomb grids.
//!
//! [`shortest_distance`] runs one unweighted breadth-first search over a
//! built [`Honeycomb`](waggle_grid::Honeycomb) and reports the minimum
//! number of hex steps from its start cell to its target cell, or `None`
//! when no unblocked path connects them. [`solve`] is the one-call
//! build-then-search convenience.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bfs;

pub use bfs::{shortest_distance, solve};
