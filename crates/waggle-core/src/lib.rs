//! Core types for waggle honeycomb solvers.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! cube-coordinate model, the six-direction offset table, and the
//! strongly-typed cell identifier used throughout the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod error;
pub mod id;

pub use coord::{CubeCoord, Direction};
pub use error::CoordError;
pub use id::CellId;
