//! Honeycomb grid construction.
//!
//! This crate builds the addressable hexagonal region a search runs over:
//! [`CombConfig`] describes a solve request and validates it up front,
//! [`Honeycomb::build`] enumerates the region in the canonical scan order
//! that defines cell identities, and [`Honeycomb`] serves coordinate and
//! identity lookups over the finished grid.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod comb;
pub mod config;
pub mod error;

#[cfg(test)]
pub(crate) mod compliance;

pub use comb::{hex_cell_count, Cell, Honeycomb};
pub use config::CombConfig;
pub use error::GridError;
