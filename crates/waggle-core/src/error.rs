//! Error types for coordinate construction.

use std::fmt;

/// Errors arising from cube-coordinate construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordError {
    /// The three components do not sum to zero.
    OffLattice {
        /// The offending `x` component.
        x: i32,
        /// The offending `y` component.
        y: i32,
        /// The offending `z` component.
        z: i32,
    },
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OffLattice { x, y, z } => {
                write!(
                    f,
                    "cube coordinate ({x}, {y}, {z}) is off-lattice: components must sum to zero"
                )
            }
        }
    }
}

impl std::error::Error for CoordError {}
