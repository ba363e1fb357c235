//! Error types for honeycomb construction.

use std::fmt;
use waggle_core::CellId;

/// Errors detected during [`CombConfig::validate()`](crate::CombConfig::validate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Edge length is zero, which would produce a comb with no cells.
    EmptyComb,
    /// Edge length exceeds the maximum whose cell count fits in `u32`.
    EdgeLengthTooLarge {
        /// The configured edge length.
        value: u32,
        /// The maximum supported edge length.
        max: u32,
    },
    /// A cell identity does not name any generated cell.
    CellIdOutOfRange {
        /// Which parameter carried the identity: `"start"`, `"target"`,
        /// or `"blocked"`.
        role: &'static str,
        /// The offending identity.
        id: CellId,
        /// Number of cells the configured edge length generates.
        cell_count: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyComb => write!(f, "edge length must be at least 1"),
            Self::EdgeLengthTooLarge { value, max } => {
                write!(f, "edge length {value} exceeds maximum of {max}")
            }
            Self::CellIdOutOfRange {
                role,
                id,
                cell_count,
            } => {
                write!(
                    f,
                    "{role} cell id {id} is outside the valid range [1, {cell_count}]"
                )
            }
        }
    }
}

impl std::error::Error for GridError {}
