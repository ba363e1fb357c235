//! Strongly-typed cell identifier.

use std::fmt;

/// Identifies a cell within a honeycomb.
///
/// Identities are positive and sequential: the grid builder assigns
/// `CellId(1)`, `CellId(2)`, ... in its canonical scan order, and that
/// assignment is the only place identities are defined. Callers pick
/// start, target, and blocked cells by these identities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub u32);

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CellId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
