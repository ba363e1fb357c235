//! Solve-request configuration and validation.

use crate::comb::hex_cell_count;
use crate::error::GridError;
use indexmap::IndexSet;
use waggle_core::CellId;

/// Complete description of one solve request.
///
/// Passed to [`Honeycomb::build`](crate::Honeycomb::build), which calls
/// [`validate()`](CombConfig::validate) before constructing anything, so
/// parameter problems are rejected up front rather than surfacing as
/// unresolvable cells mid-search.
///
/// # Examples
///
/// ```
/// use waggle_core::CellId;
/// use waggle_grid::CombConfig;
///
/// let config = CombConfig::new(6, CellId(1), CellId(45), [CellId(15), CellId(16)]);
/// assert!(config.validate().is_ok());
///
/// // Identities must name generated cells: edge 6 has 91 of them.
/// let bad = CombConfig::new(6, CellId(1), CellId(92), []);
/// assert!(bad.validate().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct CombConfig {
    /// Number of cells along one edge of the comb. The region radius is
    /// `edge_length - 1`.
    pub edge_length: u32,
    /// Identity of the cell the walk begins on.
    pub start: CellId,
    /// Identity of the cell the walk must reach. May equal `start`.
    pub target: CellId,
    /// Identities of impassable cells. Blocking the start or target cell
    /// is permitted; the resulting solve reports no path.
    pub blocked: IndexSet<CellId>,
}

impl CombConfig {
    /// Largest supported edge length: the cell count `3r² + 3r + 1` of
    /// radius `r = edge_length - 1` must fit in `u32`, since identities
    /// are `u32`.
    pub const MAX_EDGE_LENGTH: u32 = 37_837;

    /// Build a config from its parts, collecting the blocked identities.
    pub fn new(
        edge_length: u32,
        start: CellId,
        target: CellId,
        blocked: impl IntoIterator<Item = CellId>,
    ) -> Self {
        Self {
            edge_length,
            start,
            target,
            blocked: blocked.into_iter().collect(),
        }
    }

    /// Number of cells the configured edge length generates.
    ///
    /// Closed form, valid for any edge length up to
    /// [`MAX_EDGE_LENGTH`](Self::MAX_EDGE_LENGTH); returns 0 for edge
    /// length 0.
    pub fn cell_count(&self) -> u64 {
        if self.edge_length == 0 {
            return 0;
        }
        hex_cell_count(self.edge_length - 1)
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), GridError> {
        // 1. The comb must have at least one cell.
        if self.edge_length == 0 {
            return Err(GridError::EmptyComb);
        }
        // 2. The cell count must fit in u32 (identities are u32).
        if self.edge_length > Self::MAX_EDGE_LENGTH {
            return Err(GridError::EdgeLengthTooLarge {
                value: self.edge_length,
                max: Self::MAX_EDGE_LENGTH,
            });
        }
        // 3. Every identity must name a generated cell. An unknown
        //    identity would otherwise leave the start or target
        //    unresolved until mid-search.
        let cell_count = self.cell_count() as u32;
        check_id("start", self.start, cell_count)?;
        check_id("target", self.target, cell_count)?;
        for &id in &self.blocked {
            check_id("blocked", id, cell_count)?;
        }
        Ok(())
    }
}

fn check_id(role: &'static str, id: CellId, cell_count: u32) -> Result<(), GridError> {
    if id.0 == 0 || id.0 > cell_count {
        return Err(GridError::CellIdOutOfRange {
            role,
            id,
            cell_count,
        });
    }
    Ok(())
}
