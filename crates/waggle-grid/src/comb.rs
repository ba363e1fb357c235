//! The honeycomb grid and its construction scan.

use crate::config::CombConfig;
use crate::error::GridError;
use indexmap::IndexMap;
use smallvec::SmallVec;
use waggle_core::{CellId, CubeCoord};

/// Number of cells in a hexagonal region of the given radius: `3r² + 3r + 1`.
pub fn hex_cell_count(radius: u32) -> u64 {
    let r = u64::from(radius);
    3 * r * r + 3 * r + 1
}

/// One hexagonal tile of a [`Honeycomb`].
///
/// Immutable after construction. Search-time state (explored flags,
/// predecessor links) lives in the search's own side tables, keyed by
/// canonical rank, so a built comb can serve any number of independent
/// searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    coord: CubeCoord,
    id: CellId,
    blocked: bool,
}

impl Cell {
    /// The cell's cube coordinate.
    pub fn coord(&self) -> CubeCoord {
        self.coord
    }

    /// The cell's identity, assigned in canonical scan order.
    pub fn id(&self) -> CellId {
        self.id
    }

    /// Whether the cell is impassable.
    pub fn is_blocked(&self) -> bool {
        self.blocked
    }
}

/// A hexagonal region of cells addressable by coordinate and by identity.
///
/// Cells are stored in an insertion-ordered map keyed by [`CubeCoord`],
/// inserted in the canonical scan order that defines identities: `x` runs
/// from `-r` to `r`, and for each `x`, `y` runs from `max(-r, -x - r)` to
/// `min(r, -x + r)` with `z = -x - y`. Map index `n` therefore holds the
/// cell with identity `n + 1`, and one structure serves as both the
/// coordinate index and the identity arena.
///
/// Topology is immutable after [`build`](Honeycomb::build); the start and
/// target references always resolve because identities are range-checked
/// before construction.
///
/// # Examples
///
/// ```
/// use waggle_core::{CellId, CubeCoord};
/// use waggle_grid::{CombConfig, Honeycomb};
///
/// let config = CombConfig::new(2, CellId(1), CellId(7), []);
/// let comb = Honeycomb::build(&config).unwrap();
///
/// assert_eq!(comb.cell_count(), 7);
/// assert_eq!(comb.radius(), 1);
///
/// // Identity 1 is the first cell of the scan: (-r, 0, r).
/// assert_eq!(comb.start().coord(), CubeCoord::new(-1, 0, 1).unwrap());
///
/// // The centre sits mid-scan, not at identity 1.
/// let centre = comb.cell_at(&CubeCoord::ORIGIN).unwrap();
/// assert_eq!(centre.id(), CellId(4));
///
/// // The centre of a radius-1 comb touches all six other cells.
/// assert_eq!(comb.neighbours(centre).len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct Honeycomb {
    cells: IndexMap<CubeCoord, Cell>,
    radius: u32,
    start: usize,
    target: usize,
}

impl Honeycomb {
    /// Build the honeycomb described by `config`.
    ///
    /// Validates the config first; on success the returned comb holds
    /// exactly `3r² + 3r + 1` cells for `r = edge_length - 1`, with
    /// identities `1..=count` in scan order and the start/target cells
    /// resolved.
    pub fn build(config: &CombConfig) -> Result<Self, GridError> {
        config.validate()?;
        let radius = config.edge_length - 1;
        let r = radius as i32;

        let mut cells = IndexMap::with_capacity(hex_cell_count(radius) as usize);
        let mut next_id = 1u32;
        for x in -r..=r {
            let y_lo = (-r).max(-x - r);
            let y_hi = r.min(-x + r);
            for y in y_lo..=y_hi {
                let coord = CubeCoord::from_xy(x, y);
                let id = CellId(next_id);
                cells.insert(
                    coord,
                    Cell {
                        coord,
                        id,
                        blocked: config.blocked.contains(&id),
                    },
                );
                next_id += 1;
            }
        }
        debug_assert_eq!(cells.len() as u64, hex_cell_count(radius));

        // Identity n occupies map index n - 1; both ids were range-checked.
        Ok(Self {
            cells,
            radius,
            start: (config.start.0 - 1) as usize,
            target: (config.target.0 - 1) as usize,
        })
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Region radius in rings around the centre.
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Number of cells along one edge: `radius + 1`.
    pub fn edge_length(&self) -> u32 {
        self.radius + 1
    }

    /// The cell the walk begins on.
    pub fn start(&self) -> &Cell {
        &self.cells[self.start]
    }

    /// The cell the walk must reach.
    pub fn target(&self) -> &Cell {
        &self.cells[self.target]
    }

    /// Canonical rank of the start cell.
    pub fn start_rank(&self) -> usize {
        self.start
    }

    /// Canonical rank of the target cell.
    pub fn target_rank(&self) -> usize {
        self.target
    }

    /// Look up a cell by identity.
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        let rank = (id.0 as usize).checked_sub(1)?;
        self.cell_by_rank(rank)
    }

    /// Look up a cell by coordinate.
    pub fn cell_at(&self, coord: &CubeCoord) -> Option<&Cell> {
        self.cells.get(coord)
    }

    /// Look up a cell and its canonical rank by coordinate.
    pub fn cell_entry(&self, coord: &CubeCoord) -> Option<(usize, &Cell)> {
        self.cells
            .get_full(coord)
            .map(|(rank, _, cell)| (rank, cell))
    }

    /// Position of a coordinate in the canonical scan order.
    pub fn rank(&self, coord: &CubeCoord) -> Option<usize> {
        self.cells.get_index_of(coord)
    }

    /// Look up a cell by canonical rank (identity minus one).
    pub fn cell_by_rank(&self, rank: usize) -> Option<&Cell> {
        self.cells.get_index(rank).map(|(_, cell)| cell)
    }

    /// All cells in canonical scan order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }

    /// The cell's in-grid neighbours, in direction-table order.
    ///
    /// Coordinates outside the region are skipped, so edge cells have
    /// fewer than six entries. Blocked neighbours are included; filtering
    /// them is the search's concern.
    pub fn neighbours(&self, cell: &Cell) -> SmallVec<[&Cell; 6]> {
        cell.coord()
            .neighbours()
            .iter()
            .filter_map(|coord| self.cells.get(coord))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn unblocked(edge_length: u32) -> Honeycomb {
        let config = CombConfig::new(edge_length, CellId(1), CellId(1), []);
        Honeycomb::build(&config).unwrap()
    }

    // ── Scan order ──────────────────────────────────────────────

    #[test]
    fn radius_one_scan_order() {
        let comb = unblocked(2);
        let expected = [
            (-1, 0, 1),
            (-1, 1, 0),
            (0, -1, 1),
            (0, 0, 0),
            (0, 1, -1),
            (1, -1, 0),
            (1, 0, -1),
        ];
        for (i, (x, y, z)) in expected.into_iter().enumerate() {
            let cell = comb.cell_by_rank(i).unwrap();
            assert_eq!(cell.id(), CellId(i as u32 + 1));
            assert_eq!(cell.coord(), CubeCoord::new(x, y, z).unwrap(), "rank {i}");
        }
    }

    #[test]
    fn radius_zero_is_single_centre_cell() {
        let comb = unblocked(1);
        assert_eq!(comb.cell_count(), 1);
        let only = comb.cell(CellId(1)).unwrap();
        assert_eq!(only.coord(), CubeCoord::ORIGIN);
    }

    #[test]
    fn radius_five_first_cell_and_centre() {
        let comb = unblocked(6);
        assert_eq!(comb.cell_count(), 91);
        assert_eq!(
            comb.cell(CellId(1)).unwrap().coord(),
            CubeCoord::new(-5, 0, 5).unwrap()
        );
        let centre = comb.cell_at(&CubeCoord::ORIGIN).unwrap();
        assert_eq!(centre.id(), CellId(46));
    }

    // ── Identity and lookup ─────────────────────────────────────

    #[test]
    fn identity_matches_rank_plus_one() {
        let comb = unblocked(4);
        for (rank, cell) in comb.cells().enumerate() {
            assert_eq!(cell.id(), CellId(rank as u32 + 1));
            assert_eq!(comb.rank(&cell.coord()), Some(rank));
        }
    }

    #[test]
    fn cell_lookup_out_of_range_is_none() {
        let comb = unblocked(2);
        assert!(comb.cell(CellId(0)).is_none());
        assert!(comb.cell(CellId(8)).is_none());
    }

    #[test]
    fn coordinate_outside_region_is_none() {
        let comb = unblocked(2);
        assert!(comb.cell_at(&CubeCoord::from_xy(2, 0)).is_none());
    }

    // ── Blocked and start/target resolution ─────────────────────

    #[test]
    fn blocked_flags_follow_config() {
        let config = CombConfig::new(3, CellId(1), CellId(19), [CellId(5), CellId(9)]);
        let comb = Honeycomb::build(&config).unwrap();
        let blocked: Vec<u32> = comb
            .cells()
            .filter(|c| c.is_blocked())
            .map(|c| c.id().0)
            .collect();
        assert_eq!(blocked, vec![5, 9]);
    }

    #[test]
    fn start_and_target_resolve_by_identity() {
        let config = CombConfig::new(6, CellId(1), CellId(45), []);
        let comb = Honeycomb::build(&config).unwrap();
        assert_eq!(comb.start().id(), CellId(1));
        assert_eq!(comb.target().id(), CellId(45));
        assert_eq!(
            comb.target().coord(),
            CubeCoord::new(0, -1, 1).unwrap()
        );
    }

    #[test]
    fn start_may_equal_target() {
        let config = CombConfig::new(2, CellId(4), CellId(4), []);
        let comb = Honeycomb::build(&config).unwrap();
        assert_eq!(comb.start_rank(), comb.target_rank());
    }

    #[test]
    fn blocking_start_is_permitted() {
        let config = CombConfig::new(2, CellId(4), CellId(1), [CellId(4)]);
        let comb = Honeycomb::build(&config).unwrap();
        assert!(comb.start().is_blocked());
    }

    #[test]
    fn build_rejects_invalid_config() {
        let config = CombConfig::new(0, CellId(1), CellId(1), []);
        assert!(matches!(
            Honeycomb::build(&config),
            Err(GridError::EmptyComb)
        ));
    }

    // ── Neighbours ──────────────────────────────────────────────

    #[test]
    fn centre_has_six_neighbours() {
        let comb = unblocked(2);
        let centre = comb.cell_at(&CubeCoord::ORIGIN).unwrap();
        assert_eq!(comb.neighbours(centre).len(), 6);
    }

    #[test]
    fn corner_has_three_neighbours() {
        let comb = unblocked(2);
        let corner = comb.cell(CellId(1)).unwrap();
        assert_eq!(comb.neighbours(corner).len(), 3);
    }

    #[test]
    fn neighbours_include_blocked_cells() {
        let config = CombConfig::new(2, CellId(1), CellId(7), [CellId(4)]);
        let comb = Honeycomb::build(&config).unwrap();
        let corner = comb.cell(CellId(1)).unwrap();
        assert!(comb
            .neighbours(corner)
            .iter()
            .any(|nb| nb.is_blocked()));
    }

    // ── Compliance suites ───────────────────────────────────────

    #[test]
    fn compliance_radius_zero() {
        compliance::run_full_compliance(&unblocked(1));
    }

    #[test]
    fn compliance_radius_two() {
        compliance::run_full_compliance(&unblocked(3));
    }

    #[test]
    fn compliance_radius_five() {
        compliance::run_full_compliance(&unblocked(6));
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn cell_count_matches_closed_form(edge in 1u32..12) {
            let comb = unblocked(edge);
            prop_assert_eq!(comb.cell_count() as u64, hex_cell_count(edge - 1));
        }

        #[test]
        fn every_cell_within_radius(edge in 1u32..10) {
            let comb = unblocked(edge);
            for cell in comb.cells() {
                prop_assert!(
                    CubeCoord::ORIGIN.distance(cell.coord()) <= comb.radius(),
                    "cell {} at {} outside radius {}",
                    cell.id(), cell.coord(), comb.radius()
                );
            }
        }
    }
}
