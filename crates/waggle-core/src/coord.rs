//! Cube coordinates and the six-direction hex offset table.

use crate::error::CoordError;
use std::fmt;

/// Cube offsets in `(dx, dy, dz)` order: E, W, SW, SE, NW, NE.
const HEX_OFFSETS: [(i32, i32, i32); 6] = [
    (0, 1, -1),  // E
    (0, -1, 1),  // W
    (1, -1, 0),  // SW
    (1, 0, -1),  // SE
    (-1, 0, 1),  // NW
    (-1, 1, 0),  // NE
];

/// One of the six hex-grid directions.
///
/// The discriminant indexes the offset table, so the `ALL` order matches
/// the table order: E, W, SW, SE, NW, NE.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `(0, 1, -1)`
    East,
    /// `(0, -1, 1)`
    West,
    /// `(1, -1, 0)`
    SouthWest,
    /// `(1, 0, -1)`
    SouthEast,
    /// `(-1, 0, 1)`
    NorthWest,
    /// `(-1, 1, 0)`
    NorthEast,
}

impl Direction {
    /// All six directions, each exactly once, in offset-table order.
    pub const ALL: [Direction; 6] = [
        Direction::East,
        Direction::West,
        Direction::SouthWest,
        Direction::SouthEast,
        Direction::NorthWest,
        Direction::NorthEast,
    ];

    /// The `(dx, dy, dz)` cube offset of this direction.
    pub fn offset(self) -> (i32, i32, i32) {
        HEX_OFFSETS[self as usize]
    }

    /// The reverse direction. Stepping `dir` then `dir.opposite()`
    /// returns to the starting cell.
    pub fn opposite(self) -> Direction {
        match self {
            Self::East => Self::West,
            Self::West => Self::East,
            Self::SouthWest => Self::NorthEast,
            Self::SouthEast => Self::NorthWest,
            Self::NorthWest => Self::SouthEast,
            Self::NorthEast => Self::SouthWest,
        }
    }
}

/// A cube coordinate on the hexagonal lattice.
///
/// The three components always satisfy `x + y + z == 0`; [`CubeCoord::new`]
/// rejects triples that do not. The type derives `Eq` and `Hash` and is
/// used directly as a structural map key — there is no stringified key form.
///
/// Distance is cube distance, `max(|dx|, |dy|, |dz|)`, which equals the
/// graph geodesic on an unobstructed hex grid.
///
/// # Examples
///
/// ```
/// use waggle_core::{CubeCoord, Direction};
///
/// let origin = CubeCoord::ORIGIN;
/// let east = origin.neighbour(Direction::East);
/// assert_eq!(east, CubeCoord::new(0, 1, -1).unwrap());
/// assert_eq!(origin.distance(east), 1);
///
/// // Each cell has exactly six neighbours, all at distance 1.
/// for nb in origin.neighbours() {
///     assert_eq!(origin.distance(nb), 1);
/// }
///
/// // Off-lattice triples are rejected.
/// assert!(CubeCoord::new(1, 1, 1).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CubeCoord {
    x: i32,
    y: i32,
    z: i32,
}

impl CubeCoord {
    /// The centre of the lattice, `(0, 0, 0)`.
    pub const ORIGIN: CubeCoord = CubeCoord { x: 0, y: 0, z: 0 };

    /// Create a coordinate from all three components.
    ///
    /// Returns `Err(CoordError::OffLattice)` if `x + y + z != 0`.
    pub fn new(x: i32, y: i32, z: i32) -> Result<Self, CoordError> {
        if x + y + z != 0 {
            return Err(CoordError::OffLattice { x, y, z });
        }
        Ok(Self { x, y, z })
    }

    /// Create a coordinate from `x` and `y`, deriving `z = -x - y`.
    ///
    /// Always on-lattice, so this is total.
    pub const fn from_xy(x: i32, y: i32) -> Self {
        Self { x, y, z: -x - y }
    }

    /// The `x` component.
    pub fn x(self) -> i32 {
        self.x
    }

    /// The `y` component.
    pub fn y(self) -> i32 {
        self.y
    }

    /// The `z` component.
    pub fn z(self) -> i32 {
        self.z
    }

    /// The adjacent coordinate one step in the given direction.
    pub fn neighbour(self, dir: Direction) -> CubeCoord {
        let (dx, dy, dz) = dir.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    /// All six adjacent coordinates, in [`Direction::ALL`] order.
    pub fn neighbours(self) -> [CubeCoord; 6] {
        let mut out = [self; 6];
        for (slot, dir) in out.iter_mut().zip(Direction::ALL) {
            *slot = self.neighbour(dir);
        }
        out
    }

    /// Cube distance to `other`: `max(|dx|, |dy|, |dz|)`.
    pub fn distance(self, other: CubeCoord) -> u32 {
        let dx = (self.x - other.x).unsigned_abs();
        let dy = (self.y - other.y).unsigned_abs();
        let dz = (self.z - other.z).unsigned_abs();
        dx.max(dy).max(dz)
    }
}

impl fmt::Display for CubeCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
