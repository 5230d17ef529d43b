//! Cell coordinates, relative offsets and rectangular cell ranges

use std::fmt;
use std::ops::Range;

/// Integer cell address on a layered 2D grid
///
/// The layer is carried through every neighborhood operation unchanged;
/// neighbors are always taken on the same layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coord {
    /// Column, growing to the east
    pub x: i32,
    /// Row, growing to the north
    pub y: i32,
    /// Layer index
    pub layer: i32,
}

impl Coord {
    /// Create a coordinate on an explicit layer
    pub const fn new(x: i32, y: i32, layer: i32) -> Self {
        Self { x, y, layer }
    }

    /// Create a coordinate on layer 0
    pub const fn flat(x: i32, y: i32) -> Self {
        Self { x, y, layer: 0 }
    }

    /// Shift by a same-layer offset
    ///
    /// Returns `None` when the shifted cell lies outside the `i32` range.
    pub const fn checked_offset(self, delta: Offset) -> Option<Self> {
        match (self.x.checked_add(delta.dx), self.y.checked_add(delta.dy)) {
            (Some(x), Some(y)) => Some(Self {
                x,
                y,
                layer: self.layer,
            }),
            _ => None,
        }
    }

    /// Planar part of the coordinate, used for per-layer storage lookups
    pub const fn planar(self) -> [i32; 2] {
        [self.x, self.y]
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.layer)
    }
}

/// Relative step between two cells on the same layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    /// Column delta
    pub dx: i32,
    /// Row delta
    pub dy: i32,
}

impl Offset {
    /// Create an offset
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

/// Half-open rectangle of cells on a single layer
///
/// Matches the box-fill convention of tilemap editors: `x.start..x.end` and
/// `y.start..y.end` exclude their end values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellBounds {
    /// Column range
    pub x: Range<i32>,
    /// Row range
    pub y: Range<i32>,
    /// Layer every cell lies on
    pub layer: i32,
}

impl CellBounds {
    /// Create bounds from ranges
    pub const fn new(x: Range<i32>, y: Range<i32>, layer: i32) -> Self {
        Self { x, y, layer }
    }

    /// Number of cells covered
    pub fn area(&self) -> usize {
        let width = usize::try_from(self.x.end.saturating_sub(self.x.start)).unwrap_or(0);
        let height = usize::try_from(self.y.end.saturating_sub(self.y.start)).unwrap_or(0);
        width * height
    }

    /// Whether a coordinate lies inside the bounds
    pub fn contains(&self, at: Coord) -> bool {
        at.layer == self.layer && self.x.contains(&at.x) && self.y.contains(&at.y)
    }

    /// Cells in scan order: rows ascending, columns ascending within a row
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.y
            .clone()
            .flat_map(move |y| self.x.clone().map(move |x| Coord::new(x, y, self.layer)))
    }
}
