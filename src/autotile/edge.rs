//! Edge variant resolution for fringe cells
//!
//! A fringe cell's raw neighbor mask is reduced by corner suppression and then
//! matched against a catalog of canonical masks under the four quarter-turn
//! rotations. The catalog is authored data: each entry names the sprite slot
//! drawn for that exact reduced pattern, and the rotation found during the
//! search tells the renderer how to turn the sprite.

use std::fmt;

use crate::autotile::mask::NeighborMask;

/// Named edge sprite shapes, in sprite-slot order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeShape {
    /// A single side
    OneSide,
    /// One side plus the corner on its clockwise flank
    OneSideOneCornerRight,
    /// One side plus the corner on its counter-clockwise flank
    OneSideOneCornerLeft,
    /// One side plus both far corners
    OneSideTwoCorners,
    /// Two opposite sides
    TwoSides,
    /// Two adjacent sides, clockwise pair
    TwoAdjacentSidesRight,
    /// Two adjacent sides, counter-clockwise pair
    TwoAdjacentSidesLeft,
    /// Two adjacent sides plus the free corner, clockwise variant
    TwoSidesOneCornerRight,
    /// Two adjacent sides plus the free corner, counter-clockwise variant
    TwoSidesOneCornerLeft,
    /// Three sides
    ThreeSides,
    /// All four sides
    Filled,
    /// A single isolated corner
    OneCorner,
    /// Two corners sharing a side
    TwoAdjacentCorners,
    /// Two diagonally opposite corners
    TwoOppositeCorners,
    /// Three corners
    ThreeCorners,
    /// All four corners
    FourCorners,
}

impl EdgeShape {
    /// Every shape in sprite-slot order
    pub const ALL: [Self; 16] = [
        Self::OneSide,
        Self::OneSideOneCornerRight,
        Self::OneSideOneCornerLeft,
        Self::OneSideTwoCorners,
        Self::TwoSides,
        Self::TwoAdjacentSidesRight,
        Self::TwoAdjacentSidesLeft,
        Self::TwoSidesOneCornerRight,
        Self::TwoSidesOneCornerLeft,
        Self::ThreeSides,
        Self::Filled,
        Self::OneCorner,
        Self::TwoAdjacentCorners,
        Self::TwoOppositeCorners,
        Self::ThreeCorners,
        Self::FourCorners,
    ];

    /// Sprite slot of this shape (0-15)
    pub const fn slot(self) -> usize {
        self as usize
    }
}

/// Canonical reduced masks and the shape each selects
pub const EDGE_CATALOG: [(u8, EdgeShape); 16] = [
    (1, EdgeShape::OneSide),
    (9, EdgeShape::OneSideOneCornerRight),
    (33, EdgeShape::OneSideOneCornerLeft),
    (41, EdgeShape::OneSideTwoCorners),
    (17, EdgeShape::TwoSides),
    (5, EdgeShape::TwoAdjacentSidesRight),
    (65, EdgeShape::TwoAdjacentSidesLeft),
    (37, EdgeShape::TwoSidesOneCornerRight),
    (73, EdgeShape::TwoSidesOneCornerLeft),
    (21, EdgeShape::ThreeSides),
    (85, EdgeShape::Filled),
    (2, EdgeShape::OneCorner),
    (10, EdgeShape::TwoAdjacentCorners),
    (34, EdgeShape::TwoOppositeCorners),
    (42, EdgeShape::ThreeCorners),
    (170, EdgeShape::FourCorners),
];

/// Counter-clockwise sprite rotation in quarter turns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    /// Unrotated
    #[default]
    R0,
    /// 90°
    R90,
    /// 180°
    R180,
    /// 270°
    R270,
}

impl Rotation {
    /// Rotation for a number of quarter turns
    pub const fn from_steps(steps: u32) -> Self {
        match steps % 4 {
            0 => Self::R0,
            1 => Self::R90,
            2 => Self::R180,
            _ => Self::R270,
        }
    }

    /// Number of quarter turns
    pub const fn steps(self) -> u32 {
        match self {
            Self::R0 => 0,
            Self::R90 => 1,
            Self::R180 => 2,
            Self::R270 => 3,
        }
    }

    /// Angle in degrees
    pub const fn degrees(self) -> u32 {
        self.steps() * 90
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Shape and rotation chosen for a fringe cell
///
/// `shape` is `None` when no rotation of the reduced mask is catalogued; the
/// rotation is then [`Rotation::R0`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EdgeVariant {
    /// Selected shape, if any
    pub shape: Option<EdgeShape>,
    /// Rotation to draw the shape with
    pub rotation: Rotation,
}

/// Catalog entry for an exact reduced mask
pub fn lookup(canonical: NeighborMask) -> Option<EdgeShape> {
    EDGE_CATALOG
        .iter()
        .find(|(bits, _)| *bits == canonical.bits())
        .map(|&(_, shape)| shape)
}

/// Resolve a raw neighbor mask to an edge variant
///
/// Probes the suppressed mask and its three quarter-turn rotations in order
/// and returns the first catalog hit, rotated back by the number of turns it
/// took to find.
pub fn resolve_edge(raw: NeighborMask) -> EdgeVariant {
    let reduced = raw.suppress_corners();
    (0..4)
        .find_map(|steps| {
            lookup(reduced.rotated(steps)).map(|shape| EdgeVariant {
                shape: Some(shape),
                rotation: Rotation::from_steps(steps),
            })
        })
        .unwrap_or_default()
}
