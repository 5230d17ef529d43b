//! Eight-neighbor presence masks with corner suppression and ring rotation
//!
//! Bits run clockwise from north in 45° steps, so rotating the pattern by 90°
//! is a two-bit rotation of the byte.

use std::fmt;

use crate::spatial::cell::Occupant;
use crate::spatial::coord::Coord;
use crate::spatial::neighborhood::{COMPASS, slots};
use crate::spatial::target::TileGrid;

/// Compass direction of a neighbor relative to the subject cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// (0, +1)
    North = 0,
    /// (+1, +1)
    NorthEast = 1,
    /// (+1, 0)
    East = 2,
    /// (+1, -1)
    SouthEast = 3,
    /// (0, -1)
    South = 4,
    /// (-1, -1)
    SouthWest = 5,
    /// (-1, 0)
    West = 6,
    /// (-1, +1)
    NorthWest = 7,
}

impl Direction {
    /// All directions in bit order
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// The four sides, each paired with the two corners it flanks
    pub const SIDES: [(Self, [Self; 2]); 4] = [
        (Self::North, [Self::NorthEast, Self::NorthWest]),
        (Self::East, [Self::NorthEast, Self::SouthEast]),
        (Self::South, [Self::SouthEast, Self::SouthWest]),
        (Self::West, [Self::SouthWest, Self::NorthWest]),
    ];

    /// Mask bit contributed by this direction
    pub const fn weight(self) -> u8 {
        1 << (self as u8)
    }

    /// Whether the direction is a diagonal
    pub const fn is_corner(self) -> bool {
        (self as u8) % 2 == 1
    }
}

/// Presence of the eight surrounding cells as a bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NeighborMask(u8);

impl NeighborMask {
    /// Wrap raw mask bits
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw mask bits
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether the neighbor in `direction` is present
    pub const fn contains(self, direction: Direction) -> bool {
        self.0 & direction.weight() != 0
    }

    /// Mask with one direction marked present
    #[must_use]
    pub const fn with(self, direction: Direction) -> Self {
        Self(self.0 | direction.weight())
    }

    /// Build the mask of a cell from grid lookups
    ///
    /// `present` decides which occupants count as neighbors; it sees every
    /// surrounding occupant, including [`Occupant::Empty`].
    pub fn compute<G, F>(grid: &G, at: Coord, present: F) -> Self
    where
        G: TileGrid + ?Sized,
        F: Fn(Occupant) -> bool,
    {
        slots(at, &COMPASS)
            .zip(Direction::ALL)
            .filter(|&(neighbor, _)| {
                present(neighbor.map_or(Occupant::Empty, |cell| grid.occupant(cell)))
            })
            .fold(Self::default(), |mask, (_, direction)| mask.with(direction))
    }

    /// Clear every corner flanked by a present side
    ///
    /// Each side is tested against the mask as given; only corner bits are
    /// ever cleared, so the result does not depend on rule order.
    #[must_use]
    pub fn suppress_corners(self) -> Self {
        let cleared = Direction::SIDES
            .iter()
            .filter(|(side, _)| self.contains(*side))
            .flat_map(|(_, corners)| corners.iter())
            .fold(0_u8, |acc, corner| acc | corner.weight());
        Self(self.0 & !cleared)
    }

    /// Rotate the pattern by `steps` quarter turns
    ///
    /// Each step moves every bit two positions up the ring, wrapping from the
    /// north-west bit back to north-east.
    #[must_use]
    pub const fn rotated(self, steps: u32) -> Self {
        Self(self.0.rotate_left(2 * (steps % 4)))
    }
}

impl fmt::Display for NeighborMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08b}", self.0)
    }
}

/// Presence predicate counting every occupant except `kind` and empty cells
pub fn present_unless(kind: Occupant) -> impl Fn(Occupant) -> bool {
    move |occupant| occupant.is_occupied() && occupant != kind
}
