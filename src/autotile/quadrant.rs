//! Quadrant blending for tag-driven areas
//!
//! A cell sits at the shared corner of four tag positions. Which of those four
//! are tagged picks one of sixteen independently authored blend sprites; there
//! is no rotation or corner reduction in this family.

use crate::spatial::coord::Coord;
use crate::spatial::neighborhood::{QUADRANT, slots};
use crate::spatial::target::TileGrid;

/// Four-bit mask of tagged quadrant positions
///
/// Bit 0 is `(-1, 1)`, bit 1 `(0, 1)`, bit 2 `(0, 0)` and bit 3 `(-1, 0)`
/// relative to the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct QuadrantMask(u8);

impl QuadrantMask {
    /// Wrap raw bits, keeping only the low four
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0b1111)
    }

    /// Raw mask bits (0-15)
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Build the mask of a cell from tag lookups
    pub fn compute<G: TileGrid + ?Sized>(grid: &G, at: Coord) -> Self {
        slots(at, &QUADRANT)
            .enumerate()
            .filter(|&(_, position)| position.is_some_and(|cell| grid.tag(cell).is_present()))
            .fold(Self::default(), |mask, (bit, _)| Self(mask.0 | (1 << bit)))
    }
}

/// Blend sprite slot (0-15)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlendShape(u8);

impl BlendShape {
    /// Sprite slot index
    pub const fn slot(self) -> usize {
        self.0 as usize
    }
}

/// Blend sprite for each quadrant mask, indexed by mask value
pub const BLEND_TABLE: [BlendShape; 16] = [
    BlendShape(0),
    BlendShape(1),
    BlendShape(2),
    BlendShape(3),
    BlendShape(4),
    BlendShape(5),
    BlendShape(6),
    BlendShape(7),
    BlendShape(8),
    BlendShape(9),
    BlendShape(10),
    BlendShape(11),
    BlendShape(12),
    BlendShape(13),
    BlendShape(14),
    BlendShape(15),
];

/// Blend sprite selected by a quadrant mask
pub fn blend_shape(mask: QuadrantMask) -> BlendShape {
    BLEND_TABLE
        .get(usize::from(mask.bits()))
        .copied()
        .unwrap_or(BlendShape(0))
}
