//! Fixed neighborhood offset tables shared by mask computation and brushes
//!
//! Every neighborhood walk in the crate goes through [`around`] or [`slots`]
//! with one of the constant tables below, so paint, erase, decay and mask
//! building all agree on which cells they touch and in which order.

use crate::spatial::coord::{Coord, Offset};

/// The 3x3 block centered on a cell, in scan order (south row first)
pub const MOORE: [Offset; 9] = [
    Offset::new(-1, -1),
    Offset::new(0, -1),
    Offset::new(1, -1),
    Offset::new(-1, 0),
    Offset::new(0, 0),
    Offset::new(1, 0),
    Offset::new(-1, 1),
    Offset::new(0, 1),
    Offset::new(1, 1),
];

/// The 8 surrounding cells clockwise from north: N, NE, E, SE, S, SW, W, NW
pub const COMPASS: [Offset; 8] = [
    Offset::new(0, 1),
    Offset::new(1, 1),
    Offset::new(1, 0),
    Offset::new(1, -1),
    Offset::new(0, -1),
    Offset::new(-1, -1),
    Offset::new(-1, 0),
    Offset::new(-1, 1),
];

/// Cells a tagged cell fills when painted, and re-checks when erased
pub const AREA_FOOTPRINT: [Offset; 4] = [
    Offset::new(0, -1),
    Offset::new(1, -1),
    Offset::new(0, 0),
    Offset::new(1, 0),
];

/// Tag positions that keep a cell's area occupant alive
///
/// The mirror image of [`AREA_FOOTPRINT`]: a cell is supported by exactly the
/// tags whose footprint covers it.
pub const AREA_SUPPORT: [Offset; 4] = [
    Offset::new(-1, 0),
    Offset::new(0, 0),
    Offset::new(-1, 1),
    Offset::new(0, 1),
];

/// Tag positions sampled for quadrant blending, in mask bit order
pub const QUADRANT: [Offset; 4] = [
    Offset::new(-1, 1),
    Offset::new(0, 1),
    Offset::new(0, 0),
    Offset::new(-1, 0),
];

/// One entry per offset, in table order, `None` where the cell lies past the
/// edge of the coordinate range
///
/// Mask builders use this form so each entry stays aligned with its bit.
pub fn slots(center: Coord, offsets: &[Offset]) -> impl Iterator<Item = Option<Coord>> + '_ {
    offsets.iter().map(move |&delta| center.checked_offset(delta))
}

/// Coordinates of `center` shifted by each offset, in table order
///
/// Cells past the edge of the coordinate range do not exist and are skipped.
pub fn around(center: Coord, offsets: &[Offset]) -> impl Iterator<Item = Coord> + '_ {
    slots(center, offsets).flatten()
}
