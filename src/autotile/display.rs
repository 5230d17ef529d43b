//! Variant selection at redisplay time

use crate::autotile::edge::{EdgeShape, Rotation, resolve_edge};
use crate::autotile::mask::{NeighborMask, present_unless};
use crate::autotile::quadrant::{BlendShape, QuadrantMask, blend_shape};
use crate::spatial::cell::Occupant;
use crate::spatial::coord::{Coord, Offset};
use crate::spatial::neighborhood::MOORE;
use crate::spatial::target::TileGrid;

/// Visual override chosen for a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Fringe border sprite and its rotation
    Edge {
        /// Catalogued shape
        shape: EdgeShape,
        /// Rotation to draw it with
        rotation: Rotation,
    },
    /// Area blend sprite
    Blend(BlendShape),
}

impl Variant {
    /// Sprite slot within the family's sprite table
    pub const fn slot(self) -> usize {
        match self {
            Self::Edge { shape, .. } => shape.slot(),
            Self::Blend(shape) => shape.slot(),
        }
    }
}

/// Recompute the variant a cell should display
///
/// Fringe cells resolve against every occupied neighbor that is not itself
/// fringe; area cells blend from the surrounding tags. Other occupants carry
/// no override, and an uncatalogued edge mask yields none either.
pub fn variant_at<G: TileGrid + ?Sized>(grid: &G, at: Coord) -> Option<Variant> {
    match grid.occupant(at) {
        Occupant::Fringe => {
            let mask = NeighborMask::compute(grid, at, present_unless(Occupant::Fringe));
            let resolved = resolve_edge(mask);
            resolved.shape.map(|shape| Variant::Edge {
                shape,
                rotation: resolved.rotation,
            })
        }
        Occupant::Area => Some(Variant::Blend(blend_shape(QuadrantMask::compute(grid, at)))),
        Occupant::Empty | Occupant::Fill => None,
    }
}

/// Cells whose display depends on the occupant of a redisplayed cell
///
/// An edge cell's own shape depends on its 3x3 block, so refreshing one
/// refreshes that whole block; every other kind refreshes only itself.
pub const fn refresh_footprint(occupant: Occupant) -> &'static [Offset] {
    const SELF_ONLY: [Offset; 1] = [Offset::new(0, 0)];
    match occupant {
        Occupant::Fringe => &MOORE,
        Occupant::Empty | Occupant::Fill | Occupant::Area => &SELF_ONLY,
    }
}
