//! Tag-driven area brush with quadrant-blended edges
//!
//! The brush paints tags, not tiles. Each tag places area occupants in the
//! 2x2 footprint to its south-east wherever the footprint is empty, and an
//! occupant lives only as long as one of the tags whose footprint covers it.

use crate::brush::stroke::GridBrush;
use crate::spatial::cell::{Occupant, Tag};
use crate::spatial::coord::Coord;
use crate::spatial::neighborhood::{AREA_FOOTPRINT, AREA_SUPPORT, around};
use crate::spatial::target::TileGrid;

/// Brush growing and shrinking [`Occupant::Area`] regions from cell tags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AreaBrush;

impl AreaBrush {
    /// Create the brush
    pub const fn new() -> Self {
        Self
    }

    /// Whether any tag still covers a cell
    pub fn is_supported<G: TileGrid + ?Sized>(grid: &G, at: Coord) -> bool {
        around(at, &AREA_SUPPORT).any(|tagged| grid.tag(tagged).is_present())
    }

    /// Redisplay a footprint cell and clear it once no tag supports it
    ///
    /// The occupant is left untouched while supported, whatever kind it is.
    pub fn recede<G: TileGrid + ?Sized>(grid: &mut G, at: Coord) {
        grid.request_redisplay(at);

        if !Self::is_supported(grid, at) {
            log::trace!("area receded past {at}");
            grid.set_occupant(at, Occupant::Empty);
        }
    }
}

impl GridBrush for AreaBrush {
    fn paint<G: TileGrid + ?Sized>(&self, grid: &mut G, at: Coord) {
        grid.set_tag(at, Tag::Present);

        for cell in around(at, &AREA_FOOTPRINT) {
            if !grid.occupant(cell).is_occupied() {
                grid.set_occupant(cell, Occupant::Area);
            }
            grid.request_redisplay(cell);
        }
    }

    fn erase<G: TileGrid + ?Sized>(&self, grid: &mut G, at: Coord) {
        grid.erase_tag(at);

        for cell in around(at, &AREA_FOOTPRINT) {
            Self::recede(grid, cell);
        }
    }

    fn pick<G: TileGrid + ?Sized>(&self, grid: &G, at: Coord) -> Occupant {
        match grid.occupant(at) {
            Occupant::Area => Occupant::Area,
            Occupant::Empty | Occupant::Fill | Occupant::Fringe => Occupant::Empty,
        }
    }
}
