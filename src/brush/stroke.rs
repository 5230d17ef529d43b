//! Brush capability and stroke dispatch
//!
//! A host hands strokes to [`apply_stroke`] together with whatever paint
//! target it currently has. No target means no work: strokes degrade to
//! no-ops instead of failing, and callers that need the edit to happen must
//! check for a target first.

use crate::spatial::cell::Occupant;
use crate::spatial::coord::{CellBounds, Coord};
use crate::spatial::target::TileGrid;

/// Paint operations a brush family supports
pub trait GridBrush {
    /// Paint a single cell
    fn paint<G: TileGrid + ?Sized>(&self, grid: &mut G, at: Coord);

    /// Erase a single cell
    fn erase<G: TileGrid + ?Sized>(&self, grid: &mut G, at: Coord);

    /// Paint every cell of a rectangle, in scan order
    fn box_fill<G: TileGrid + ?Sized>(&self, grid: &mut G, bounds: &CellBounds) {
        log::debug!("box fill of {} cells on layer {}", bounds.area(), bounds.layer);
        for at in bounds.cells() {
            self.paint(grid, at);
        }
    }

    /// Fill the connected region around a cell
    ///
    /// Unsupported unless a brush opts in; the default does nothing.
    fn flood_fill<G: TileGrid + ?Sized>(&self, _grid: &mut G, _at: Coord) {}

    /// Authored content at a cell, with derived occupants masked out
    fn pick<G: TileGrid + ?Sized>(&self, grid: &G, at: Coord) -> Occupant;
}

/// A single brush request from a paint tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stroke {
    /// Paint one cell
    Paint(Coord),
    /// Erase one cell
    Erase(Coord),
    /// Paint a rectangle
    BoxFill(CellBounds),
    /// Flood fill from a cell
    FloodFill(Coord),
    /// Read back authored content
    Pick(Coord),
}

/// Apply a stroke to an optional paint target
///
/// Returns the picked occupant for [`Stroke::Pick`] and `None` for every
/// other stroke, or whenever the target is missing.
pub fn apply_stroke<B, G>(brush: &B, target: Option<&mut G>, stroke: &Stroke) -> Option<Occupant>
where
    B: GridBrush,
    G: TileGrid + ?Sized,
{
    let Some(grid) = target else {
        log::debug!("no paint target, ignoring {stroke:?}");
        return None;
    };

    match stroke {
        Stroke::Paint(at) => brush.paint(grid, *at),
        Stroke::Erase(at) => brush.erase(grid, *at),
        Stroke::BoxFill(bounds) => brush.box_fill(grid, bounds),
        Stroke::FloodFill(at) => brush.flood_fill(grid, *at),
        Stroke::Pick(at) => return Some(brush.pick(&*grid, *at)),
    }
    None
}
