//! Fill brush that keeps a one-cell fringe around everything it paints
//!
//! Painting turns every empty or fringe cell touching the painted cell into
//! fringe. Erasing re-checks the 3x3 block: a fringe cell stays while anything
//! in its block is not fringe, and is pruned once its whole block is fringe.

use crate::brush::stroke::GridBrush;
use crate::spatial::cell::Occupant;
use crate::spatial::coord::Coord;
use crate::spatial::neighborhood::{MOORE, around};
use crate::spatial::target::TileGrid;

/// Brush painting [`Occupant::Fill`] with a self-healing [`Occupant::Fringe`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FringeBrush;

impl FringeBrush {
    /// Create the brush
    pub const fn new() -> Self {
        Self
    }

    /// Decide whether an open cell stays fringe or is pruned
    ///
    /// Looks at the 3x3 block centered on `at`, the cell itself included. Any
    /// non-fringe cell in the block keeps `at` as fringe; a block made only of
    /// fringe empties it. Either way the cell is rewritten and redisplayed.
    pub fn settle<G: TileGrid + ?Sized>(grid: &mut G, at: Coord) {
        let borders_something =
            around(at, &MOORE).any(|cell| grid.occupant(cell) != Occupant::Fringe);

        let next = if borders_something {
            Occupant::Fringe
        } else {
            log::trace!("pruning enclosed fringe at {at}");
            Occupant::Empty
        };
        grid.set_occupant(at, next);
        grid.request_redisplay(at);
    }
}

impl GridBrush for FringeBrush {
    fn paint<G: TileGrid + ?Sized>(&self, grid: &mut G, at: Coord) {
        grid.set_occupant(at, Occupant::Fill);

        for cell in around(at, &MOORE) {
            if grid.occupant(cell).is_open() {
                grid.set_occupant(cell, Occupant::Fringe);
                grid.request_redisplay(cell);
            }
        }
    }

    fn erase<G: TileGrid + ?Sized>(&self, grid: &mut G, at: Coord) {
        grid.set_occupant(at, Occupant::Empty);

        for cell in around(at, &MOORE) {
            if grid.occupant(cell).is_open() {
                Self::settle(grid, cell);
            }
        }
    }

    fn pick<G: TileGrid + ?Sized>(&self, grid: &G, at: Coord) -> Occupant {
        match grid.occupant(at) {
            Occupant::Fringe => Occupant::Empty,
            authored => authored,
        }
    }
}
