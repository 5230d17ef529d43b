//! The grid capability brushes paint into

use crate::spatial::cell::{Occupant, Tag};
use crate::spatial::coord::Coord;

/// Storage and redisplay surface a host exposes to brushes
///
/// Brushes only ever read and write through this trait, so any host that can
/// address cells by [`Coord`] can be painted. Implementations decide what a
/// redisplay request does; it may be handled immediately or queued.
pub trait TileGrid {
    /// Occupant stored at a cell, [`Occupant::Empty`] when nothing is stored
    fn occupant(&self, at: Coord) -> Occupant;

    /// Replace the occupant of a cell
    fn set_occupant(&mut self, at: Coord, occupant: Occupant);

    /// Tag stored at a cell, [`Tag::Absent`] when nothing is stored
    fn tag(&self, at: Coord) -> Tag;

    /// Store a tag at a cell
    fn set_tag(&mut self, at: Coord, tag: Tag);

    /// Remove any tag stored at a cell
    fn erase_tag(&mut self, at: Coord) {
        self.set_tag(at, Tag::Absent);
    }

    /// Ask the host to recompute the displayed variant of a cell
    fn request_redisplay(&mut self, at: Coord);
}
