//! Bitmask autotiling with incrementally maintained fringe borders and tag areas
//!
//! Brushes paint into any grid implementing [`spatial::TileGrid`] and keep
//! derived cells (fringe borders, area footprints) consistent after every local
//! edit without recomputing the grid. At redisplay time each autotiled cell is
//! resolved to a sprite shape from its immediate neighborhood.

#![forbid(unsafe_code)]

/// Variant resolution from neighbor masks and tag quadrants
pub mod autotile;
/// Fringe and area brushes plus stroke dispatch
pub mod brush;
/// Command-line host, rendering, configuration and error handling
pub mod io;
/// Coordinates, neighborhoods and grid storage
pub mod spatial;

pub use io::error::{Result, TileError};

#[cfg(test)]
#[path = "../tests/unit/mod.rs"]
mod unit;
