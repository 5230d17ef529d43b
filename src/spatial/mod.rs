//! Spatial data structures and grid storage
//!
//! This module contains spatial-related functionality including:
//! - Cell coordinates and fixed neighborhood tables
//! - The grid capability brushes paint into
//! - Sparse per-layer storage in fixed-size chunks
//! - An in-memory tile map host

/// Occupant kinds and area tags
pub mod cell;
/// Cell coordinates, offsets and rectangles
pub mod coord;
/// Fixed-size storage chunks and world-position splitting
pub mod chunk;
/// Sparse storage for a single layer
pub mod grid;
/// Shared neighborhood offset tables
pub mod neighborhood;
/// Bit-packed per-chunk tag storage
pub mod tags;
/// Grid capability consumed by brushes
pub mod target;
/// In-memory layered tile map with queued redisplay
pub mod tilemap;

pub use cell::{Occupant, Tag};
pub use coord::{CellBounds, Coord, Offset};
pub use target::TileGrid;
pub use tilemap::TileMap;
