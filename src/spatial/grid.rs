//! Sparse storage for one grid layer
//!
//! Keeps occupants, displayed variants and area tags in square chunks keyed by
//! chunk position. A chunk is allocated by the first non-blank write inside it
//! and dropped again once every cell in it is blank, so memory follows the
//! painted cells rather than their bounding box. Reads of unallocated chunks
//! yield `Empty`/`Absent`/`None`.

use std::collections::HashMap;

use crate::autotile::display::Variant;
use crate::spatial::cell::{Occupant, Tag};
use crate::spatial::chunk::{Chunk, join, split};
use crate::spatial::coord::{CellBounds, Coord};

/// Storage of a single layer
#[derive(Debug, Clone, Default)]
pub struct GridLayer {
    /// Allocated chunks by chunk key
    chunks: HashMap<[i32; 2], Chunk>,
}

impl GridLayer {
    /// Create a layer that stores no cells yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of allocated chunks
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    fn read<T>(&self, planar: [i32; 2], get: impl FnOnce(&Chunk, [usize; 2]) -> T) -> Option<T> {
        let (key, local) = split(planar);
        self.chunks.get(&key).map(|chunk| get(chunk, local))
    }

    /// Apply a write, allocating the chunk only for non-blank values
    fn write(&mut self, planar: [i32; 2], allocate: bool, put: impl FnOnce(&mut Chunk, [usize; 2])) {
        let (key, local) = split(planar);
        if allocate {
            put(self.chunks.entry(key).or_default(), local);
        } else if let Some(chunk) = self.chunks.get_mut(&key) {
            put(chunk, local);
            if chunk.is_blank() {
                self.chunks.remove(&key);
            }
        }
    }

    /// Occupant at a world position
    pub fn occupant(&self, planar: [i32; 2]) -> Occupant {
        self.read(planar, Chunk::occupant).unwrap_or_default()
    }

    /// Store an occupant
    pub fn set_occupant(&mut self, planar: [i32; 2], occupant: Occupant) {
        self.write(planar, occupant.is_occupied(), |chunk, local| {
            chunk.set_occupant(local, occupant);
        });
    }

    /// Tag at a world position
    pub fn tag(&self, planar: [i32; 2]) -> Tag {
        self.read(planar, Chunk::tag).unwrap_or_default()
    }

    /// Store a tag
    pub fn set_tag(&mut self, planar: [i32; 2], tag: Tag) {
        self.write(planar, tag.is_present(), |chunk, local| {
            chunk.set_tag(local, tag);
        });
    }

    /// Displayed variant at a world position
    pub fn variant(&self, planar: [i32; 2]) -> Option<Variant> {
        self.read(planar, Chunk::variant).flatten()
    }

    /// Store the displayed variant of a cell
    pub fn set_variant(&mut self, planar: [i32; 2], variant: Option<Variant>) {
        self.write(planar, variant.is_some(), |chunk, local| {
            chunk.set_variant(local, variant);
        });
    }

    /// Number of tagged cells
    pub fn tag_count(&self) -> usize {
        self.chunks.values().map(Chunk::tag_count).sum()
    }

    /// World positions of every occupied cell, in no particular order
    fn occupied_planar(&self) -> impl Iterator<Item = [i32; 2]> + '_ {
        self.chunks
            .iter()
            .flat_map(|(&key, chunk)| chunk.occupied().filter_map(move |local| join(key, local)))
    }

    /// Every occupied cell in scan order: rows ascending, then columns
    pub fn occupied_cells(&self, layer: i32) -> Vec<Coord> {
        let mut cells: Vec<Coord> = self
            .occupied_planar()
            .map(|[x, y]| Coord::new(x, y, layer))
            .collect();
        cells.sort_unstable_by_key(|at| (at.y, at.x));
        cells
    }

    /// Smallest bounds containing every occupied cell, if any
    ///
    /// Bounds are half-open, so a cell at `i32::MAX` is clamped out of them.
    pub fn occupied_bounds(&self, layer: i32) -> Option<CellBounds> {
        let (min, max) = self.occupied_planar().fold(None::<([i32; 2], [i32; 2])>, |extent, world| {
            let (low, high) = extent.unwrap_or((world, world));
            Some((
                [low[0].min(world[0]), low[1].min(world[1])],
                [high[0].max(world[0]), high[1].max(world[1])],
            ))
        })?;

        Some(CellBounds::new(
            min[0]..max[0].saturating_add(1),
            min[1]..max[1].saturating_add(1),
            layer,
        ))
    }
}
