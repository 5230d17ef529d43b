//! In-memory layered tile map implementing the brush-facing grid capability
//!
//! Redisplay requests are queued and resolved in batches by [`TileMap::refresh`],
//! which stores the chosen variant per cell so renderers can read it back.

use std::collections::{BTreeMap, HashSet, VecDeque};

use crate::autotile::display::{Variant, refresh_footprint, variant_at};
use crate::spatial::cell::{Occupant, Tag};
use crate::spatial::coord::{CellBounds, Coord};
use crate::spatial::grid::GridLayer;
use crate::spatial::neighborhood::around;
use crate::spatial::target::TileGrid;

/// Layered grid with a deduplicated redisplay queue
#[derive(Debug, Clone, Default)]
pub struct TileMap {
    layers: BTreeMap<i32, GridLayer>,
    pending: VecDeque<Coord>,
    queued: HashSet<Coord>,
}

impl TileMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    fn layer(&self, layer: i32) -> Option<&GridLayer> {
        self.layers.get(&layer)
    }

    fn layer_mut(&mut self, layer: i32) -> &mut GridLayer {
        self.layers.entry(layer).or_default()
    }

    fn enqueue(&mut self, at: Coord) {
        if self.queued.insert(at) {
            self.pending.push_back(at);
        }
    }

    /// Cells waiting for their variant to be recomputed, oldest first
    pub fn pending_redisplay(&self) -> impl Iterator<Item = Coord> + '_ {
        self.pending.iter().copied()
    }

    /// Whether a cell is waiting for redisplay
    pub fn is_pending(&self, at: Coord) -> bool {
        self.queued.contains(&at)
    }

    /// Recompute and store the variant of every queued cell
    ///
    /// Returns the number of cells refreshed.
    pub fn refresh(&mut self) -> usize {
        let mut refreshed = 0;
        while let Some(at) = self.pending.pop_front() {
            self.queued.remove(&at);
            let variant = variant_at(&*self, at);
            if variant.is_some() || self.layer(at.layer).is_some() {
                self.layer_mut(at.layer).set_variant(at.planar(), variant);
            }
            refreshed += 1;
        }
        log::trace!("refreshed {refreshed} cells");
        refreshed
    }

    /// Variant stored by the last refresh of a cell
    pub fn variant(&self, at: Coord) -> Option<Variant> {
        self.layer(at.layer)
            .and_then(|layer| layer.variant(at.planar()))
    }

    /// Smallest bounds containing every occupied cell of a layer
    pub fn occupied_bounds(&self, layer: i32) -> Option<CellBounds> {
        self.layer(layer)
            .and_then(|stored| stored.occupied_bounds(layer))
    }

    /// Number of tagged cells on a layer
    pub fn tag_count(&self, layer: i32) -> usize {
        self.layer(layer).map_or(0, GridLayer::tag_count)
    }

    /// Every occupied cell of a layer in scan order
    pub fn occupied_cells(&self, layer: i32) -> Vec<Coord> {
        self.layer(layer)
            .map(|stored| stored.occupied_cells(layer))
            .unwrap_or_default()
    }

    /// Number of storage chunks allocated on a layer
    pub fn chunk_count(&self, layer: i32) -> usize {
        self.layer(layer).map_or(0, GridLayer::chunk_count)
    }
}

impl TileGrid for TileMap {
    fn occupant(&self, at: Coord) -> Occupant {
        self.layer(at.layer)
            .map(|layer| layer.occupant(at.planar()))
            .unwrap_or_default()
    }

    /// Stores the occupant and queues the cell, as a tilemap refreshes a cell
    /// whenever its tile changes
    fn set_occupant(&mut self, at: Coord, occupant: Occupant) {
        if occupant.is_occupied() || self.layer(at.layer).is_some() {
            self.layer_mut(at.layer).set_occupant(at.planar(), occupant);
        }
        self.enqueue(at);
    }

    fn tag(&self, at: Coord) -> Tag {
        self.layer(at.layer)
            .map(|layer| layer.tag(at.planar()))
            .unwrap_or_default()
    }

    fn set_tag(&mut self, at: Coord, tag: Tag) {
        if tag.is_present() || self.layer(at.layer).is_some() {
            self.layer_mut(at.layer).set_tag(at.planar(), tag);
        }
    }

    fn request_redisplay(&mut self, at: Coord) {
        let footprint = refresh_footprint(self.occupant(at));
        for cell in around(at, footprint) {
            self.enqueue(cell);
        }
    }
}
