//! Fixed-size square chunks that tile a layer
//!
//! A layer only allocates the chunks holding non-blank cells, so an edit costs
//! the same wherever it lands and however far apart earlier edits were. World
//! positions split into a chunk key and an in-chunk index by Euclidean
//! division, which is total over the whole `i32` range.

use ndarray::Array2;
use num_traits::cast;

use crate::autotile::display::Variant;
use crate::io::configuration::CHUNK_SIDE;
use crate::spatial::cell::{Occupant, Tag};
use crate::spatial::tags::TagPlane;

/// Trait for cell values that fill a freshly allocated chunk
pub trait Blank {
    /// The value new cells start with
    fn blank() -> Self;

    /// Whether the value is the one new cells start with
    fn is_blank(&self) -> bool;
}

impl Blank for Occupant {
    fn blank() -> Self {
        Self::Empty
    }

    fn is_blank(&self) -> bool {
        !self.is_occupied()
    }
}

impl<T> Blank for Option<T> {
    fn blank() -> Self {
        None
    }

    fn is_blank(&self) -> bool {
        self.is_none()
    }
}

/// Chunk key and in-chunk index of a world position
pub fn split(planar: [i32; 2]) -> ([i32; 2], [usize; 2]) {
    let side = i32::from(CHUNK_SIDE);
    let key = [planar[0].div_euclid(side), planar[1].div_euclid(side)];
    let local = [
        cast::<i32, usize>(planar[0].rem_euclid(side)).unwrap_or(0),
        cast::<i32, usize>(planar[1].rem_euclid(side)).unwrap_or(0),
    ];
    (key, local)
}

/// World position of an in-chunk index, if it fits in `i32`
pub fn join(key: [i32; 2], local: [usize; 2]) -> Option<[i32; 2]> {
    let side = i32::from(CHUNK_SIDE);
    let x = key[0]
        .checked_mul(side)?
        .checked_add(cast::<usize, i32>(local[0])?)?;
    let y = key[1]
        .checked_mul(side)?
        .checked_add(cast::<usize, i32>(local[1])?)?;
    Some([x, y])
}

fn blank_plane<T: Blank + Clone>() -> Array2<T> {
    let side = usize::from(CHUNK_SIDE);
    Array2::from_elem((side, side), T::blank())
}

/// Storage planes of one chunk
///
/// Occupants and displayed variants are dense over the chunk; tags are kept
/// bit-packed in a [`TagPlane`] of the same shape.
#[derive(Debug, Clone)]
pub struct Chunk {
    occupants: Array2<Occupant>,
    variants: Array2<Option<Variant>>,
    tags: TagPlane,
}

impl Default for Chunk {
    fn default() -> Self {
        Self::new()
    }
}

impl Chunk {
    /// Create a chunk whose cells are all blank
    pub fn new() -> Self {
        let side = usize::from(CHUNK_SIDE);
        Self {
            occupants: blank_plane(),
            variants: blank_plane(),
            tags: TagPlane::new([side, side]),
        }
    }

    /// Occupant at an in-chunk index
    pub fn occupant(&self, local: [usize; 2]) -> Occupant {
        self.occupants.get(local).copied().unwrap_or_default()
    }

    /// Store an occupant, ignoring indices outside the chunk
    pub fn set_occupant(&mut self, local: [usize; 2], occupant: Occupant) {
        if let Some(cell) = self.occupants.get_mut(local) {
            *cell = occupant;
        }
    }

    /// Tag at an in-chunk index
    pub fn tag(&self, local: [usize; 2]) -> Tag {
        Tag::from(self.tags.contains(local))
    }

    /// Store a tag, ignoring indices outside the chunk
    pub fn set_tag(&mut self, local: [usize; 2], tag: Tag) {
        self.tags.set(local, tag.is_present());
    }

    /// Displayed variant at an in-chunk index
    pub fn variant(&self, local: [usize; 2]) -> Option<Variant> {
        self.variants.get(local).copied().flatten()
    }

    /// Store a displayed variant, ignoring indices outside the chunk
    pub fn set_variant(&mut self, local: [usize; 2], variant: Option<Variant>) {
        if let Some(cell) = self.variants.get_mut(local) {
            *cell = variant;
        }
    }

    /// Number of tagged cells
    pub fn tag_count(&self) -> usize {
        self.tags.count()
    }

    /// Whether every plane holds only blank values
    pub fn is_blank(&self) -> bool {
        self.tags.is_empty()
            && self.occupants.iter().all(Blank::is_blank)
            && self.variants.iter().all(Blank::is_blank)
    }

    /// In-chunk indices of occupied cells
    pub fn occupied(&self) -> impl Iterator<Item = [usize; 2]> + '_ {
        self.occupants
            .indexed_iter()
            .filter(|(_, occupant)| occupant.is_occupied())
            .map(|((i, j), _)| [i, j])
    }
}
