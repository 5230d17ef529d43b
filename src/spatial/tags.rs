//! Bit-packed area tags for one chunk

use bitvec::prelude::*;
use std::fmt;

/// Bit-packed area tags
///
/// Stored row-major over the same index space as the chunk's occupant array,
/// one bit per cell. Indices outside the plane read as untagged.
#[derive(Clone, Debug, Default)]
pub struct TagPlane {
    bits: BitVec,
    dims: [usize; 2],
}

impl TagPlane {
    /// Create a plane with no tags set
    pub fn new(dims: [usize; 2]) -> Self {
        Self {
            bits: bitvec![0; dims[0] * dims[1]],
            dims,
        }
    }

    /// Plane dimensions as `[x, y]` cell counts
    pub const fn dims(&self) -> [usize; 2] {
        self.dims
    }

    const fn flat_index(&self, index: [usize; 2]) -> Option<usize> {
        if index[0] < self.dims[0] && index[1] < self.dims[1] {
            Some(index[0] * self.dims[1] + index[1])
        } else {
            None
        }
    }

    /// Test whether a cell is tagged
    pub fn contains(&self, index: [usize; 2]) -> bool {
        self.flat_index(index)
            .is_some_and(|flat| self.bits.get(flat).as_deref() == Some(&true))
    }

    /// Set or clear a cell's tag, ignoring indices outside the plane
    pub fn set(&mut self, index: [usize; 2], present: bool) {
        if let Some(flat) = self.flat_index(index) {
            self.bits.set(flat, present);
        }
    }

    /// Count tagged cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if no cell is tagged
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }
}

impl fmt::Display for TagPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TagPlane({}x{}, {} tagged)",
            self.dims[0],
            self.dims[1],
            self.count()
        )
    }
}
