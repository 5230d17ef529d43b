//! Per-cell values: occupant kinds and area tags

/// What a cell holds
///
/// Kinds are compared by variant, so "the same kind of neighbor" is a plain
/// equality test rather than a handle identity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Occupant {
    /// Nothing painted
    #[default]
    Empty,
    /// Authored content of the fringe brush
    Fill,
    /// Derived border marker traced around fill
    Fringe,
    /// Occupant placed by the tag-driven area brush
    Area,
}

impl Occupant {
    /// Whether anything at all occupies the cell
    pub const fn is_occupied(self) -> bool {
        !matches!(self, Self::Empty)
    }

    /// Whether the fringe brush may overwrite the cell with a border marker
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Empty | Self::Fringe)
    }

    /// Stable index used by palettes and debugging output
    pub const fn index(self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Fill => 1,
            Self::Fringe => 2,
            Self::Area => 3,
        }
    }
}

/// Area-membership tag attached to a cell independently of its occupant
///
/// Tags survive occupant changes and are only removed by an explicit erase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Tag {
    /// No tag stored
    #[default]
    Absent = 0,
    /// The cell belongs to a painted area
    Present = 1,
}

impl Tag {
    /// Whether the tag marks area membership
    pub const fn is_present(self) -> bool {
        matches!(self, Self::Present)
    }
}

impl From<bool> for Tag {
    fn from(present: bool) -> Self {
        if present { Self::Present } else { Self::Absent }
    }
}
