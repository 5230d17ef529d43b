//! Variant selection for autotiled cells
//!
//! Turns a cell's neighborhood into the sprite shape (and rotation) it should
//! display. Two independent families live here: eight-neighbor edge masks for
//! fringe borders and four-position tag quadrants for blended areas.

/// Variant dispatch by occupant kind at redisplay time
pub mod display;
/// Canonical edge catalog and rotation-probing resolver
pub mod edge;
/// Neighbor presence masks, corner suppression and rotation
pub mod mask;
/// Quadrant masks and blend sprite selection
pub mod quadrant;

pub use display::{Variant, variant_at};
pub use edge::{EdgeShape, EdgeVariant, Rotation, resolve_edge};
pub use mask::{Direction, NeighborMask};
pub use quadrant::{BlendShape, QuadrantMask};
