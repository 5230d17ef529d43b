//! Brushes that keep derived grid state consistent after local edits

/// Tag-driven area growth and decay
pub mod area;
/// Fill painting with a self-healing fringe border
pub mod fringe;
/// Brush capability and stroke dispatch
pub mod stroke;

pub use area::AreaBrush;
pub use fringe::FringeBrush;
pub use stroke::{GridBrush, Stroke, apply_stroke};
