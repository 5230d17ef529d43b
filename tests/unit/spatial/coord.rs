//! Tests for coordinates, offsets and cell rectangles

#[cfg(test)]
mod tests {
    use crate::spatial::coord::{CellBounds, Coord, Offset};

    // Tests offsets keep the layer
    // Verified by resetting layer to 0 in checked_offset
    #[test]
    fn test_offset_preserves_layer() {
        let moved = Coord::new(3, -2, 5).checked_offset(Offset::new(-1, 4));
        assert_eq!(moved, Some(Coord::new(2, 2, 5)));
    }

    // Tests offsets past either end of the i32 range have no cell
    // Verified by using wrapping_add in checked_offset
    #[test]
    fn test_offset_past_range_edge() {
        let east = Coord::flat(i32::MAX, 0);
        let south = Coord::flat(0, i32::MIN);

        assert_eq!(east.checked_offset(Offset::new(1, 0)), None);
        assert_eq!(south.checked_offset(Offset::new(0, -1)), None);
        assert_eq!(
            east.checked_offset(Offset::new(-1, -1)),
            Some(Coord::flat(i32::MAX - 1, -1))
        );
    }

    // Tests display format used in log records
    // Verified by dropping the layer from Display
    #[test]
    fn test_coord_display() {
        assert_eq!(Coord::new(1, -2, 3).to_string(), "(1, -2, 3)");
        assert_eq!(Coord::flat(4, 5).planar(), [4, 5]);
    }

    // Tests half-open bounds cover exactly width * height cells in scan order
    // Verified by making the x range inclusive
    #[test]
    fn test_bounds_cells_scan_order() {
        let bounds = CellBounds::new(0..3, 10..12, 1);
        let cells: Vec<Coord> = bounds.cells().collect();

        assert_eq!(bounds.area(), 6);
        assert_eq!(cells.len(), 6);
        assert_eq!(cells.first(), Some(&Coord::new(0, 10, 1)));
        assert_eq!(cells.get(1), Some(&Coord::new(1, 10, 1)));
        assert_eq!(cells.get(3), Some(&Coord::new(0, 11, 1)));
        assert_eq!(cells.last(), Some(&Coord::new(2, 11, 1)));
    }

    // Tests inverted and empty ranges produce no cells
    // Verified by removing saturating_sub in area
    #[test]
    fn test_empty_bounds() {
        let inverted = CellBounds::new(5..2, 0..4, 0);
        assert_eq!(inverted.area(), 0);
        assert_eq!(inverted.cells().count(), 0);
    }

    // Tests containment respects the layer and exclusive end
    // Verified by ignoring the layer in contains
    #[test]
    fn test_bounds_contains() {
        let bounds = CellBounds::new(-2..2, -2..2, 0);
        assert!(bounds.contains(Coord::flat(-2, 1)));
        assert!(!bounds.contains(Coord::flat(2, 0)));
        assert!(!bounds.contains(Coord::new(0, 0, 1)));
    }
}
