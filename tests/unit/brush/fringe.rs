//! Tests for fill painting and fringe maintenance

#[cfg(test)]
mod tests {
    use crate::brush::fringe::FringeBrush;
    use crate::brush::stroke::GridBrush;
    use crate::spatial::cell::Occupant;
    use crate::spatial::coord::{CellBounds, Coord};
    use crate::spatial::neighborhood::{MOORE, around};
    use crate::spatial::target::TileGrid;
    use crate::spatial::tilemap::TileMap;

    fn count(map: &TileMap, kind: Occupant) -> usize {
        map.occupied_cells(0)
            .into_iter()
            .filter(|&at| map.occupant(at) == kind)
            .count()
    }

    // Tests painting one cell surrounds it with fringe
    // Verified by skipping the neighborhood loop in paint
    #[test]
    fn test_paint_surrounds_with_fringe() {
        let mut map = TileMap::new();
        FringeBrush::new().paint(&mut map, Coord::flat(0, 0));

        assert_eq!(map.occupant(Coord::flat(0, 0)), Occupant::Fill);
        for at in around(Coord::flat(0, 0), &MOORE).filter(|&at| at != Coord::flat(0, 0)) {
            assert_eq!(map.occupant(at), Occupant::Fringe, "{at}");
            assert!(map.is_pending(at));
        }
        assert_eq!(map.occupied_cells(0).len(), 9);
    }

    // Tests painting beside existing fill never overwrites it with fringe
    // Verified by treating Fill as open
    #[test]
    fn test_paint_keeps_neighboring_fill() {
        let brush = FringeBrush::new();
        let mut map = TileMap::new();
        brush.paint(&mut map, Coord::flat(0, 0));
        brush.paint(&mut map, Coord::flat(1, 0));

        assert_eq!(map.occupant(Coord::flat(0, 0)), Occupant::Fill);
        assert_eq!(map.occupant(Coord::flat(1, 0)), Occupant::Fill);
        assert_eq!(count(&map, Occupant::Fringe), 10);
    }

    // Tests fringe paint leaves other brushes' occupants alone
    // Verified by overwriting every occupied neighbor
    #[test]
    fn test_paint_keeps_area_occupants() {
        let mut map = TileMap::new();
        map.set_occupant(Coord::flat(1, 1), Occupant::Area);
        FringeBrush::new().paint(&mut map, Coord::flat(0, 0));
        assert_eq!(map.occupant(Coord::flat(1, 1)), Occupant::Area);
    }

    // Tests the erased cell next to remaining fill turns into fringe
    // Verified by leaving the erased cell out of the settle loop
    #[test]
    fn test_erase_beside_fill_leaves_fringe() {
        let brush = FringeBrush::new();
        let mut map = TileMap::new();
        brush.paint(&mut map, Coord::flat(0, 0));
        brush.paint(&mut map, Coord::flat(1, 0));
        brush.erase(&mut map, Coord::flat(1, 0));

        assert_eq!(map.occupant(Coord::flat(1, 0)), Occupant::Fringe);
        assert_eq!(map.occupant(Coord::flat(0, 0)), Occupant::Fill);
        assert_eq!(map.occupant(Coord::flat(2, 0)), Occupant::Fringe);
    }

    // Tests painting then erasing a lone cell leaves a 3x3 block of fringe
    // Verified by excluding the cell itself from the settle check
    #[test]
    fn test_paint_then_erase_single_cell() {
        let brush = FringeBrush::new();
        let mut map = TileMap::new();
        brush.paint(&mut map, Coord::flat(0, 0));
        brush.erase(&mut map, Coord::flat(0, 0));

        assert_eq!(count(&map, Occupant::Fringe), 9);
        assert_eq!(count(&map, Occupant::Fill), 0);
        assert_eq!(map.occupant(Coord::flat(0, 0)), Occupant::Fringe);
    }

    // Tests settle prunes fringe whose whole block is fringe
    // Verified by inverting the borders_something check
    #[test]
    fn test_settle_prunes_enclosed_fringe() {
        let mut map = TileMap::new();
        for at in CellBounds::new(-2..3, -2..3, 0).cells() {
            map.set_occupant(at, Occupant::Fringe);
        }

        FringeBrush::settle(&mut map, Coord::flat(0, 0));
        assert_eq!(map.occupant(Coord::flat(0, 0)), Occupant::Empty);

        FringeBrush::settle(&mut map, Coord::flat(1, 1));
        assert_eq!(map.occupant(Coord::flat(1, 1)), Occupant::Fringe);
    }

    // Tests settle keeps fringe that still borders fill
    // Verified by pruning whenever the cell itself is fringe
    #[test]
    fn test_settle_keeps_bordering_fringe() {
        let mut map = TileMap::new();
        for at in CellBounds::new(-2..3, -2..3, 0).cells() {
            map.set_occupant(at, Occupant::Fringe);
        }
        map.set_occupant(Coord::flat(1, -1), Occupant::Fill);

        FringeBrush::settle(&mut map, Coord::flat(0, 0));
        assert_eq!(map.occupant(Coord::flat(0, 0)), Occupant::Fringe);
        assert!(map.is_pending(Coord::flat(-1, 1)));
    }

    // Tests erase never touches authored fill around the cell
    // Verified by settling every cell of the block
    #[test]
    fn test_erase_keeps_fill_neighbors() {
        let brush = FringeBrush::new();
        let mut map = TileMap::new();
        for at in CellBounds::new(-1..2, -1..2, 0).cells() {
            brush.paint(&mut map, at);
        }
        brush.erase(&mut map, Coord::flat(0, 0));

        assert_eq!(map.occupant(Coord::flat(0, 0)), Occupant::Fringe);
        assert_eq!(count(&map, Occupant::Fill), 8);
    }

    // Tests pick hides derived fringe
    // Verified by returning the raw occupant
    #[test]
    fn test_pick_masks_fringe() {
        let brush = FringeBrush::new();
        let mut map = TileMap::new();
        brush.paint(&mut map, Coord::flat(0, 0));

        assert_eq!(brush.pick(&map, Coord::flat(0, 0)), Occupant::Fill);
        assert_eq!(brush.pick(&map, Coord::flat(1, 1)), Occupant::Empty);
        assert_eq!(brush.pick(&map, Coord::flat(5, 5)), Occupant::Empty);
    }

    // Tests paint and erase at the edges of the coordinate range
    // Verified by shifting neighbors with unchecked addition
    #[test]
    fn test_paint_and_erase_at_range_edges() {
        let brush = FringeBrush::new();
        for (at, existing) in [
            (Coord::flat(i32::MAX, 0), 6),
            (Coord::flat(i32::MIN, i32::MIN), 4),
            (Coord::flat(i32::MAX, i32::MAX), 4),
        ] {
            let mut map = TileMap::new();
            brush.paint(&mut map, at);
            map.refresh();
            assert_eq!(map.occupant(at), Occupant::Fill, "{at}");
            assert_eq!(map.occupied_cells(0).len(), existing, "{at}");

            brush.erase(&mut map, at);
            map.refresh();
            assert_eq!(count(&map, Occupant::Fill), 0, "{at}");
            assert_eq!(count(&map, Occupant::Fringe), existing, "{at}");
        }
    }
}
