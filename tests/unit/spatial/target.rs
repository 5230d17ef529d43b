//! Tests for the default methods of the grid capability

#[cfg(test)]
mod tests {
    use crate::spatial::cell::{Occupant, Tag};
    use crate::spatial::coord::Coord;
    use crate::spatial::target::TileGrid;
    use std::collections::HashMap;

    #[derive(Default)]
    struct SparseGrid {
        occupants: HashMap<Coord, Occupant>,
        tags: HashMap<Coord, Tag>,
        redisplayed: Vec<Coord>,
    }

    impl TileGrid for SparseGrid {
        fn occupant(&self, at: Coord) -> Occupant {
            self.occupants.get(&at).copied().unwrap_or_default()
        }

        fn set_occupant(&mut self, at: Coord, occupant: Occupant) {
            self.occupants.insert(at, occupant);
        }

        fn tag(&self, at: Coord) -> Tag {
            self.tags.get(&at).copied().unwrap_or_default()
        }

        fn set_tag(&mut self, at: Coord, tag: Tag) {
            self.tags.insert(at, tag);
        }

        fn request_redisplay(&mut self, at: Coord) {
            self.redisplayed.push(at);
        }
    }

    // Tests erase_tag clears through set_tag by default
    // Verified by making the default erase_tag a no-op
    #[test]
    fn test_default_erase_tag_clears() {
        let mut grid = SparseGrid::default();
        let at = Coord::flat(1, 1);
        grid.set_tag(at, Tag::Present);
        grid.erase_tag(at);

        assert_eq!(grid.tag(at), Tag::Absent);
        assert!(grid.redisplayed.is_empty());
    }

    // Tests the trait is usable as a trait object
    // Verified by adding a generic method to TileGrid
    #[test]
    fn test_trait_object_dispatch() {
        let mut grid = SparseGrid::default();
        let dynamic: &mut dyn TileGrid = &mut grid;
        dynamic.set_occupant(Coord::flat(0, 0), Occupant::Fill);
        dynamic.request_redisplay(Coord::flat(0, 0));

        assert_eq!(grid.occupant(Coord::flat(0, 0)), Occupant::Fill);
        assert_eq!(grid.redisplayed, vec![Coord::flat(0, 0)]);
    }
}
