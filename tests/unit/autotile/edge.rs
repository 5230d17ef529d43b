//! Tests for edge catalog lookup and rotation probing

#[cfg(test)]
mod tests {
    use crate::autotile::edge::{
        EDGE_CATALOG, EdgeShape, EdgeVariant, Rotation, lookup, resolve_edge,
    };
    use crate::autotile::mask::{Direction, NeighborMask};
    use std::collections::HashSet;

    fn mask(directions: &[Direction]) -> NeighborMask {
        directions
            .iter()
            .fold(NeighborMask::default(), |mask, &d| mask.with(d))
    }

    // Tests the catalog has one entry per shape in slot order with unique masks
    // Verified by duplicating the mask of OneSide
    #[test]
    fn test_catalog_is_complete() {
        let masks: HashSet<u8> = EDGE_CATALOG.iter().map(|(bits, _)| *bits).collect();
        assert_eq!(masks.len(), EDGE_CATALOG.len());

        for (slot, (_, shape)) in EDGE_CATALOG.iter().enumerate() {
            assert_eq!(shape.slot(), slot);
            assert_eq!(EdgeShape::ALL.get(slot), Some(shape));
        }
    }

    // Tests every catalog mask resolves to its own shape without rotation
    // Verified by starting the rotation search at one quarter turn
    #[test]
    fn test_catalog_masks_resolve_unrotated() {
        for &(bits, shape) in &EDGE_CATALOG {
            assert_eq!(
                resolve_edge(NeighborMask::from_bits(bits)),
                EdgeVariant {
                    shape: Some(shape),
                    rotation: Rotation::R0,
                },
                "mask {bits}"
            );
        }
    }

    // Tests a single side resolves with the rotation that brings it north
    // Verified by returning 4 - steps as the rotation
    #[test]
    fn test_single_side_rotations() {
        let cases = [
            (Direction::North, Rotation::R0),
            (Direction::West, Rotation::R90),
            (Direction::South, Rotation::R180),
            (Direction::East, Rotation::R270),
        ];
        for (side, rotation) in cases {
            assert_eq!(
                resolve_edge(mask(&[side])),
                EdgeVariant {
                    shape: Some(EdgeShape::OneSide),
                    rotation,
                },
                "{side:?}"
            );
        }
    }

    // Tests corners flanked by a present side do not change the shape
    // Verified by resolving the raw mask without suppression
    #[test]
    fn test_suppressed_corner_is_ignored() {
        let variant = resolve_edge(mask(&[
            Direction::North,
            Direction::NorthEast,
            Direction::NorthWest,
        ]));
        assert_eq!(variant.shape, Some(EdgeShape::OneSide));
        assert_eq!(variant.rotation, Rotation::R0);

        let full = resolve_edge(NeighborMask::from_bits(u8::MAX));
        assert_eq!(full.shape, Some(EdgeShape::Filled));
    }

    // Tests a lone corner away from north-east resolves by rotation
    // Verified by probing with a one-bit rotation
    #[test]
    fn test_lone_corner_rotation() {
        let variant = resolve_edge(mask(&[Direction::SouthEast]));
        assert_eq!(variant.shape, Some(EdgeShape::OneCorner));
        assert_eq!(variant.rotation, Rotation::R270);
    }

    // Tests only the empty mask has no edge variant
    // Verified by removing FourCorners from the catalog
    #[test]
    fn test_every_nonempty_mask_resolves() {
        assert_eq!(resolve_edge(NeighborMask::default()), EdgeVariant::default());

        for bits in 1..=u8::MAX {
            let variant = resolve_edge(NeighborMask::from_bits(bits));
            assert!(variant.shape.is_some(), "mask {bits:08b} has no shape");
        }
    }

    // Tests the reported rotation turns the reduced mask onto its catalog entry
    // Verified by reporting the rotation in the wrong direction
    #[test]
    fn test_rotation_maps_onto_catalog() {
        for bits in 1..=u8::MAX {
            let raw = NeighborMask::from_bits(bits);
            let variant = resolve_edge(raw);
            let canonical = raw.suppress_corners().rotated(variant.rotation.steps());
            assert_eq!(lookup(canonical), variant.shape, "mask {bits:08b}");
        }
    }

    // Tests rotation conversions and formatting
    // Verified by mapping 5 steps to R270
    #[test]
    fn test_rotation_steps() {
        assert_eq!(Rotation::from_steps(5), Rotation::R90);
        assert_eq!(Rotation::R180.degrees(), 180);
        assert_eq!(Rotation::R270.to_string(), "270°");
        assert_eq!(Rotation::default(), Rotation::R0);
    }
}
