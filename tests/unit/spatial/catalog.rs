//! Tests for orientation closure and piece identity assignment

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::io::resources::ShapeLibrary;
    use crate::spatial::catalog::{PieceCatalog, unique_orientations};
    use crate::spatial::shape::Shape;

    fn library() -> ShapeLibrary {
        let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        ShapeLibrary::load(&data_dir).unwrap()
    }

    // Symmetry classes of the twelve pentominoes: X has full symmetry, I a
    // two-fold one, T/U/V/W/Z a single axis or point symmetry, the rest none.
    #[test]
    fn test_orientation_counts_match_symmetry_classes() {
        let expected = [
            ('F', 8),
            ('I', 2),
            ('L', 8),
            ('N', 8),
            ('P', 8),
            ('T', 4),
            ('U', 4),
            ('V', 4),
            ('W', 4),
            ('X', 1),
            ('Y', 8),
            ('Z', 4),
        ];

        let library = library();
        for (letter, count) in expected {
            let canonical = library.shape(letter).unwrap();
            assert_eq!(
                unique_orientations(canonical).len(),
                count,
                "wrong orientation count for '{letter}'"
            );
        }
    }

    #[test]
    fn test_orientation_set_is_closed_under_rotate_and_reflect() {
        let library = library();
        for &letter in &['F', 'I', 'T', 'W', 'X'] {
            let orientations = unique_orientations(library.shape(letter).unwrap());
            for shape in &orientations {
                assert!(orientations.contains(&shape.rotated()));
                assert!(orientations.contains(&shape.reflected()));
            }
        }
    }

    #[test]
    fn test_every_orientation_stays_normalized() {
        let library = library();
        let orientations = unique_orientations(library.shape('F').unwrap());
        for shape in &orientations {
            let renormalized = Shape::from_rows(shape.row_masks().to_vec()).unwrap();
            assert_eq!(&renormalized, shape);
        }
    }

    #[test]
    fn test_identity_indices_follow_alphabetical_order() {
        let catalog = PieceCatalog::from_library(&library(), &['Y', 'L', 'L']).unwrap();

        assert_eq!(catalog.names(), &['L', 'Y']);
        assert_eq!(catalog.piece_count(), 2);
        assert_eq!(catalog.name(0), Some('L'));
        assert_eq!(catalog.name(1), Some('Y'));
        assert_eq!(catalog.orientation_count(), 16);
    }

    #[test]
    fn test_empty_selection_stands_for_all_twelve_letters() {
        let catalog = PieceCatalog::from_library(&library(), &[]).unwrap();

        assert_eq!(catalog.piece_count(), 12);
        // 1 + 2 + 4*5 + 8*5 orientations across the symmetry classes.
        assert_eq!(catalog.orientation_count(), 63);
    }

    #[test]
    fn test_orientations_group_by_piece_in_catalog_order() {
        let catalog = PieceCatalog::from_library(&library(), &['T', 'I']).unwrap();

        let pieces: Vec<usize> = catalog
            .orientations()
            .iter()
            .map(|orientation| orientation.piece)
            .collect();
        // I comes first alphabetically: 2 orientations, then T's 4.
        assert_eq!(pieces, vec![0, 0, 1, 1, 1, 1]);
    }
}
