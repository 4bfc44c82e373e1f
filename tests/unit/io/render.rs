//! Tests for solution painting and report formatting

#[cfg(test)]
mod tests {
    use std::path::Path;

    use ndarray::Array2;

    use crate::SolverError;
    use crate::algorithm::builder::Placement;
    use crate::io::render::{paint_solution, write_report};
    use crate::io::resources::ShapeLibrary;
    use crate::spatial::board::Board;
    use crate::spatial::catalog::PieceCatalog;

    fn library() -> ShapeLibrary {
        let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        ShapeLibrary::load(&data_dir).unwrap()
    }

    #[test]
    fn test_paints_letters_onto_the_grid() {
        let catalog = PieceCatalog::from_library(&library(), &['I']).unwrap();
        let board = Board::rectangle(1, 5);
        let placement = Placement {
            orientation: 1,
            row: 0,
            col: 0,
        };

        let grid = paint_solution(&board, &catalog, &[placement]).unwrap();

        assert_eq!(grid.dim(), (1, 5));
        assert!(grid.iter().all(|&cell| cell == 'I'));
    }

    #[test]
    fn test_unplaced_cells_stay_blank() {
        let catalog = PieceCatalog::from_library(&library(), &['I']).unwrap();
        let board = Board::rectangle(2, 5);

        let grid = paint_solution(&board, &catalog, &[]).unwrap();

        assert!(grid.iter().all(|&cell| cell == ' '));
    }

    #[test]
    fn test_out_of_bounds_placement_is_fatal() {
        let catalog = PieceCatalog::from_library(&library(), &['I']).unwrap();
        let board = Board::rectangle(1, 5);
        // The vertical orientation cannot exist on a one-row board; painting
        // it means the matrix handed back a corrupt row.
        let placement = Placement {
            orientation: 0,
            row: 0,
            col: 0,
        };

        let result = paint_solution(&board, &catalog, &[placement]);
        assert!(matches!(
            result,
            Err(SolverError::PlacementOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_unknown_orientation_handle_is_fatal() {
        let catalog = PieceCatalog::from_library(&library(), &['I']).unwrap();
        let board = Board::rectangle(1, 5);
        let placement = Placement {
            orientation: 99,
            row: 0,
            col: 0,
        };

        let result = paint_solution(&board, &catalog, &[placement]);
        assert!(matches!(result, Err(SolverError::Computation { .. })));
    }

    #[test]
    fn test_success_report_lists_grid_rows_with_trailing_spaces() {
        let grid = Array2::from_shape_vec((1, 5), vec!['I'; 5]).unwrap();
        let mut out = Vec::new();

        write_report(&mut out, Some(&grid), 1).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Solution found!\nI I I I I \nboardField is 5, 1\n");
    }

    #[test]
    fn test_failure_report_omits_the_grid() {
        let mut out = Vec::new();

        write_report(&mut out, None, 3).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "No solution found.\nboardField is 5, 3\n");
    }
}
