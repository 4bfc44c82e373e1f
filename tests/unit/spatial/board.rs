//! Tests for board cell indexing and placement legality

#[cfg(test)]
mod tests {
    use crate::SolverError;
    use crate::spatial::board::Board;
    use crate::spatial::shape::Shape;

    #[test]
    fn test_rectangle_dimensions_and_cell_total() {
        let board = Board::rectangle(2, 5);

        assert_eq!(board.rows(), 2);
        assert_eq!(board.cols(), 5);
        assert_eq!(board.total_cells(), 10);
    }

    #[test]
    fn test_active_cells_cover_exactly_the_rectangle() {
        let board = Board::rectangle(2, 5);

        assert!(board.is_active(0, 0));
        assert!(board.is_active(1, 4));
        assert!(!board.is_active(2, 0));
        assert!(!board.is_active(0, 5));
    }

    #[test]
    fn test_cell_index_is_row_major() {
        let board = Board::rectangle(2, 5);

        assert_eq!(board.cell_index(0, 0).unwrap(), 0);
        assert_eq!(board.cell_index(0, 4).unwrap(), 4);
        assert_eq!(board.cell_index(1, 0).unwrap(), 5);
        assert_eq!(board.cell_index(1, 2).unwrap(), 7);
    }

    #[test]
    fn test_cell_index_outside_board_is_an_error() {
        let board = Board::rectangle(2, 5);

        let result = board.cell_index(2, 0);
        assert!(matches!(
            result,
            Err(SolverError::InvalidCellPosition {
                row: 2,
                col: 0,
                dimensions: (2, 5),
            })
        ));
    }

    #[test]
    fn test_can_place_respects_board_bounds() {
        let board = Board::rectangle(1, 5);
        let horizontal_bar = Shape::from_rows(vec![0b11111]).unwrap();
        let vertical_bar = Shape::from_rows(vec![1, 1, 1, 1, 1]).unwrap();

        assert!(board.can_place(&horizontal_bar, 0, 0));
        assert!(!board.can_place(&horizontal_bar, 0, 1));
        assert!(!board.can_place(&vertical_bar, 0, 0));
    }

    #[test]
    fn test_can_place_anywhere_inside_a_large_board() {
        let board = Board::rectangle(4, 5);
        let square_ish = Shape::from_rows(vec![0b11, 0b11, 0b01]).unwrap();

        assert!(board.can_place(&square_ish, 0, 0));
        assert!(board.can_place(&square_ish, 1, 3));
        assert!(!board.can_place(&square_ish, 2, 0));
        assert!(!board.can_place(&square_ish, 0, 4));
    }
}
