//! Tests for solver constants

#[cfg(test)]
mod tests {
    use crate::io::configuration::{BOARD_WIDTH, PIECE_LETTERS};
    use crate::spatial::shape::PENTOMINO_CELLS;

    #[test]
    fn test_piece_letters_are_sorted_and_unique() {
        let mut sorted = PIECE_LETTERS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();

        assert_eq!(sorted, PIECE_LETTERS.to_vec());
        assert_eq!(PIECE_LETTERS.len(), 12);
    }

    #[test]
    fn test_board_width_matches_piece_size() {
        // Each selected piece contributes one board row of its five cells.
        assert_eq!(BOARD_WIDTH, PENTOMINO_CELLS);
    }
}
