//! Exact-cover matrix construction from a piece catalog and a board
//!
//! Every legal placement of every orientation becomes one matrix row. The
//! row covers the cell columns of its five occupied cells plus the identity
//! column of its piece, and its payload records which orientation was placed
//! where. Enumeration order is orientations in catalog order, anchors in
//! row-major order; that order fixes matrix insertion order and with it the
//! search's tie-breaking.

use crate::algorithm::matrix::DlxMatrix;
use crate::io::error::Result;
use crate::spatial::board::Board;
use crate::spatial::catalog::PieceCatalog;
use crate::spatial::shape::PENTOMINO_CELLS;

/// Payload of one matrix row: an orientation anchored at a board position
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Orientation handle into the catalog
    pub orientation: usize,
    /// Anchor row of the orientation's top-left corner
    pub row: usize,
    /// Anchor column of the orientation's top-left corner
    pub col: usize,
}

/// Build the dancing-links matrix and its row payload table
///
/// The matrix gets `total_cells + piece_count` columns: cell-cover columns
/// first, then one identity column per selected piece. Row ids index into
/// the returned placement table, which is shared by every node of a row.
///
/// # Errors
///
/// Returns an error if a placement that passed the legality test refers to
/// an inactive cell, which would mean the board state is inconsistent.
pub fn build_matrix(catalog: &PieceCatalog, board: &Board) -> Result<(DlxMatrix, Vec<Placement>)> {
    let cell_columns = board.total_cells();
    let mut matrix = DlxMatrix::new(cell_columns + catalog.piece_count());
    let mut placements = Vec::new();

    for (handle, orientation) in catalog.orientations().iter().enumerate() {
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                if !board.can_place(&orientation.shape, row, col) {
                    continue;
                }

                let mut columns = Vec::with_capacity(PENTOMINO_CELLS + 1);
                for (i, j) in orientation.shape.cells() {
                    columns.push(board.cell_index(row + i, col + j)?);
                }
                columns.push(cell_columns + orientation.piece);

                matrix.add_row(&columns, placements.len());
                placements.push(Placement {
                    orientation: handle,
                    row,
                    col,
                });
            }
        }
    }

    Ok((matrix, placements))
}
