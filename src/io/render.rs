//! Solution painting and report output
//!
//! Maps the chosen matrix rows back onto a labeled char grid and writes the
//! final report. Rendering is the last consumer of solver state, so any
//! out-of-bounds paint here is treated as matrix corruption rather than a
//! user error.

use std::io::Write;

use ndarray::Array2;

use crate::algorithm::builder::Placement;
use crate::io::configuration::{BOARD_WIDTH, NO_SOLUTION_MESSAGE, SOLUTION_FOUND_MESSAGE};
use crate::io::error::{Result, SolverError, computation_error};
use crate::spatial::board::Board;
use crate::spatial::catalog::PieceCatalog;

/// Paint the chosen placements into a char grid of piece letters
///
/// Unclaimed cells stay as spaces; a successful exact cover claims every
/// cell exactly once.
///
/// # Errors
///
/// Returns an error when a placement refers to an unknown orientation or
/// paints outside the board, both of which indicate internal corruption.
pub fn paint_solution(
    board: &Board,
    catalog: &PieceCatalog,
    placements: &[Placement],
) -> Result<Array2<char>> {
    let mut grid = Array2::from_elem((board.rows(), board.cols()), ' ');

    for placement in placements {
        let orientation = catalog
            .orientations()
            .get(placement.orientation)
            .ok_or_else(|| computation_error("paint_solution", &"unknown orientation handle"))?;
        let letter = catalog
            .name(orientation.piece)
            .ok_or_else(|| computation_error("paint_solution", &"unknown piece identity"))?;

        for (i, j) in orientation.shape.cells() {
            let row = placement.row + i;
            let col = placement.col + j;
            let cell = grid
                .get_mut((row, col))
                .ok_or(SolverError::PlacementOutOfBounds {
                    row,
                    col,
                    dimensions: (board.rows(), board.cols()),
                })?;
            *cell = letter;
        }
    }

    Ok(grid)
}

/// Write the solver report for one selection
///
/// On success: the solution banner, the grid with every letter followed by
/// one space, then the board summary line. On failure the banner is replaced
/// by the no-solution message and the grid is omitted.
///
/// # Errors
///
/// Returns an error when the writer fails.
pub fn write_report<W: Write>(
    out: &mut W,
    grid: Option<&Array2<char>>,
    piece_count: usize,
) -> std::io::Result<()> {
    match grid {
        Some(grid) => {
            writeln!(out, "{SOLUTION_FOUND_MESSAGE}")?;
            for row in grid.outer_iter() {
                for &letter in row.iter() {
                    write!(out, "{letter} ")?;
                }
                writeln!(out)?;
            }
        }
        None => writeln!(out, "{NO_SOLUTION_MESSAGE}")?,
    }
    writeln!(out, "boardField is {BOARD_WIDTH}, {piece_count}")
}
