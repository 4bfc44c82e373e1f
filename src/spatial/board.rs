//! Rectangular board with an active-cell map and placement tests
//!
//! The board is a cell map over an HxW rectangle; every cell of the packing
//! boards built here is active, but the map representation keeps placement
//! legality and cell indexing uniform. Cell indices are the row-major
//! ordinals of a cell among the active cells.

use bitvec::prelude::*;

use crate::io::error::{Result, SolverError};
use crate::spatial::shape::Shape;

/// Board cell map with row-major active-cell indexing
#[derive(Clone, Debug)]
pub struct Board {
    cells: BitVec,
    rows: usize,
    cols: usize,
}

impl Board {
    /// Create a fully active rectangular board
    pub fn rectangle(rows: usize, cols: usize) -> Self {
        Self {
            cells: bitvec![1; rows * cols],
            rows,
            cols,
        }
    }

    /// Number of board rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of board columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the cell at `(row, col)` exists and is active
    pub fn is_active(&self, row: usize, col: usize) -> bool {
        row < self.rows
            && col < self.cols
            && self.cells.get(row * self.cols + col).as_deref() == Some(&true)
    }

    /// Count of active cells on the board
    pub fn total_cells(&self) -> usize {
        self.cells.count_ones()
    }

    /// Whether the shape fits with its top-left anchor at `(row, col)`
    ///
    /// Every occupied cell of the shape must land on an active board cell.
    pub fn can_place(&self, shape: &Shape, row: usize, col: usize) -> bool {
        shape.cells().all(|(i, j)| self.is_active(row + i, col + j))
    }

    /// Row-major ordinal of `(row, col)` among the active cells
    ///
    /// # Errors
    ///
    /// Returns an error when the cell is outside the board or inactive;
    /// callers asking for such a cell have broken a placement invariant.
    pub fn cell_index(&self, row: usize, col: usize) -> Result<usize> {
        if !self.is_active(row, col) {
            return Err(SolverError::InvalidCellPosition {
                row,
                col,
                dimensions: (self.rows, self.cols),
            });
        }
        Ok(self.cells[..row * self.cols + col].count_ones())
    }
}
