//! Bit-grid piece model with rotation, reflection, and canonicalization
//!
//! A pentomino shape is a short ordered sequence of row masks; bit `j` of
//! row `i` set means cell `(i, j)` is occupied. Every shape is kept in a
//! normalized top-left form so that two orientations compare equal exactly
//! when their mask sequences compare equal.

use crate::io::error::{Result, SolverError};

/// Number of cells in a pentomino
pub const PENTOMINO_CELLS: usize = 5;

/// Maximum meaningful rows in a shape
pub const MAX_SHAPE_ROWS: usize = 5;

/// Maximum meaningful bits in a shape row mask
pub const MAX_SHAPE_BITS: usize = 5;

/// A normalized pentomino shape stored as bit-packed row masks
///
/// Invariants: between 1 and 5 rows, each mask within 5 bits, the top row
/// non-zero, the leftmost occupied column at bit 0, five occupied cells in
/// total, all cells edge-connected.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: Vec<u8>,
}

impl Shape {
    /// Build a shape from raw row masks, validating and normalizing them
    ///
    /// # Errors
    ///
    /// Returns an error if the masks describe anything other than a
    /// connected five-cell shape fitting a 5x5 window. The reported letter
    /// is a placeholder until the caller attaches one.
    pub fn from_rows(rows: Vec<u8>) -> Result<Self> {
        let occupied: usize = rows.iter().map(|mask| mask.count_ones() as usize).sum();
        if occupied != PENTOMINO_CELLS {
            return Err(shape_error(format!(
                "expected {PENTOMINO_CELLS} occupied cells, found {occupied}"
            )));
        }

        if let Some(mask) = rows.iter().find(|&&mask| usize::from(mask) >> MAX_SHAPE_BITS != 0) {
            return Err(shape_error(format!(
                "row mask {mask:#07b} is wider than {MAX_SHAPE_BITS} bits"
            )));
        }

        let shape = Self::normalized(rows);

        if shape.height() > MAX_SHAPE_ROWS {
            return Err(shape_error(format!(
                "shape spans {} rows, at most {MAX_SHAPE_ROWS} are allowed",
                shape.height()
            )));
        }

        if !shape.is_connected() {
            return Err(shape_error("shape cells are not edge-connected"));
        }

        Ok(shape)
    }

    /// Normalize raw masks into canonical top-left anchoring
    ///
    /// Empty edge rows are trimmed and every row is shifted right uniformly
    /// until some row has bit 0 set.
    fn normalized(mut rows: Vec<u8>) -> Self {
        while rows.first() == Some(&0) {
            rows.remove(0);
        }
        while rows.last() == Some(&0) {
            rows.pop();
        }

        let combined = rows.iter().fold(0u8, |acc, &mask| acc | mask);
        if combined != 0 {
            let shift = combined.trailing_zeros();
            for mask in &mut rows {
                *mask >>= shift;
            }
        }

        Self { rows }
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, i.e. the widest occupied extent across all rows
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(|&mask| (u8::BITS - mask.leading_zeros()) as usize)
            .max()
            .unwrap_or(0)
    }

    /// The bit-packed row masks in top-to-bottom order
    pub fn row_masks(&self) -> &[u8] {
        &self.rows
    }

    /// Occupied cells as `(row, col)` offsets in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, &mask)| {
            (0..u8::BITS as usize)
                .filter(move |&col| (mask >> col) & 1 == 1)
                .map(move |col| (row, col))
        })
    }

    /// The shape rotated 90 degrees clockwise, re-normalized
    ///
    /// An occupancy at `(r, c)` in an HxW shape maps to `(c, H-1-r)` in the
    /// WxH result.
    #[must_use]
    pub fn rotated(&self) -> Self {
        let height = self.height();
        let mut rows = vec![0u8; self.width()];
        for (r, c) in self.cells() {
            if let Some(mask) = rows.get_mut(c) {
                *mask |= 1 << (height - 1 - r);
            }
        }
        Self::normalized(rows)
    }

    /// The shape reflected horizontally, re-normalized
    ///
    /// An occupancy at `(r, c)` maps to `(r, w-1-c)` where `w` is the shape
    /// width.
    #[must_use]
    pub fn reflected(&self) -> Self {
        let width = self.width();
        let rows = self
            .rows
            .iter()
            .map(|&mask| {
                let mut flipped = 0u8;
                for col in 0..width {
                    if (mask >> col) & 1 == 1 {
                        flipped |= 1 << (width - 1 - col);
                    }
                }
                flipped
            })
            .collect();
        Self::normalized(rows)
    }

    // Flood fill over the occupied cells; a pentomino must form one
    // edge-connected component.
    fn is_connected(&self) -> bool {
        let cells: Vec<(usize, usize)> = self.cells().collect();
        let Some(&start) = cells.first() else {
            return false;
        };

        let mut visited = vec![start];
        let mut frontier = vec![start];
        while let Some((row, col)) = frontier.pop() {
            let neighbors = [
                (row.wrapping_sub(1), col),
                (row + 1, col),
                (row, col.wrapping_sub(1)),
                (row, col + 1),
            ];
            for neighbor in neighbors {
                if cells.contains(&neighbor) && !visited.contains(&neighbor) {
                    visited.push(neighbor);
                    frontier.push(neighbor);
                }
            }
        }

        visited.len() == cells.len()
    }
}

fn shape_error(reason: impl ToString) -> SolverError {
    SolverError::InvalidShapeData {
        letter: '?',
        reason: reason.to_string(),
    }
}
