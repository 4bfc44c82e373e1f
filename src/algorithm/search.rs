//! Algorithm X: recursive backtracking search over the dancing-links matrix
//!
//! The search branches on the live column with the fewest candidate rows,
//! covers it, and tries each of its rows top to bottom. A column with no
//! candidates fails the branch immediately since the row loop never runs.
//! Backtracking uncovers in exact reverse order, restoring the matrix to
//! its pre-branch state. The search stops at the first full covering; with
//! fixed insertion order and earliest-first tie-breaking the result is a
//! deterministic function of the input selection.

use crate::algorithm::matrix::DlxMatrix;

/// Find the first exact cover, returning the chosen row ids in choice order
///
/// Returns `None` when the search tree is exhausted without a covering. On
/// success the matrix is left in its covered end state; callers that need
/// the matrix again should rebuild it.
pub fn first_solution(matrix: &mut DlxMatrix) -> Option<Vec<usize>> {
    let mut stack = Vec::new();
    if explore(matrix, &mut stack) {
        let rows = stack
            .iter()
            .filter_map(|&node| matrix.row_of(node))
            .collect();
        Some(rows)
    } else {
        None
    }
}

fn explore(matrix: &mut DlxMatrix, stack: &mut Vec<usize>) -> bool {
    if matrix.is_solved() {
        return true;
    }
    let Some(column) = matrix.choose_column() else {
        // Only optional columns remain live.
        return true;
    };

    matrix.cover(column);

    let mut row_node = matrix.down(column);
    while row_node != column {
        stack.push(row_node);
        let mut node = matrix.right(row_node);
        while node != row_node {
            let header = matrix.header_of(node);
            matrix.cover(header);
            node = matrix.right(node);
        }

        if explore(matrix, stack) {
            return true;
        }

        let mut node = matrix.left(row_node);
        while node != row_node {
            let header = matrix.header_of(node);
            matrix.uncover(header);
            node = matrix.left(node);
        }
        stack.pop();

        row_node = matrix.down(row_node);
    }

    matrix.uncover(column);
    false
}
