//! Dancing-links matrix: a four-way linked node torus over a node arena
//!
//! Every node takes part in two cyclic doubly linked lists, a vertical one
//! through its column header and a horizontal one through its row. Headers
//! occupy the low arena indices with a root sentinel at index 0 closing the
//! header ring; links are arena indices, so cover and uncover only re-wire
//! indices and never allocate or free a node.

/// Arena index of the root sentinel
const ROOT: usize = 0;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Node {
    left: usize,
    right: usize,
    up: usize,
    down: usize,
    header: usize,
    /// Row identifier shared by every node of one matrix row; `None` on
    /// headers and the root.
    row: Option<usize>,
}

/// Sparse exact-cover matrix with O(1) cover and uncover
///
/// Structural equality compares every link and count, which is what the
/// cover/uncover restoration invariant is checked against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DlxMatrix {
    nodes: Vec<Node>,
    counts: Vec<usize>,
    optional: Vec<bool>,
    columns: usize,
}

impl DlxMatrix {
    /// Create a matrix with the given number of empty columns
    ///
    /// Headers are chained horizontally through the root; each vertical ring
    /// initially contains just its header.
    pub fn new(columns: usize) -> Self {
        let mut nodes = Vec::with_capacity(columns + 1);
        nodes.push(Node {
            left: columns,
            right: if columns == 0 { ROOT } else { 1 },
            up: ROOT,
            down: ROOT,
            header: ROOT,
            row: None,
        });
        for header in 1..=columns {
            nodes.push(Node {
                left: header - 1,
                right: if header == columns { ROOT } else { header + 1 },
                up: header,
                down: header,
                header,
                row: None,
            });
        }

        Self {
            nodes,
            counts: vec![0; columns + 1],
            optional: vec![false; columns + 1],
            columns,
        }
    }

    /// Number of columns
    pub const fn column_count(&self) -> usize {
        self.columns
    }

    /// Arena index of the header for a zero-based column index
    pub fn header_of_column(&self, column: usize) -> usize {
        debug_assert!(column < self.columns, "column {column} out of range");
        column + 1
    }

    /// Append one row covering the given columns, tagged with a row id
    ///
    /// Each node is inserted at the bottom of its column's vertical ring and
    /// the nodes are linked horizontally in the order given. Columns within
    /// one row must be distinct.
    pub fn add_row(&mut self, columns: &[usize], row: usize) {
        debug_assert!(!columns.is_empty(), "a row must cover at least one column");
        debug_assert!(
            columns
                .iter()
                .enumerate()
                .all(|(i, column)| !columns[..i].contains(column)),
            "duplicate column in row {row}"
        );

        let mut first = ROOT;
        let mut previous = None;
        for &column in columns {
            let header = self.header_of_column(column);
            let bottom = self.nodes[header].up;
            let node = self.nodes.len();
            self.nodes.push(Node {
                left: node,
                right: node,
                up: bottom,
                down: header,
                header,
                row: Some(row),
            });
            self.nodes[bottom].down = node;
            self.nodes[header].up = node;
            self.counts[header] += 1;

            if let Some(previous) = previous {
                self.nodes[node].left = previous;
                self.nodes[node].right = first;
                self.nodes[previous].right = node;
                self.nodes[first].left = node;
            } else {
                first = node;
            }
            previous = Some(node);
        }
    }

    /// Remove a column and every row intersecting it from the live matrix
    pub fn cover(&mut self, header: usize) {
        let left = self.nodes[header].left;
        let right = self.nodes[header].right;
        self.nodes[left].right = right;
        self.nodes[right].left = left;

        let mut row_node = self.nodes[header].down;
        while row_node != header {
            let mut node = self.nodes[row_node].right;
            while node != row_node {
                let up = self.nodes[node].up;
                let down = self.nodes[node].down;
                self.nodes[up].down = down;
                self.nodes[down].up = up;
                let column = self.nodes[node].header;
                self.counts[column] -= 1;
                node = self.nodes[node].right;
            }
            row_node = self.nodes[row_node].down;
        }
    }

    /// Exact inverse of [`Self::cover`]
    ///
    /// Walks upward and leftward, re-linking vertically before restoring the
    /// header into the horizontal ring. After an uncover the matrix is
    /// structurally identical to its state before the matching cover.
    pub fn uncover(&mut self, header: usize) {
        let mut row_node = self.nodes[header].up;
        while row_node != header {
            let mut node = self.nodes[row_node].left;
            while node != row_node {
                let up = self.nodes[node].up;
                let down = self.nodes[node].down;
                self.nodes[up].down = node;
                self.nodes[down].up = node;
                let column = self.nodes[node].header;
                self.counts[column] += 1;
                node = self.nodes[node].left;
            }
            row_node = self.nodes[row_node].up;
        }

        let left = self.nodes[header].left;
        let right = self.nodes[header].right;
        self.nodes[left].right = header;
        self.nodes[right].left = header;
    }

    /// Mandatory live column with the fewest nodes, earliest-first on ties
    ///
    /// Returns `None` when only optional columns remain live, in which case
    /// the matrix is effectively solved.
    pub fn choose_column(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        let mut header = self.nodes[ROOT].right;
        while header != ROOT {
            if !self.optional[header]
                && best.is_none_or(|best| self.counts[header] < self.counts[best])
            {
                best = Some(header);
            }
            header = self.nodes[header].right;
        }
        best
    }

    /// Whether no live columns remain
    pub fn is_solved(&self) -> bool {
        self.nodes[ROOT].right == ROOT
    }

    /// Live node count of a column, by header index
    pub fn count(&self, header: usize) -> usize {
        self.counts[header]
    }

    /// Whether a column is optional; always false for the columns built here
    pub fn is_optional(&self, header: usize) -> bool {
        self.optional[header]
    }

    /// Downward neighbor in the vertical ring
    pub fn down(&self, node: usize) -> usize {
        self.nodes[node].down
    }

    /// Upward neighbor in the vertical ring
    pub fn up(&self, node: usize) -> usize {
        self.nodes[node].up
    }

    /// Rightward neighbor in the horizontal ring
    pub fn right(&self, node: usize) -> usize {
        self.nodes[node].right
    }

    /// Leftward neighbor in the horizontal ring
    pub fn left(&self, node: usize) -> usize {
        self.nodes[node].left
    }

    /// Header of the column a node belongs to
    pub fn header_of(&self, node: usize) -> usize {
        self.nodes[node].header
    }

    /// Row identifier of a row node, `None` for headers and the root
    pub fn row_of(&self, node: usize) -> Option<usize> {
        self.nodes[node].row
    }
}
