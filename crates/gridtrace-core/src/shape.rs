//! Grid geometry: [`GridShape`] and flat node indexing.

use std::fmt;

/// A grid cell identifier: the flat row-major index of the cell.
pub type NodeId = usize;

/// Dimensions of a rectangular grid, with conversions between
/// [`NodeId`]s and (row, column) coordinates.
///
/// `id = row * cols + col`, so `row = id / cols` and `col = id % cols`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridShape {
    pub rows: usize,
    pub cols: usize,
}

impl GridShape {
    /// Create a new shape.
    #[inline]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells.
    #[inline]
    pub const fn len(self) -> usize {
        self.rows * self.cols
    }

    /// Whether the grid has no cells.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Flat index of the cell at (row, col).
    #[inline]
    pub const fn index(self, row: usize, col: usize) -> NodeId {
        row * self.cols + col
    }

    /// Row of a node.
    #[inline]
    pub const fn row(self, id: NodeId) -> usize {
        id / self.cols
    }

    /// Column of a node.
    #[inline]
    pub const fn col(self, id: NodeId) -> usize {
        id % self.cols
    }

    /// Whether `id` names a cell of this grid.
    #[inline]
    pub const fn contains(self, id: NodeId) -> bool {
        id < self.len()
    }

    /// In-bounds cardinal neighbors of `id`, in up/right/down/left order.
    ///
    /// No diagonals, no wraparound.
    pub fn neighbors_4(self, id: NodeId) -> impl Iterator<Item = NodeId> {
        let r = self.row(id) as isize;
        let c = self.col(id) as isize;
        let (rows, cols) = (self.rows as isize, self.cols as isize);
        const DIRS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];
        DIRS.into_iter().filter_map(move |(dr, dc)| {
            let (nr, nc) = (r + dr, c + dc);
            (nr >= 0 && nr < rows && nc >= 0 && nc < cols)
                .then_some((nr as usize) * self.cols + nc as usize)
        })
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
