//! Grid distance metrics used as A* heuristics.

use gridtrace_core::{GridShape, NodeId};

/// Manhattan (L1) distance between two nodes of a grid.
#[inline]
pub fn manhattan(shape: GridShape, a: NodeId, b: NodeId) -> i32 {
    let dr = shape.row(a).abs_diff(shape.row(b));
    let dc = shape.col(a).abs_diff(shape.col(b));
    (dr + dc) as i32
}

/// Euclidean (L2) distance between two nodes of a grid, rounded down.
///
/// Flooring keeps the estimate admissible on unit-step grids.
#[inline]
pub fn euclidean(shape: GridShape, a: NodeId, b: NodeId) -> i32 {
    let dr = shape.row(a).abs_diff(shape.row(b)) as f64;
    let dc = shape.col(a).abs_diff(shape.col(b)) as f64;
    (dr * dr + dc * dc).sqrt() as i32
}
