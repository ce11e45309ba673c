//! Recursive-division maze generation.
//!
//! Carves impassable wall lines into a node-weight vector: a region is
//! split by a full wall line with a single passage cell, then both halves
//! are split again with the orientation flipped. Wall lines sit on even
//! rows/columns and passages on odd ones, so a passage can never be
//! covered by a later division and every odd/odd cell stays open, which
//! keeps the open cells of the maze connected by construction.

use gridtrace_core::{GridShape, NodeId, WALL};
use rand::{Rng, RngExt};

/// Maze generator writing walls into a node-weight vector.
///
/// The caller supplies the random source, so seeded runs reproduce the
/// same maze.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    shape: GridShape,
    weights: Vec<i32>,
    keep_open: [NodeId; 2],
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator for the given grid, all cells open.
    pub fn new(shape: GridShape, rng: R) -> Self {
        Self {
            rng,
            shape,
            weights: vec![0; shape.len()],
            keep_open: [0, 0],
        }
    }

    /// Carve a maze by recursive division, leaving `start` and `end`
    /// open. Returns the number of wall cells laid.
    pub fn recursive_division(&mut self, start: NodeId, end: NodeId) -> usize {
        self.weights.fill(0);
        self.keep_open = [start, end];
        let horizontal = self.shape.rows >= self.shape.cols;
        self.divide(0, self.shape.rows, 0, self.shape.cols, horizontal);
        self.weights.iter().filter(|&&w| w == WALL).count()
    }

    /// The carved node weights.
    pub fn weights(&self) -> &[i32] {
        &self.weights
    }

    /// Consume the generator, returning the carved node weights.
    pub fn into_weights(self) -> Vec<i32> {
        self.weights
    }

    /// Split the half-open region `[top, bottom) x [left, right)` with a
    /// wall line, then recurse into both halves with the orientation
    /// flipped. Regions without a legal wall or passage slot are left
    /// as-is.
    fn divide(&mut self, top: usize, bottom: usize, left: usize, right: usize, horizontal: bool) {
        if bottom - top < 2 || right - left < 2 {
            return;
        }
        if horizontal {
            let Some(wall_row) = self.pick(top + 1, bottom - 2, 0) else {
                return;
            };
            let Some(passage_col) = self.pick(left, right - 1, 1) else {
                return;
            };
            log::debug!(
                "wall row {wall_row} across [{left}, {right}), passage at col {passage_col}"
            );
            for col in left..right {
                if col != passage_col {
                    self.lay_wall(self.shape.index(wall_row, col));
                }
            }
            self.divide(top, wall_row, left, right, false);
            self.divide(wall_row + 1, bottom, left, right, false);
        } else {
            let Some(wall_col) = self.pick(left + 1, right - 2, 0) else {
                return;
            };
            let Some(passage_row) = self.pick(top, bottom - 1, 1) else {
                return;
            };
            log::debug!(
                "wall col {wall_col} across [{top}, {bottom}), passage at row {passage_row}"
            );
            for row in top..bottom {
                if row != passage_row {
                    self.lay_wall(self.shape.index(row, wall_col));
                }
            }
            self.divide(top, bottom, left, wall_col, true);
            self.divide(top, bottom, wall_col + 1, right, true);
        }
    }

    fn lay_wall(&mut self, id: NodeId) {
        if !self.keep_open.contains(&id) {
            self.weights[id] = WALL;
        }
    }

    /// Uniformly pick a value in `[lo, hi]` with the given parity.
    fn pick(&mut self, lo: usize, hi: usize, parity: usize) -> Option<usize> {
        let first = if lo % 2 == parity { lo } else { lo + 1 };
        if first > hi {
            return None;
        }
        let count = (hi - first) / 2 + 1;
        Some(first + 2 * self.rng.random_range(0..count))
    }
}
