//! Grid-graph builders for the supported edge-weight models.
//!
//! Every builder connects each cell to its in-bounds cardinal neighbors
//! (up/right/down/left, no diagonals, no wraparound) and differs only in
//! how a directed edge weight is derived from the node weights.

use gridtrace_core::{Edge, GridGraph, GridShape, NodeId, WALL};
use rand::Rng;

use crate::maze::MazeGen;

/// Unweighted grid: every edge costs 1, every node weight 0.
pub fn uniform(shape: GridShape) -> GridGraph {
    build(shape, vec![0; shape.len()], |_, _, _| 1)
}

/// Congestion grid: entering a cell costs that cell's congestion value.
/// Both directions of a cell pair share the target-entry rule, so weights
/// are asymmetric whenever the two congestion values differ.
pub fn congestion(shape: GridShape, weights: Vec<i32>) -> GridGraph {
    build(shape, weights, |w, _, to| w[to])
}

/// Elevated terrain: climbing costs the height difference, descending is
/// free. `max(w[to] - w[from], 0)` keeps every edge non-negative by
/// construction, so Dijkstra and A* remain correct on arbitrary heights.
pub fn elevation(shape: GridShape, weights: Vec<i32>) -> GridGraph {
    build(shape, weights, |w, from, to| {
        w[to].saturating_sub(w[from]).max(0)
    })
}

/// Elevated terrain without the clamp: descending earns the height
/// difference back, so edges may be negative. Bellman-Ford territory.
pub fn signed_elevation(shape: GridShape, weights: Vec<i32>) -> GridGraph {
    build(shape, weights, |w, from, to| w[to].saturating_sub(w[from]))
}

/// Recursive-division maze with unit edges, guaranteed to keep `start`
/// and `end` open.
pub fn maze(shape: GridShape, rng: impl Rng, start: NodeId, end: NodeId) -> GridGraph {
    let mut carver = MazeGen::new(shape, rng);
    carver.recursive_division(start, end);
    build(shape, carver.into_weights(), |_, _, _| 1)
}

fn build(
    shape: GridShape,
    weights: Vec<i32>,
    edge_weight: impl Fn(&[i32], NodeId, NodeId) -> i32,
) -> GridGraph {
    let adjacency = (0..shape.len())
        .map(|id| {
            shape
                .neighbors_4(id)
                .map(|to| Edge {
                    to,
                    weight: edge_weight(&weights, id, to),
                })
                .collect()
        })
        .collect();
    GridGraph::new(shape, adjacency, weights)
}
