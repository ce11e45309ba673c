//! The weighted grid graph consumed by every search engine.

use crate::shape::{GridShape, NodeId};

/// Node weight marking an impassable cell.
pub const WALL: i32 = i32::MAX;

/// A directed neighbor descriptor.
///
/// Adjacency is symmetric in existence (if A lists B, B lists A), but the
/// two directions may carry different weights: the elevation model charges
/// `max(w[to] - w[from], 0)`, so climbing costs and descending is free.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub to: NodeId,
    pub weight: i32,
}

/// A rectangular grid graph: per-node adjacency lists plus a node-weight
/// vector where [`WALL`] marks impassable cells.
///
/// Read-only input to every engine; only generators mutate weights, and
/// only during construction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridGraph {
    shape: GridShape,
    adjacency: Vec<Vec<Edge>>,
    node_weights: Vec<i32>,
}

impl GridGraph {
    /// Assemble a graph from its parts.
    ///
    /// # Panics
    ///
    /// Panics if the adjacency or weight vectors do not match the shape,
    /// or if an edge points outside the grid.
    pub fn new(shape: GridShape, adjacency: Vec<Vec<Edge>>, node_weights: Vec<i32>) -> Self {
        assert_eq!(adjacency.len(), shape.len(), "adjacency length mismatch");
        assert_eq!(node_weights.len(), shape.len(), "weight length mismatch");
        debug_assert!(
            adjacency
                .iter()
                .all(|edges| edges.iter().all(|e| shape.contains(e.to))),
            "dangling edge reference"
        );
        Self {
            shape,
            adjacency,
            node_weights,
        }
    }

    /// The grid dimensions.
    #[inline]
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.shape.len()
    }

    /// Whether the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shape.is_empty()
    }

    /// Ordered neighbor descriptors of `id`.
    #[inline]
    pub fn neighbors(&self, id: NodeId) -> &[Edge] {
        &self.adjacency[id]
    }

    /// Weight of occupying `id`.
    #[inline]
    pub fn node_weight(&self, id: NodeId) -> i32 {
        self.node_weights[id]
    }

    /// All node weights, indexed by [`NodeId`].
    #[inline]
    pub fn node_weights(&self) -> &[i32] {
        &self.node_weights
    }

    /// Whether `id` is impassable.
    #[inline]
    pub fn is_wall(&self, id: NodeId) -> bool {
        self.node_weights[id] == WALL
    }

    /// Iterate over every directed edge as `(from, edge)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, Edge)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, edges)| edges.iter().map(move |&e| (from, e)))
    }

    /// Weight of the directed edge `from -> to`, if the edge exists.
    pub fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<i32> {
        self.adjacency[from]
            .iter()
            .find(|e| e.to == to)
            .map(|e| e.weight)
    }

    /// Total weight of a path: the sum of directed edge weights along
    /// consecutive pairs. Zero for paths with fewer than two nodes.
    ///
    /// Non-adjacent consecutive pairs contribute nothing; engines only
    /// produce paths that follow edges.
    pub fn path_weight(&self, path: &[NodeId]) -> i64 {
        path.windows(2)
            .filter_map(|pair| self.edge_weight(pair[0], pair[1]))
            .map(i64::from)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> GridGraph {
        // 0 - 1
        // |   |
        // 2 - 3   with directed weights from the signed elevation model.
        let shape = GridShape::new(2, 2);
        let weights = vec![0, 3, 1, 0];
        let adjacency = (0..shape.len())
            .map(|id| {
                shape
                    .neighbors_4(id)
                    .map(|to| Edge {
                        to,
                        weight: weights[to] - weights[id],
                    })
                    .collect()
            })
            .collect();
        GridGraph::new(shape, adjacency, weights)
    }

    #[test]
    fn adjacency_symmetric_in_existence() {
        let g = two_by_two();
        for (from, e) in g.edges() {
            assert!(
                g.neighbors(e.to).iter().any(|back| back.to == from),
                "edge {from}->{} has no reverse", e.to
            );
        }
    }

    #[test]
    fn weights_may_be_asymmetric() {
        let g = two_by_two();
        assert_eq!(g.edge_weight(0, 1), Some(3));
        assert_eq!(g.edge_weight(1, 0), Some(-3));
    }

    #[test]
    fn path_weight_sums_directed_edges() {
        let g = two_by_two();
        assert_eq!(g.path_weight(&[0, 1, 3]), 0); // +3 then -3
        assert_eq!(g.path_weight(&[0, 2, 3]), 0); // +1 then -1
        assert_eq!(g.path_weight(&[2, 0, 1]), 2); // -1 then +3
    }

    #[test]
    fn path_weight_trivial_paths() {
        let g = two_by_two();
        assert_eq!(g.path_weight(&[]), 0);
        assert_eq!(g.path_weight(&[2]), 0);
    }

    #[test]
    fn wall_sentinel() {
        let shape = GridShape::new(1, 2);
        let g = GridGraph::new(
            shape,
            vec![vec![Edge { to: 1, weight: 1 }], vec![Edge { to: 0, weight: 1 }]],
            vec![0, WALL],
        );
        assert!(!g.is_wall(0));
        assert!(g.is_wall(1));
    }

    #[test]
    #[should_panic(expected = "adjacency length mismatch")]
    fn mismatched_adjacency_panics() {
        GridGraph::new(GridShape::new(2, 2), vec![Vec::new(); 3], vec![0; 4]);
    }
}
