//! Validated inputs for one search run.

use gridtrace_core::{GridGraph, GridShape, NodeId};
use thiserror::Error;

/// Path-cost sentinel meaning "not reached yet".
pub const UNREACHABLE: i32 = i32::MAX;

/// Rejected search inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContextError {
    #[error("grid has no nodes")]
    EmptyGrid,
    #[error("node {0} is out of bounds for a {1} grid")]
    OutOfBounds(NodeId, GridShape),
    #[error("start node {0} is a wall")]
    StartIsWall(NodeId),
    #[error("end node {0} is a wall")]
    EndIsWall(NodeId),
}

/// The read-only inputs shared by every engine: the graph plus the
/// endpoints of the query.
///
/// Validation happens once here; engines index the graph freely
/// afterwards. Each engine call still allocates its own visited set,
/// predecessor map and step counter, so contexts can be reused across
/// runs (or threads) safely.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SearchContext<'a> {
    graph: &'a GridGraph,
    start: NodeId,
    end: NodeId,
}

impl<'a> SearchContext<'a> {
    /// Validate and build a context.
    pub fn new(graph: &'a GridGraph, start: NodeId, end: NodeId) -> Result<Self, ContextError> {
        if graph.is_empty() {
            return Err(ContextError::EmptyGrid);
        }
        let shape = graph.shape();
        for node in [start, end] {
            if !shape.contains(node) {
                return Err(ContextError::OutOfBounds(node, shape));
            }
        }
        if graph.is_wall(start) {
            return Err(ContextError::StartIsWall(start));
        }
        if graph.is_wall(end) {
            return Err(ContextError::EndIsWall(end));
        }
        Ok(Self { graph, start, end })
    }

    /// The graph under search.
    #[inline]
    pub fn graph(&self) -> &'a GridGraph {
        self.graph
    }

    /// The start node.
    #[inline]
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// The end node.
    #[inline]
    pub fn end(&self) -> NodeId {
        self.end
    }
}

/// Synthetic step costs shared by every engine.
///
/// The exact values are a convention, not a contract; what matters is
/// that all engines draw from the same table so cross-engine step
/// comparisons rank real work. Heap operations report their own sift
/// costs on top of these.
pub(crate) mod cost {
    /// Taking a node off the frontier.
    pub(crate) const DEQUEUE: u64 = 2;
    /// Examining one neighbor.
    pub(crate) const EXPAND: u64 = 1;
    /// Relaxing an edge (compare + update).
    pub(crate) const RELAX: u64 = 2;
}

/// Walk predecessor links backwards from `end` until a root (the start
/// node) is reached, returning the path in start-to-end order.
pub(crate) fn walk_predecessors(predecessor: &[Option<NodeId>], end: NodeId) -> Vec<NodeId> {
    let mut path = vec![end];
    let mut current = end;
    while let Some(prev) = predecessor[current] {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
