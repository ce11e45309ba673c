//! A* search: Dijkstra plus an admissible grid heuristic.

use gridtrace_core::{AlgorithmKind, Edge, GridShape, NodeId, NodeState, RunResults};

use crate::context::{SearchContext, UNREACHABLE, cost, walk_predecessors};
use crate::distance;
use crate::heap::{HeapNode, MinHeap};

/// Heuristic used to estimate remaining distance to the end node.
///
/// Both are admissible on unit-step grids with non-negative edge
/// weights: neither ever overestimates the true remaining cost.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    Manhattan,
    Euclidean,
}

impl Heuristic {
    /// Estimated distance from `from` to `to`.
    #[inline]
    pub fn estimate(self, shape: GridShape, from: NodeId, to: NodeId) -> i32 {
        match self {
            Self::Manhattan => distance::manhattan(shape, from, to),
            Self::Euclidean => distance::euclidean(shape, from, to),
        }
    }
}

/// Run A* from the context's start to its end.
///
/// Identical to [`dijkstra`](crate::dijkstra) except that the heuristic
/// is added to the heap priority. The stored path costs stay pure
/// accumulated weight, so the heuristic only steers expansion order and
/// admissibility keeps the result optimal.
pub fn astar(ctx: &SearchContext, heuristic: Heuristic) -> RunResults {
    let graph = ctx.graph();
    let shape = graph.shape();
    let end = ctx.end();
    let mut run = RunResults::new(AlgorithmKind::AStar, graph.len(), ctx.start(), end);
    let mut best = vec![UNREACHABLE; graph.len()];
    let mut visited = vec![false; graph.len()];
    let mut predecessor: Vec<Option<usize>> = vec![None; graph.len()];
    let mut heap = MinHeap::new(|a: &HeapNode, b: &HeapNode| a.priority > b.priority);
    let mut steps: u64 = 0;

    best[ctx.start()] = 0;
    steps += heap.push(HeapNode {
        id: ctx.start(),
        priority: heuristic.estimate(shape, ctx.start(), end),
    });

    while let Some((node, pop_cost)) = heap.pop() {
        steps += pop_cost;
        if visited[node.id] {
            continue;
        }
        visited[node.id] = true;
        run.add_step(steps, node.id, NodeState::Visiting);

        if node.id == end {
            let path = walk_predecessors(&predecessor, node.id);
            run.set_shortest_path(path, graph);
            return run;
        }

        let current = best[node.id];
        for &Edge { to, weight } in graph.neighbors(node.id) {
            steps += cost::EXPAND;
            if visited[to] || graph.is_wall(to) {
                continue;
            }
            debug_assert!(weight >= 0, "negative edge {} -> {to} fed to A*", node.id);
            let next = current.saturating_add(weight);
            if next < best[to] {
                steps += cost::RELAX;
                best[to] = next;
                predecessor[to] = Some(node.id);
                steps += heap.push(HeapNode {
                    id: to,
                    priority: next.saturating_add(heuristic.estimate(shape, to, end)),
                });
                run.add_step(steps, to, NodeState::Exploring);
            }
        }

        run.add_step(steps, node.id, NodeState::Visited);
    }

    run.set_shortest_path(Vec::new(), graph);
    run
}
