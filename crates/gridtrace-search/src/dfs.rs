//! Depth-first search with randomized neighbor order.

use gridtrace_core::{AlgorithmKind, GridGraph, NodeId, NodeState, RunResults};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::context::{SearchContext, cost, walk_predecessors};

/// Run a randomized depth-first search from start to end.
///
/// Neighbor order is shuffled per call frame, so the walk is
/// intentionally non-deterministic unless the caller seeds `rng`. DFS
/// guarantees *a* path whenever one exists, never the shortest one.
pub fn dfs(ctx: &SearchContext, rng: &mut impl Rng) -> RunResults {
    let graph = ctx.graph();
    let mut walk = Walk {
        graph,
        end: ctx.end(),
        rng,
        visited: vec![false; graph.len()],
        predecessor: vec![None; graph.len()],
        steps: 0,
        run: RunResults::new(AlgorithmKind::Dfs, graph.len(), ctx.start(), ctx.end()),
    };

    walk.visited[ctx.start()] = true;
    let found = walk.visit(ctx.start());

    let path = if found {
        walk_predecessors(&walk.predecessor, ctx.end())
    } else {
        Vec::new()
    };
    let mut run = walk.run;
    run.set_shortest_path(path, graph);
    run
}

struct Walk<'a, R> {
    graph: &'a GridGraph,
    end: NodeId,
    rng: &'a mut R,
    visited: Vec<bool>,
    predecessor: Vec<Option<NodeId>>,
    steps: u64,
    run: RunResults,
}

impl<R: Rng> Walk<'_, R> {
    /// Explore from `current`; true once the end node is reached, which
    /// unwinds the whole stack.
    fn visit(&mut self, current: NodeId) -> bool {
        self.steps += cost::DEQUEUE;
        self.run.add_step(self.steps, current, NodeState::Visiting);

        if current == self.end {
            return true;
        }

        let mut order: Vec<NodeId> = self.graph.neighbors(current).iter().map(|e| e.to).collect();
        order.shuffle(self.rng);

        for to in order {
            self.steps += cost::EXPAND;
            if self.visited[to] || self.graph.is_wall(to) {
                continue;
            }
            self.visited[to] = true;
            self.predecessor[to] = Some(current);
            self.run.add_step(self.steps, to, NodeState::Exploring);
            if self.visit(to) {
                return true;
            }
        }

        self.run.add_step(self.steps, current, NodeState::Visited);
        false
    }
}
