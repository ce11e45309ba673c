//! Dijkstra's algorithm with lazy heap deletion.

use gridtrace_core::{AlgorithmKind, Edge, NodeState, RunResults};

use crate::context::{SearchContext, UNREACHABLE, cost, walk_predecessors};
use crate::heap::{HeapNode, MinHeap};

/// Run Dijkstra from the context's start to its end.
///
/// Priority is the accumulated edge weight. Instead of decrease-key, a
/// relaxation pushes a fresh heap entry and stale entries are discarded
/// against the visited set on pop. Edge weights must be non-negative;
/// graphs built with the clamped elevation model satisfy this by
/// construction, signed graphs belong to
/// [`bellman_ford`](crate::bellman_ford).
pub fn dijkstra(ctx: &SearchContext) -> RunResults {
    let graph = ctx.graph();
    let mut run = RunResults::new(AlgorithmKind::Dijkstra, graph.len(), ctx.start(), ctx.end());
    let mut best = vec![UNREACHABLE; graph.len()];
    let mut visited = vec![false; graph.len()];
    let mut predecessor: Vec<Option<usize>> = vec![None; graph.len()];
    let mut heap = MinHeap::new(|a: &HeapNode, b: &HeapNode| a.priority > b.priority);
    let mut steps: u64 = 0;

    best[ctx.start()] = 0;
    steps += heap.push(HeapNode {
        id: ctx.start(),
        priority: 0,
    });

    while let Some((node, pop_cost)) = heap.pop() {
        steps += pop_cost;
        if visited[node.id] {
            // Stale entry superseded by a later, cheaper push.
            continue;
        }
        visited[node.id] = true;
        run.add_step(steps, node.id, NodeState::Visiting);

        if node.id == ctx.end() {
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
            debug_assert!(weight >= 0, "negative edge {} -> {to} fed to Dijkstra", node.id);
            let next = current.saturating_add(weight);
            if next < best[to] {
                steps += cost::RELAX;
                best[to] = next;
                predecessor[to] = Some(node.id);
                steps += heap.push(HeapNode {
                    id: to,
                    priority: next,
                });
                run.add_step(steps, to, NodeState::Exploring);
            }
        }

        run.add_step(steps, node.id, NodeState::Visited);
    }

    run.set_shortest_path(Vec::new(), graph);
    run
}
