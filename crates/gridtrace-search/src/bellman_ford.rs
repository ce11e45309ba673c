//! Bellman-Ford: shortest paths with signed edge weights.

use gridtrace_core::{AlgorithmKind, Edge, NodeState, RunResults};

use crate::context::{SearchContext, UNREACHABLE, cost, walk_predecessors};

/// Run Bellman-Ford from the context's start to its end.
///
/// Handles truly negative edge weights (the signed elevation model,
/// without the `max(.., 0)` clamp). Performs up to `|V| - 1` relaxation
/// rounds over all edges with early termination once a round relaxes
/// nothing, then one more full scan: an edge that still relaxes proves a
/// negative-weight cycle, in which case the run is finalized as
/// [`Outcome::NegativeCycle`](gridtrace_core::Outcome::NegativeCycle)
/// with no path and a warning is logged.
pub fn bellman_ford(ctx: &SearchContext) -> RunResults {
    let graph = ctx.graph();
    let node_count = graph.len();
    let mut run = RunResults::new(AlgorithmKind::BellmanFord, node_count, ctx.start(), ctx.end());
    let mut best = vec![UNREACHABLE; node_count];
    let mut predecessor: Vec<Option<usize>> = vec![None; node_count];
    let mut steps: u64 = 0;

    best[ctx.start()] = 0;

    for _ in 0..node_count.saturating_sub(1) {
        let mut dirty = false;
        for (from, Edge { to, weight }) in graph.edges() {
            steps += cost::RELAX;
            if best[from] == UNREACHABLE || graph.is_wall(from) || graph.is_wall(to) {
                continue;
            }
            let next = best[from].saturating_add(weight);
            if next < best[to] {
                best[to] = next;
                predecessor[to] = Some(from);
                dirty = true;
                run.add_step(steps, to, NodeState::Exploring);
            }
        }
        if !dirty {
            break;
        }
    }

    // Post-convergence scan: any remaining relaxation proves a cycle.
    for (from, Edge { to, weight }) in graph.edges() {
        steps += cost::RELAX;
        if best[from] == UNREACHABLE || graph.is_wall(from) || graph.is_wall(to) {
            continue;
        }
        if best[from].saturating_add(weight) < best[to] {
            log::warn!("negative-weight cycle through edge {from} -> {to}, no path reported");
            run.add_step(steps, to, NodeState::Exploring);
            run.mark_negative_cycle();
            return run;
        }
    }

    let path = if best[ctx.end()] == UNREACHABLE {
        Vec::new()
    } else {
        walk_predecessors(&predecessor, ctx.end())
    };
    run.set_shortest_path(path, graph);
    run
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dijkstra::dijkstra;
    use gridtrace_core::{GridGraph, GridShape, Outcome, WALL};
    use gridtrace_gen::{congestion, elevation, signed_elevation, uniform};

    #[test]
    fn matches_dijkstra_on_non_negative_grid() {
        let shape = GridShape::new(4, 4);
        let weights = vec![0, 2, 8, 1, 3, 9, 2, 4, 1, 5, 7, 2, 6, 1, 3, 0];
        let g = elevation(shape, weights);
        let ctx = SearchContext::new(&g, 0, 15).unwrap();

        assert_eq!(
            bellman_ford(&ctx).total_weight(),
            dijkstra(&ctx).total_weight()
        );
    }

    #[test]
    fn signed_descent_beats_clamped_model() {
        // One corridor over a hill: the clamped model charges the climb
        // and refunds nothing, the signed model credits the descent.
        let shape = GridShape::new(1, 3);
        let weights = vec![0, 5, 1];

        let clamped = elevation(shape, weights.clone());
        let ctx = SearchContext::new(&clamped, 0, 2).unwrap();
        let dijkstra_run = dijkstra(&ctx);

        let signed = signed_elevation(shape, weights);
        let ctx = SearchContext::new(&signed, 0, 2).unwrap();
        let bellman_run = bellman_ford(&ctx);

        assert_eq!(dijkstra_run.total_weight(), 5);
        assert_eq!(bellman_run.total_weight(), 1);
        assert!(bellman_run.total_weight() < dijkstra_run.total_weight());
    }

    #[test]
    fn detects_negative_cycle() {
        // Hand-built two-node graph whose round trip loses weight.
        let shape = GridShape::new(1, 2);
        let adjacency = vec![
            vec![Edge { to: 1, weight: -1 }],
            vec![Edge { to: 0, weight: -1 }],
        ];
        let g = GridGraph::new(shape, adjacency, vec![0, 0]);
        let ctx = SearchContext::new(&g, 0, 1).unwrap();

        let run = bellman_ford(&ctx);
        assert_eq!(run.outcome(), Outcome::NegativeCycle);
        assert!(run.shortest_path().is_empty());
    }

    #[test]
    fn unreachable_end_is_exhausted_not_cycle() {
        let shape = GridShape::new(3, 3);
        let weights = vec![0, WALL, 0, 0, WALL, 0, 0, WALL, 0];
        let g = congestion(shape, weights);
        let ctx = SearchContext::new(&g, 0, 8).unwrap();

        let run = bellman_ford(&ctx);
        assert_eq!(run.outcome(), Outcome::Exhausted);
        assert!(run.shortest_path().is_empty());
    }

    #[test]
    fn early_termination_on_settled_grid() {
        // A corridor settles after a handful of rounds; the step count
        // must stay far below the |V|-1 worst case of full sweeps.
        let shape = GridShape::new(1, 8);
        let g = uniform(shape);
        let ctx = SearchContext::new(&g, 0, 7).unwrap();

        let run = bellman_ford(&ctx);
        let edge_count = g.edges().count() as u64;
        let worst_case = edge_count * 7 * 2;
        assert!(run.algorithm_steps() < worst_case);
        assert_eq!(run.shortest_path().len(), 8);
    }

    #[test]
    fn path_endpoints_are_start_and_end() {
        let shape = GridShape::new(3, 4);
        let g = signed_elevation(shape, vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 8]);
        let ctx = SearchContext::new(&g, 0, 11).unwrap();

        let run = bellman_ford(&ctx);
        assert_eq!(run.shortest_path().first(), Some(&0));
        assert_eq!(run.shortest_path().last(), Some(&11));
    }
}
