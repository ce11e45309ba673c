//! Breadth-first search: minimum hop count on unweighted grids.

use gridtrace_core::{AlgorithmKind, Edge, NodeState, RunResults};

use crate::context::{SearchContext, cost, walk_predecessors};
use crate::queue::Queue;

/// Run BFS from the context's start to its end.
///
/// Edge weights are ignored; only connectivity is used, so the result is
/// optimal in hop count, not in weight. Returns a finalized run whether
/// or not the end was reached.
pub fn bfs(ctx: &SearchContext) -> RunResults {
    let graph = ctx.graph();
    let mut run = RunResults::new(AlgorithmKind::Bfs, graph.len(), ctx.start(), ctx.end());
    let mut visited = vec![false; graph.len()];
    let mut predecessor: Vec<Option<usize>> = vec![None; graph.len()];
    let mut frontier = Queue::new();
    let mut steps: u64 = 0;

    visited[ctx.start()] = true;
    frontier.enqueue(ctx.start());

    while let Some(current) = frontier.dequeue() {
        steps += cost::DEQUEUE;
        run.add_step(steps, current, NodeState::Visiting);

        if current == ctx.end() {
            let path = walk_predecessors(&predecessor, current);
            run.set_shortest_path(path, graph);
            return run;
        }

        for &Edge { to, .. } in graph.neighbors(current) {
            steps += cost::EXPAND;
            if visited[to] || graph.is_wall(to) {
                continue;
            }
            visited[to] = true;
            predecessor[to] = Some(current);
            frontier.enqueue(to);
            run.add_step(steps, to, NodeState::Exploring);
        }

        run.add_step(steps, current, NodeState::Visited);
    }

    run.set_shortest_path(Vec::new(), graph);
    run
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::manhattan;
    use gridtrace_core::{GridShape, Outcome, WALL};
    use gridtrace_gen::{congestion, uniform};

    #[test]
    fn open_grid_path_length_is_manhattan_distance() {
        let shape = GridShape::new(6, 9);
        let g = uniform(shape);
        let start = shape.index(1, 1);
        let end = shape.index(4, 7);
        let ctx = SearchContext::new(&g, start, end).unwrap();

        let run = bfs(&ctx);
        assert_eq!(run.outcome(), Outcome::Found);
        let hops = run.shortest_path().len() as i32 - 1;
        assert_eq!(hops, manhattan(shape, start, end));
    }

    #[test]
    fn path_endpoints_are_start_and_end() {
        let shape = GridShape::new(4, 4);
        let g = uniform(shape);
        let ctx = SearchContext::new(&g, 0, 15).unwrap();
        let run = bfs(&ctx);
        assert_eq!(run.shortest_path().first(), Some(&0));
        assert_eq!(run.shortest_path().last(), Some(&15));
    }

    #[test]
    fn walled_off_end_is_exhausted() {
        // 3x3 with the middle column walled: right side unreachable.
        let shape = GridShape::new(3, 3);
        let weights = vec![0, WALL, 0, 0, WALL, 0, 0, WALL, 0];
        let g = congestion(shape, weights);
        let ctx = SearchContext::new(&g, 0, 8).unwrap();

        let run = bfs(&ctx);
        assert_eq!(run.outcome(), Outcome::Exhausted);
        assert!(run.shortest_path().is_empty());
        // The timeline still records the exploration of the left side.
        assert!(run.step_list().len() > 1);
    }

    #[test]
    fn start_equals_end() {
        let g = uniform(GridShape::new(2, 2));
        let ctx = SearchContext::new(&g, 3, 3).unwrap();
        let run = bfs(&ctx);
        assert_eq!(run.shortest_path(), &[3]);
        assert_eq!(run.total_weight(), 0);
    }

    #[test]
    fn step_list_monotonic() {
        let g = uniform(GridShape::new(5, 5));
        let ctx = SearchContext::new(&g, 0, 24).unwrap();
        let run = bfs(&ctx);
        assert!(run.step_list().windows(2).all(|w| w[0] <= w[1]));
    }
}
