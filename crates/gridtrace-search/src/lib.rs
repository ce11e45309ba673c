//! Search engines for grid graphs, instrumented for playback recording.
//!
//! Five algorithms over a shared [`SearchContext`], each producing a
//! [`RunResults`](gridtrace_core::RunResults) timeline:
//!
//! | Engine | Guarantee | Frontier |
//! |---|---|---|
//! | [`bfs`] | minimum hop count | [`Queue`] |
//! | [`dfs`] | *a* path (randomized, not shortest) | call stack |
//! | [`dijkstra`] | minimum weight, non-negative edges | [`MinHeap`] |
//! | [`bellman_ford`] | minimum weight, negative edges allowed | edge sweep |
//! | [`astar`] | minimum weight, admissible [`Heuristic`] | [`MinHeap`] |
//!
//! Every engine runs synchronously to completion with its own private
//! visited set, predecessor map and step counter; the step counts are a
//! deterministic proxy for work done, not wall-clock time, and use one
//! shared cost convention so cross-engine comparisons stay meaningful.

mod astar;
mod bellman_ford;
mod bfs;
mod context;
mod dfs;
mod dijkstra;
mod distance;
mod heap;
mod queue;

pub use astar::{Heuristic, astar};
pub use bellman_ford::bellman_ford;
pub use bfs::bfs;
pub use context::{ContextError, SearchContext, UNREACHABLE};
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use distance::{euclidean, manhattan};
pub use heap::{HeapNode, MinHeap};
pub use queue::Queue;
