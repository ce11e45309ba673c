//! Run recording and playback.
//!
//! A [`RunResults`] owns the full timeline of one algorithm run: a list of
//! synthetic step counts and, parallel to it, one complete per-node state
//! snapshot per recorded event. Engines append to the timeline while they
//! search, finalize it with the reconstructed path, and hand the value to
//! a renderer that replays it with [`RunResults::snapshot_at`].

use crate::graph::GridGraph;
use crate::shape::NodeId;
use crate::state::NodeState;

/// Step gap between the last search event and the "clear" snapshot that
/// wipes exploration noise before the path is traced.
const CLEAR_GAP: u64 = 10;
/// Step spacing between consecutive path-trace snapshots; controls
/// playback pacing of the path reveal.
const PATH_PACE: u64 = 10;

/// Which engine produced a run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlgorithmKind {
    Bfs,
    Dfs,
    Dijkstra,
    BellmanFord,
    AStar,
}

impl std::fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::Dijkstra => "Dijkstra",
            Self::BellmanFord => "Bellman-Ford",
            Self::AStar => "A*",
        };
        f.write_str(name)
    }
}

/// How a run ended.
///
/// `Exhausted` (frontier emptied, end unreachable) and `NegativeCycle`
/// (Bellman-Ford convergence check failed) both leave the path empty;
/// the tag is what lets callers tell them apart.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Found,
    Exhausted,
    NegativeCycle,
}

/// The recorded timeline of one algorithm run.
///
/// Mutating methods are meant for engines; once a run is finalized by
/// [`set_shortest_path`](Self::set_shortest_path) or
/// [`mark_negative_cycle`](Self::mark_negative_cycle) the value is
/// read-only.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResults {
    kind: AlgorithmKind,
    start: NodeId,
    end: NodeId,
    steps: Vec<u64>,
    snapshots: Vec<Vec<NodeState>>,
    shortest_path: Vec<NodeId>,
    /// Steps consumed by the search itself, before path tracing began.
    algorithm_steps: u64,
    total_weight: i64,
    outcome: Outcome,
    finalized: bool,
}

impl RunResults {
    /// Start a new timeline with one synthetic zero-step snapshot: all
    /// nodes `Unvisited` except the `Start`/`End` overlays.
    pub fn new(kind: AlgorithmKind, node_count: usize, start: NodeId, end: NodeId) -> Self {
        let mut base = vec![NodeState::Unvisited; node_count];
        base[start] = NodeState::Start;
        base[end] = NodeState::End;
        Self {
            kind,
            start,
            end,
            steps: vec![0],
            snapshots: vec![base],
            shortest_path: Vec::new(),
            algorithm_steps: 0,
            total_weight: 0,
            outcome: Outcome::Exhausted,
            finalized: false,
        }
    }

    /// Record one node-state change at the given step count.
    ///
    /// Clones the latest snapshot, patches one node, and appends both the
    /// step and the new snapshot, so every historical snapshot stays an
    /// independent value during playback. `Start`/`End` overlays are never
    /// patched.
    pub fn add_step(&mut self, steps: u64, node: NodeId, state: NodeState) {
        debug_assert!(!self.finalized, "add_step after finalization");
        debug_assert!(
            self.steps.last().is_none_or(|&last| steps >= last),
            "step counts must be non-decreasing"
        );
        let mut snapshot = self.snapshots[self.snapshots.len() - 1].clone();
        if !snapshot[node].is_overlay() {
            debug_assert!(
                state.rank() >= snapshot[node].rank(),
                "state regression on node {node}"
            );
            snapshot[node] = state;
        }
        self.steps.push(steps);
        self.snapshots.push(snapshot);
    }

    /// Finalize the run with the reconstructed shortest path.
    ///
    /// Records the search/trace boundary, then appends a clear snapshot
    /// (base states only) followed by one snapshot per path node, each
    /// marking that node `ShortestPath` unless it is the start or end.
    /// An empty path finalizes the run as [`Outcome::Exhausted`] without
    /// appending anything.
    pub fn set_shortest_path(&mut self, path: Vec<NodeId>, graph: &GridGraph) {
        debug_assert!(!self.finalized, "set_shortest_path after finalization");
        let last = *self.steps.last().unwrap_or(&0);
        self.algorithm_steps = last;
        if path.is_empty() {
            self.outcome = Outcome::Exhausted;
            self.finalized = true;
            return;
        }

        self.total_weight = graph.path_weight(&path);

        // Clear snapshot: wipe exploration noise before tracing the path.
        let node_count = self.snapshots[0].len();
        let mut clear = vec![NodeState::Unvisited; node_count];
        clear[self.start] = NodeState::Start;
        clear[self.end] = NodeState::End;
        self.steps.push(last + CLEAR_GAP);
        self.snapshots.push(clear);

        for (i, &node) in path.iter().enumerate() {
            let mut snapshot = self.snapshots[self.snapshots.len() - 1].clone();
            if !snapshot[node].is_overlay() {
                snapshot[node] = NodeState::ShortestPath;
            }
            self.steps.push(last + CLEAR_GAP + PATH_PACE * (i as u64 + 1));
            self.snapshots.push(snapshot);
        }

        self.shortest_path = path;
        self.outcome = Outcome::Found;
        self.finalized = true;
    }

    /// Finalize the run after a failed negative-cycle convergence check.
    /// No path is recorded.
    pub fn mark_negative_cycle(&mut self) {
        debug_assert!(!self.finalized, "mark_negative_cycle after finalization");
        self.algorithm_steps = *self.steps.last().unwrap_or(&0);
        self.outcome = Outcome::NegativeCycle;
        self.finalized = true;
    }

    /// The engine that produced this run.
    #[inline]
    pub fn kind(&self) -> AlgorithmKind {
        self.kind
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

    /// Recorded step counts, non-decreasing, parallel to
    /// [`snapshots`](Self::snapshots).
    #[inline]
    pub fn step_list(&self) -> &[u64] {
        &self.steps
    }

    /// Recorded per-node state snapshots, parallel to
    /// [`step_list`](Self::step_list).
    #[inline]
    pub fn snapshots(&self) -> &[Vec<NodeState>] {
        &self.snapshots
    }

    /// The reconstructed path, start to end. Empty when no path was found.
    #[inline]
    pub fn shortest_path(&self) -> &[NodeId] {
        &self.shortest_path
    }

    /// Steps consumed before path tracing began.
    #[inline]
    pub fn algorithm_steps(&self) -> u64 {
        self.algorithm_steps
    }

    /// Total weight of the recorded path (directed edge weights summed
    /// along it); zero when the path has fewer than two nodes.
    #[inline]
    pub fn total_weight(&self) -> i64 {
        self.total_weight
    }

    /// How the run ended.
    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Number of nodes each snapshot covers.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.snapshots[0].len()
    }

    /// The snapshot in effect at an arbitrary step number.
    ///
    /// Binary-searches for the greatest recorded step `<=` `step`.
    /// Queries below the first recorded step return the first snapshot;
    /// queries past the last return the last.
    pub fn snapshot_at(&self, step: u64) -> &[NodeState] {
        let i = self.steps.partition_point(|&s| s <= step);
        &self.snapshots[i.saturating_sub(1)]
    }
}

/// Pick the best run out of a set: lowest total path weight wins, ties
/// broken by fewer search steps. Runs that found no path never win.
pub fn best_run(runs: &[RunResults]) -> Option<&RunResults> {
    runs.iter()
        .filter(|r| r.outcome() == Outcome::Found)
        .min_by_key(|r| (r.total_weight(), r.algorithm_steps()))
}
