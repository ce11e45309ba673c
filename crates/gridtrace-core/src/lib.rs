//! **gridtrace-core** — grid-graph model and run recording.
//!
//! This crate provides the data model shared across the *gridtrace*
//! ecosystem: grid geometry ([`GridShape`]), the weighted grid graph
//! ([`GridGraph`]), the per-node visualization state machine
//! ([`NodeState`]) and the [`RunResults`] timeline that search engines
//! produce and a renderer later replays step by step.

pub mod graph;
pub mod results;
pub mod shape;
pub mod state;

pub use graph::{Edge, GridGraph, WALL};
pub use results::{AlgorithmKind, Outcome, RunResults, best_run};
pub use shape::{GridShape, NodeId};
pub use state::NodeState;
