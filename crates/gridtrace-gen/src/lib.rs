//! Graph generators for gridtrace: weighted-grid builders and a
//! recursive-division maze.

pub mod builder;
pub mod maze;

pub use builder::{congestion, elevation, maze, signed_elevation, uniform};
pub use maze::MazeGen;
