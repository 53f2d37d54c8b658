//! A* search for tilegraph graphs.
//!
//! - [`astar`] runs a one-shot search; [`PathFinder::astar_path`] does the
//!   same while reusing allocations between queries.
//! - [`is_path`] checks that a node sequence is a walk in a graph.
//! - [`heuristics`] holds ready-made heuristics.
//!
//! Searches only go through the read-only [`Graph`](tilegraph_core::Graph)
//! trait, so they work the same on a
//! [`ConcreteGraph`](tilegraph_core::ConcreteGraph), a
//! [`TileGraph`](tilegraph_core::TileGraph) or any other implementation.
//! An unreachable goal is not an error: the result has no path and a cost of
//! [`UNREACHABLE`].

mod astar;
pub mod heuristics;
mod pathfinder;
mod validate;

pub use astar::{CostFn, Heuristic, astar};
pub use pathfinder::{AstarResult, PathFinder, UNREACHABLE};
pub use validate::is_path;
