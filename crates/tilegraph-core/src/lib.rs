//! **tilegraph-core** — graph types for the tilegraph toolkit.
//!
//! This crate provides the node/edge identity types, the [`Graph`] and
//! [`MutableGraph`] capability traits, and two graphs implementing them:
//!
//! - [`ConcreteGraph`]: arbitrary mutable topology, directed or undirected.
//! - [`TileGraph`]: a fixed-size grid whose 4-connected adjacency is derived
//!   from per-tile passability.
//!
//! Search algorithms live in `tilegraph-paths` and only use [`Graph`].

pub mod concrete;
pub mod node;
pub mod tile;
pub mod traits;

pub use concrete::{ConcreteGraph, DEFAULT_COST};
pub use node::{Edge, Node};
pub use tile::{TileGraph, TileGraphError};
pub use traits::{Graph, MutableGraph};
