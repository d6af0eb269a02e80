//! Graph layouts and traversals.
//!
//! - `relation`: undirected adjacency-list graph keyed by node identity, with BFS

pub mod relation;

pub use relation::{Bfs, GraphStats, RelationGraph};
