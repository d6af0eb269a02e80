//! # `keygraph` - Prefix Lookup and Relation Graph Primitives
//!
//! Two independent, composable building blocks for search-style
//! applications over short text keys (titles, names, tags):
//!
//! - [`PrefixIndex`]: a character trie that stores a set of strings and
//!   answers "list every stored string beginning with this prefix".
//! - [`RelationGraph`]: an undirected adjacency-list graph over arbitrary
//!   hashable identities (actor ↔ movie, title ↔ genre) that answers
//!   "what is reachable from here, and in what order" via breadth-first
//!   traversal.
//!
//! Neither structure depends on the other. A calling layer builds both,
//! feeds them records, and merges their query results.
//!
//! ## Guarantees
//!
//! - **Total operations**: lookups never fail. An absent prefix yields an
//!   empty result; an unknown start node yields a traversal of just itself.
//! - **Bounded stack use**: trie enumeration and graph traversal use
//!   explicit work-lists, so key length and component size never translate
//!   into recursion depth.
//! - **Explicit ownership**: every index and graph is a plain value. There
//!   are no process-wide instances and no internal locking; share a value
//!   across threads through `&T` for reads and serialize writers yourself.
//!
//! ## Cargo features
//!
//! - `parallel`: answer batched prefix queries on the rayon pool.
//! - `tracing`: emit `tracing` events on insert, edge insertion, and queries.
//!
//! ## Example
//!
//! ```rust
//! use keygraph::{PrefixIndex, RelationGraph};
//!
//! let mut titles = PrefixIndex::new();
//! titles.insert("romantic");
//! titles.insert("romania");
//! titles.insert("romantic comedy");
//! assert_eq!(titles.search_prefix("rom").len(), 3);
//! assert!(titles.search_prefix("acti").is_empty());
//!
//! let mut cast = RelationGraph::new();
//! cast.add_edge("Tom Hanks", "Movie A");
//! cast.add_edge("Movie A", "Meg Ryan");
//! assert_eq!(cast.bfs(&"Tom Hanks"), vec!["Tom Hanks", "Movie A", "Meg Ryan"]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;
mod invariant;

pub mod collections;
pub mod graph;

pub use collections::{PrefixIndex, PrefixIndexStats, PrefixIter};
pub use graph::{Bfs, GraphStats, RelationGraph};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // A trie node is one child vector plus a flag.
    assert!(mem::size_of::<collections::trie::node::TrieNode>() <= mem::size_of::<Vec<(char, usize)>>() + mem::size_of::<usize>());
};
