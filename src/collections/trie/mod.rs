//! Character prefix trie.
//!
//! [`PrefixIndex`] stores a set of strings and answers "every stored string
//! starting with this prefix". Nodes live in a single arena; enumeration uses
//! an explicit stack, so key length never translates into recursion depth.
//!
//! The node layout is internal to the crate:
//!
//! ```compile_fail
//! use keygraph::collections::trie::node::TrieNode;
//! ```

pub(crate) mod node;
pub mod index;
pub mod iter;
pub mod stats;

pub use index::PrefixIndex;
pub use iter::PrefixIter;
pub use stats::PrefixIndexStats;
