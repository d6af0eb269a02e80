//! Collections for key lookup.
//!
//! - `trie`: character prefix trie for prefix enumeration

pub mod trie;

pub use trie::{PrefixIndex, PrefixIndexStats, PrefixIter};
