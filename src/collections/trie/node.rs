//! Trie node layout.

use std::vec::Vec;

/// Index of the root node in the trie arena.
pub(crate) const ROOT: usize = 0;

/// A node in the prefix trie.
///
/// Each node contains:
/// - A flag recording whether some inserted string ends exactly here.
/// - A list of children (edges to other nodes), sorted by the edge character.
///
/// We use `usize` for links to other nodes within the arena owned by
/// [`PrefixIndex`](super::PrefixIndex). A node is only ever linked from its parent.
#[derive(Debug, Clone, Default)]
pub(crate) struct TrieNode {
    /// Children nodes, sorted by edge character.
    /// Maps `ch` -> `node_index`.
    pub(crate) children: Vec<(char, usize)>,
    /// True iff an inserted string ends at this node.
    pub(crate) is_terminal: bool,
}

impl TrieNode {
    /// Creates a new non-terminal node with no children.
    pub(crate) fn new() -> Self {
        Self {
            children: Vec::new(),
            is_terminal: false,
        }
    }

    /// Finds the child index for a given character.
    pub(crate) fn get_child(&self, ch: char) -> Option<usize> {
        self.search(ch).ok().map(|pos| self.children[pos].1)
    }

    /// Position of `ch` among the children, or where it would be inserted.
    #[inline]
    pub(crate) fn search(&self, ch: char) -> Result<usize, usize> {
        self.children.binary_search_by_key(&ch, |&(c, _)| c)
    }

    /// Links a child at `pos` as returned by a failed [`search`](Self::search).
    /// Maintains the sorted order of children.
    #[inline]
    pub(crate) fn link_child(&mut self, pos: usize, ch: char, child_idx: usize) {
        self.children.insert(pos, (ch, child_idx));
    }
}
