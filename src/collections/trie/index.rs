//! The [`PrefixIndex`] arena trie.

use std::vec::Vec;
use std::string::String;

use super::iter::PrefixIter;
use super::node::{TrieNode, ROOT};
use super::stats::PrefixIndexStats;
use crate::invariant::invariant_assert;

/// A character trie answering "every stored string starting with `prefix`".
///
/// Nodes live in a single arena (`Vec<TrieNode>`) for cache locality; the
/// root occupies slot 0 and every other node is reachable from exactly one
/// parent. Nodes are created lazily on insertion and never removed
/// individually.
///
/// Lookups never fail: an absent prefix yields an empty result.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `insert` | \(O(k \log \sigma)\) | `k` chars, binary search over `σ` children |
/// | `contains` | \(O(k \log \sigma)\) | |
/// | `search_prefix` | \(O(k \log \sigma + s)\) | `s` = size of the matched subtree |
#[derive(Debug, Clone)]
pub struct PrefixIndex {
    /// Arena of nodes; `nodes[ROOT]` is the root.
    pub(crate) nodes: Vec<TrieNode>,
    /// Number of distinct stored strings.
    len: usize,
}

impl PrefixIndex {
    /// Creates an empty index holding only the root node.
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Creates an empty index with room for `nodes` trie nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        let mut arena = Vec::with_capacity(nodes.max(1));
        arena.push(TrieNode::new());
        Self {
            nodes: arena,
            len: 0,
        }
    }

    /// Returns the number of distinct stored strings.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing has been inserted (not even the empty string).
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of trie nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Drops every stored string, keeping a fresh root.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[ROOT] = TrieNode::new();
        self.len = 0;
    }

    /// Inserts `word`, creating any missing nodes along its path.
    ///
    /// Returns `true` if `word` was not already stored. Inserting the empty
    /// string marks the root terminal.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut curr = ROOT;

        for ch in word.chars() {
            curr = match self.nodes[curr].search(ch) {
                Ok(pos) => self.nodes[curr].children[pos].1,
                Err(pos) => {
                    let child = self.alloc_node();
                    self.nodes[curr].link_child(pos, ch, child);
                    child
                }
            };
        }

        let node = &mut self.nodes[curr];
        let inserted = !node.is_terminal;
        node.is_terminal = true;
        if inserted {
            self.len += 1;
        }

        invariant_assert(self.len <= self.nodes.len(), "every stored string owns a terminal node");
        trace_event!(chars = word.chars().count(), inserted, nodes = self.nodes.len(), "prefix index insert");

        inserted
    }

    /// Returns true if `word` itself was inserted.
    pub fn contains(&self, word: &str) -> bool {
        self.find_node(word)
            .is_some_and(|idx| self.nodes[idx].is_terminal)
    }

    /// Returns every stored string that starts with `prefix`.
    ///
    /// Each match appears exactly once. Results come out in lexicographic
    /// order of `char`s, with a word ahead of its extensions. An unknown
    /// prefix gives an empty vector, and so does an empty index.
    pub fn search_prefix(&self, prefix: &str) -> Vec<String> {
        let matches: Vec<String> = self.prefix_iter(prefix).collect();
        trace_event!(prefix_chars = prefix.chars().count(), matches = matches.len(), "prefix index search");
        matches
    }

    /// Lazily yields every stored string that starts with `prefix`.
    ///
    /// Same contents and order as [`search_prefix`](Self::search_prefix).
    pub fn prefix_iter<'a>(&'a self, prefix: &str) -> PrefixIter<'a> {
        match self.find_node(prefix) {
            Some(start) => PrefixIter::new(self, start, String::from(prefix)),
            None => PrefixIter::empty(self),
        }
    }

    /// Lazily yields every stored string.
    pub fn iter(&self) -> PrefixIter<'_> {
        PrefixIter::new(self, ROOT, String::new())
    }

    /// Counts the stored strings starting with `prefix` without building them.
    pub fn count_prefix(&self, prefix: &str) -> usize {
        let Some(start) = self.find_node(prefix) else {
            return 0;
        };

        let mut count = 0;
        let mut stack = vec![start];
        while let Some(idx) = stack.pop() {
            let node = &self.nodes[idx];
            if node.is_terminal {
                count += 1;
            }
            stack.extend(node.children.iter().map(|&(_, child)| child));
        }
        count
    }

    /// Answers a batch of prefix queries, one result vector per prefix in
    /// input order.
    ///
    /// With the `parallel` feature the batch is spread over the rayon pool.
    pub fn search_prefixes<P>(&self, prefixes: &[P]) -> Vec<Vec<String>>
    where
        P: AsRef<str> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            prefixes
                .par_iter()
                .map(|p| self.search_prefix(p.as_ref()))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            prefixes
                .iter()
                .map(|p| self.search_prefix(p.as_ref()))
                .collect()
        }
    }

    /// Summary figures for reporting.
    pub fn stats(&self) -> PrefixIndexStats {
        PrefixIndexStats::new(self.len, self.nodes.len())
    }

    /// Walks `key` from the root, returning the node it ends at.
    fn find_node(&self, key: &str) -> Option<usize> {
        let mut curr = ROOT;
        for ch in key.chars() {
            curr = self.nodes[curr].get_child(ch)?;
        }
        Some(curr)
    }

    /// Allocates a fresh node in the arena.
    fn alloc_node(&mut self) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(TrieNode::new());
        idx
    }
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> Extend<S> for PrefixIndex {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

impl<'a> IntoIterator for &'a PrefixIndex {
    type Item = String;
    type IntoIter = PrefixIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
