//! Explicit-stack enumeration of trie subtrees.

use core::iter::FusedIterator;
use std::vec::Vec;
use std::string::String;

use super::index::PrefixIndex;

/// One level of the depth-first walk.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: usize,
    /// 0 = terminal flag not yet checked, `n + 1` = next child to descend is `n`.
    action: usize,
}

impl Frame {
    fn enter(node: usize) -> Self {
        Self { node, action: 0 }
    }
}

/// Iterator over the strings stored under one trie node.
///
/// Walks the subtree depth-first with an explicit frame stack, so traversal
/// depth is independent of the call stack. Yields owned `String`s built from
/// the starting prefix plus the characters along the path.
pub struct PrefixIter<'a> {
    index: &'a PrefixIndex,
    stack: Vec<Frame>,
    key_buf: String,
}

impl<'a> PrefixIter<'a> {
    pub(crate) fn new(index: &'a PrefixIndex, start: usize, prefix: String) -> Self {
        Self {
            index,
            stack: vec![Frame::enter(start)],
            key_buf: prefix,
        }
    }

    pub(crate) fn empty(index: &'a PrefixIndex) -> Self {
        Self {
            index,
            stack: Vec::new(),
            key_buf: String::new(),
        }
    }
}

impl<'a> Iterator for PrefixIter<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let index: &'a PrefixIndex = self.index;

        loop {
            let last = self.stack.len().checked_sub(1)?;
            let Frame { node: node_idx, action } = self.stack[last];
            let node = &index.nodes[node_idx];

            if action == 0 {
                // Try to yield this node's own string
                self.stack[last].action = 1;
                if node.is_terminal {
                    return Some(self.key_buf.clone());
                }
                continue;
            }

            if let Some(&(ch, child)) = node.children.get(action - 1) {
                // Advance parent so next time we visit the next child
                self.stack[last].action += 1;
                self.key_buf.push(ch);
                self.stack.push(Frame::enter(child));
            } else {
                // Done with this node. The starting frame's prefix is never popped.
                self.stack.pop();
                if !self.stack.is_empty() {
                    self.key_buf.pop();
                }
            }
        }
    }
}

impl FusedIterator for PrefixIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_iter_yields_preorder() {
        let index: PrefixIndex = ["banana", "app", "apple", "band"].into_iter().collect();

        let all: Vec<String> = index.iter().collect();
        assert_eq!(all, vec!["app", "apple", "banana", "band"]);

        let ban: Vec<String> = index.prefix_iter("ban").collect();
        assert_eq!(ban, vec!["banana", "band"]);
    }

    #[test]
    fn test_prefix_iter_missing_prefix_is_empty() {
        let index: PrefixIndex = ["app"].into_iter().collect();
        assert_eq!(index.prefix_iter("b").next(), None);
        assert_eq!(index.prefix_iter("apps").next(), None);
    }

    #[test]
    fn test_prefix_iter_is_fused_after_exhaustion() {
        let index: PrefixIndex = ["a", "b"].into_iter().collect();
        let mut iter = index.iter();
        assert_eq!(iter.next().as_deref(), Some("a"));
        assert_eq!(iter.next().as_deref(), Some("b"));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_prefix_iter_via_into_iterator() {
        let index: PrefixIndex = ["x", "xy"].into_iter().collect();
        let mut seen = Vec::new();
        for word in &index {
            seen.push(word);
        }
        assert_eq!(seen, vec!["x", "xy"]);
    }
}
