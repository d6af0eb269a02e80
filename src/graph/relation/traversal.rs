//! Breadth-first traversal over a [`RelationGraph`].

use core::iter::FusedIterator;
use std::collections::VecDeque;

use super::RelationGraph;

/// An iterator for Breadth-First Search (BFS).
///
/// Yields node identities in visitation order. The visited check happens
/// when a slot is popped, not when it is enqueued: every neighbor of a
/// visited node is pushed, so the frontier may briefly hold duplicates, but
/// each node is yielded at most once.
///
/// A start node the graph has never seen is yielded once and the traversal
/// ends.
pub struct Bfs<'a, N> {
    graph: &'a RelationGraph<N>,
    visited: Vec<bool>,
    queue: VecDeque<usize>,
    /// Start node absent from the graph, still to be yielded.
    detached: Option<&'a N>,
}

impl<'a, N> Bfs<'a, N> {
    /// Creates a BFS iterator starting from the node at `start`.
    pub(crate) fn new(graph: &'a RelationGraph<N>, start: usize) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(start);

        Self {
            graph,
            visited: vec![false; graph.node_count()],
            queue,
            detached: None,
        }
    }

    /// Creates a BFS iterator for a start node with no slot in the graph.
    pub(crate) fn detached(graph: &'a RelationGraph<N>, start: &'a N) -> Self {
        Self {
            graph,
            visited: Vec::new(),
            queue: VecDeque::new(),
            detached: Some(start),
        }
    }

    /// Number of entries currently waiting in the frontier.
    pub fn frontier_len(&self) -> usize {
        self.queue.len()
    }
}

impl<'a, N> Iterator for Bfs<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.detached.take() {
            return Some(start);
        }

        let graph = self.graph;
        while let Some(u) = self.queue.pop_front() {
            if self.visited[u] {
                continue;
            }
            self.visited[u] = true;
            self.queue.extend(graph.neighbor_slots(u));
            return Some(graph.label(u));
        }
        None
    }
}

impl<N> FusedIterator for Bfs<'_, N> {}
