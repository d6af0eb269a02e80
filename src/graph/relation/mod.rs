//! A dynamic undirected relation graph keyed by arbitrary node identities.
//!
//! Identities are interned into dense `usize` slots the first time an edge
//! references them:
//! - `slots: HashMap<N, usize>` maps identity to slot
//! - `labels: Vec<N>` maps slot back to identity
//! - `adjacency: Vec<Vec<usize>>` holds one neighbor list per slot
//!
//! Traversals then iterate contiguous vectors and a dense visited set rather
//! than hashing every neighbor.

pub mod stats;
pub mod traversal;

use std::collections::HashMap;
use std::hash::Hash;

use crate::invariant::{invariant_assert, invariant_contains};

pub use stats::GraphStats;
pub use traversal::Bfs;

/// An undirected adjacency-list graph whose nodes are identified by `N`.
///
/// Nodes come into existence when an edge first references them; there is
/// no explicit node creation or removal. Neighbor lists keep every
/// insertion: repeated `add_edge` calls on the same pair store parallel
/// entries, and a self-loop stores the node twice in its own list.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_edge` | \(O(1)\) amortized | Two hash lookups, two pushes |
/// | `neighbors` | \(O(1)\) + iteration | |
/// | `bfs` | \(O(V + E)\) over the reachable component | |
#[derive(Debug, Clone)]
pub struct RelationGraph<N> {
    slots: HashMap<N, usize>,
    labels: Vec<N>,
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl<N> RelationGraph<N> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
            labels: Vec::new(),
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    /// Returns the number of distinct nodes.
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Returns the number of `add_edge` calls recorded, parallel edges and
    /// self-loops included.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns true if no edge has been added.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterates node identities in first-reference order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.labels.iter()
    }

    /// Drops every node and edge.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.labels.clear();
        self.adjacency.clear();
        self.edge_count = 0;
    }

    /// Summary figures for reporting.
    pub fn stats(&self) -> GraphStats {
        GraphStats::new(self.node_count(), self.edge_count)
    }

    #[inline]
    pub(crate) fn label(&self, slot: usize) -> &N {
        &self.labels[slot]
    }

    #[inline]
    pub(crate) fn neighbor_slots(&self, slot: usize) -> &[usize] {
        &self.adjacency[slot]
    }
}

impl<N> RelationGraph<N>
where
    N: Eq + Hash + Clone,
{
    /// Creates an empty graph with room for `nodes` distinct identities.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            slots: HashMap::with_capacity(nodes),
            labels: Vec::with_capacity(nodes),
            adjacency: Vec::with_capacity(nodes),
            edge_count: 0,
        }
    }

    /// Adds the undirected edge `a — b`.
    ///
    /// Both endpoints are created if new; `b` is appended to `a`'s neighbor
    /// list and `a` to `b`'s.
    pub fn add_edge(&mut self, a: N, b: N) {
        let a = self.intern(a);
        let b = self.intern(b);

        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
        self.edge_count += 1;

        invariant_contains(&self.adjacency[a], b, "undirected adjacency is symmetric");
        invariant_contains(&self.adjacency[b], a, "undirected adjacency is symmetric");
        trace_event!(from_slot = a, to_slot = b, edges = self.edge_count, "relation graph add_edge");
    }

    /// Returns true if some edge references `node`.
    pub fn contains_node(&self, node: &N) -> bool {
        self.slots.contains_key(node)
    }

    /// Iterates the neighbors of `node` in insertion order, duplicates
    /// included. An unknown node has no neighbors.
    pub fn neighbors<'a>(&'a self, node: &N) -> impl Iterator<Item = &'a N> + 'a {
        let list: &[usize] = match self.slots.get(node) {
            Some(&slot) => &self.adjacency[slot],
            None => &[],
        };
        list.iter().map(move |&slot| &self.labels[slot])
    }

    /// Length of `node`'s neighbor list; 0 for an unknown node.
    pub fn degree(&self, node: &N) -> usize {
        self.slots
            .get(node)
            .map_or(0, |&slot| self.adjacency[slot].len())
    }

    /// Breadth-first traversal from `start`, returning nodes in visitation
    /// order.
    ///
    /// The result begins with `start` and holds each reachable node exactly
    /// once. An unknown `start` yields `[start]`.
    pub fn bfs(&self, start: &N) -> Vec<N> {
        let order: Vec<N> = self.bfs_iter(start).cloned().collect();
        trace_event!(visited = order.len(), "relation graph bfs");
        order
    }

    /// Lazy form of [`bfs`](Self::bfs).
    pub fn bfs_iter<'a>(&'a self, start: &'a N) -> Bfs<'a, N> {
        match self.slots.get(start) {
            Some(&slot) => Bfs::new(self, slot),
            None => Bfs::detached(self, start),
        }
    }

    /// Returns true if `b` is reachable from `a`.
    ///
    /// Every node reaches itself, known or not.
    pub fn connected(&self, a: &N, b: &N) -> bool {
        self.bfs_iter(a).any(|n| n == b)
    }

    /// Returns the slot for `node`, allocating an empty neighbor list on
    /// first reference.
    fn intern(&mut self, node: N) -> usize {
        if let Some(&slot) = self.slots.get(&node) {
            return slot;
        }

        let slot = self.labels.len();
        self.slots.insert(node.clone(), slot);
        self.labels.push(node);
        self.adjacency.push(Vec::new());

        invariant_assert(
            self.labels.len() == self.adjacency.len() && self.labels.len() == self.slots.len(),
            "slot tables stay in lockstep",
        );
        slot
    }
}

impl<N> Default for RelationGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Extend<(N, N)> for RelationGraph<N>
where
    N: Eq + Hash + Clone,
{
    fn extend<I: IntoIterator<Item = (N, N)>>(&mut self, iter: I) {
        for (a, b) in iter {
            self.add_edge(a, b);
        }
    }
}

impl<N> FromIterator<(N, N)> for RelationGraph<N>
where
    N: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = (N, N)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> RelationGraph<&'static str> {
        let mut graph = RelationGraph::new();
        graph.add_edge("Tom Hanks", "Movie A");
        graph.add_edge("Movie A", "Meg Ryan");
        graph.add_edge("Meg Ryan", "Movie B");
        graph
    }

    #[test]
    fn test_relation_graph_chain_bfs() {
        let graph = chain();
        assert_eq!(
            graph.bfs(&"Tom Hanks"),
            vec!["Tom Hanks", "Movie A", "Meg Ryan", "Movie B"]
        );
        assert_eq!(
            graph.bfs(&"Movie B"),
            vec!["Movie B", "Meg Ryan", "Movie A", "Tom Hanks"]
        );
    }

    #[test]
    fn test_relation_graph_unknown_start() {
        let graph = chain();
        assert_eq!(graph.bfs(&"NoSuchNode"), vec!["NoSuchNode"]);
        assert!(!graph.contains_node(&"NoSuchNode"));

        let empty: RelationGraph<String> = RelationGraph::new();
        assert_eq!(empty.bfs(&"solo".to_string()), vec!["solo".to_string()]);
    }

    #[test]
    fn test_relation_graph_symmetry() {
        let graph = chain();
        for node in graph.nodes() {
            for nbr in graph.neighbors(node) {
                assert!(graph.neighbors(nbr).any(|n| n == node), "{nbr} must list {node}");
            }
        }
    }

    #[test]
    fn test_relation_graph_parallel_edges_kept() {
        let mut graph = RelationGraph::new();
        graph.add_edge(1, 2);
        graph.add_edge(1, 2);
        graph.add_edge(2, 1);

        assert_eq!(graph.neighbors(&1).copied().collect::<Vec<_>>(), vec![2, 2, 2]);
        assert_eq!(graph.degree(&2), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.bfs(&1), vec![1, 2]);
    }

    #[test]
    fn test_relation_graph_self_loop() {
        let mut graph = RelationGraph::new();
        graph.add_edge('x', 'x');

        assert_eq!(graph.neighbors(&'x').copied().collect::<Vec<_>>(), vec!['x', 'x']);
        assert_eq!(graph.degree(&'x'), 2);
        assert_eq!(graph.bfs(&'x'), vec!['x']);
    }

    #[test]
    fn test_relation_graph_bfs_is_level_order() {
        //      a
        //     / \
        //    b   c
        //    |   |
        //    d   e
        let graph: RelationGraph<char> =
            [('a', 'b'), ('a', 'c'), ('b', 'd'), ('c', 'e')].into_iter().collect();
        assert_eq!(graph.bfs(&'a'), vec!['a', 'b', 'c', 'd', 'e']);
    }

    #[test]
    fn test_relation_graph_components_are_separate() {
        let graph: RelationGraph<u32> = [(1, 2), (3, 4)].into_iter().collect();

        assert!(graph.connected(&1, &2));
        assert!(!graph.connected(&1, &3));
        assert!(graph.connected(&9, &9));
        assert_eq!(graph.bfs(&3), vec![3, 4]);
    }

    #[test]
    fn test_relation_graph_clear() {
        let mut graph = chain();
        graph.clear();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.bfs(&"Tom Hanks"), vec!["Tom Hanks"]);
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn test_add_edge_event_names_slot_fields() {
        use std::fmt::Debug;
        use std::sync::{Arc, Mutex};
        use tracing::field::{Field, Visit};
        use tracing::span::{Attributes, Id, Record};
        use tracing::{Event, Metadata, Subscriber};

        struct FieldNames(Vec<String>);

        impl Visit for FieldNames {
            fn record_debug(&mut self, field: &Field, _value: &dyn Debug) {
                self.0.push(field.name().to_string());
            }
        }

        /// Records the field names of every event it sees.
        struct Recorder(Arc<Mutex<Vec<Vec<String>>>>);

        impl Subscriber for Recorder {
            fn enabled(&self, _: &Metadata<'_>) -> bool {
                true
            }
            fn new_span(&self, _: &Attributes<'_>) -> Id {
                Id::from_u64(1)
            }
            fn record(&self, _: &Id, _: &Record<'_>) {}
            fn record_follows_from(&self, _: &Id, _: &Id) {}
            fn event(&self, event: &Event<'_>) {
                let mut names = FieldNames(Vec::new());
                event.record(&mut names);
                self.0.lock().unwrap().push(names.0);
            }
            fn enter(&self, _: &Id) {}
            fn exit(&self, _: &Id) {}
        }

        let events = Arc::new(Mutex::new(Vec::new()));
        tracing::subscriber::with_default(Recorder(Arc::clone(&events)), || {
            let mut graph = RelationGraph::new();
            graph.add_edge("Tom Hanks", "Movie A");
        });

        let events = events.lock().unwrap();
        let add_edge = events
            .iter()
            .find(|names| names.iter().any(|n| n == "from_slot"))
            .expect("add_edge emits an event");
        assert!(add_edge.iter().any(|n| n == "to_slot"));
        assert!(!add_edge.iter().any(|n| n == "from" || n == "to"));
    }
}
