//! Graph size statistics.

use serde::{Deserialize, Serialize};

/// Size and shape figures for a [`RelationGraph`](super::RelationGraph).
///
/// Parallel edges and self-loops count like any other edge, so `density`
/// can exceed 1.0 on multigraphs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphStats {
    /// Distinct nodes.
    pub total_nodes: usize,
    /// Recorded `add_edge` calls.
    pub total_edges: usize,
    /// `2E / V`, or 0.0 for an empty graph.
    pub average_degree: f64,
    /// `2E / (V (V - 1))`, or 0.0 below two nodes.
    pub density: f64,
}

impl GraphStats {
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn new(total_nodes: usize, total_edges: usize) -> Self {
        let v = total_nodes as f64;
        let e = total_edges as f64;

        let average_degree = if total_nodes == 0 { 0.0 } else { 2.0 * e / v };
        let density = if total_nodes < 2 { 0.0 } else { 2.0 * e / (v * (v - 1.0)) };

        Self {
            total_nodes,
            total_edges,
            average_degree,
            density,
        }
    }
}
