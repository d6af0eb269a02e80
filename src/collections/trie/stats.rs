//! Trie size statistics.

use serde::{Deserialize, Serialize};

/// Size figures for a [`PrefixIndex`](super::PrefixIndex).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrefixIndexStats {
    /// Distinct stored strings.
    pub word_count: usize,
    /// Trie nodes, root included.
    pub node_count: usize,
    /// `word_count / node_count`; higher means more prefix sharing.
    pub memory_efficiency: f64,
}

impl PrefixIndexStats {
    pub(crate) fn new(word_count: usize, node_count: usize) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let memory_efficiency = if word_count == 0 || node_count == 0 {
            0.0
        } else {
            word_count as f64 / node_count as f64
        };

        Self {
            word_count,
            node_count,
            memory_efficiency,
        }
    }
}
