//! Debug-only invariant assertion helpers.
//!
//! The trie and the relation graph use these to keep their structural
//! invariants explicit while release builds remain unaffected.

/// Debug-asserts a structural invariant with a message.
#[inline(always)]
pub(crate) fn invariant_assert(condition: bool, message: &str) {
    debug_assert!(condition, "Structural invariant violated: {}", message);
}

/// Debug-asserts that `slot` appears in `list`.
///
/// Used for the symmetry check of undirected adjacency lists.
#[inline(always)]
pub(crate) fn invariant_contains(list: &[usize], slot: usize, message: &str) {
    debug_assert!(
        list.contains(&slot),
        "Structural invariant violated: {} (slot {} missing)",
        message,
        slot
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant_assert_holds() {
        invariant_assert(true, "always holds");
        invariant_contains(&[1, 2, 3], 2, "present");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Structural invariant violated")]
    fn test_invariant_assert_fires_in_debug() {
        invariant_assert(false, "never holds");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "slot 9 missing")]
    fn test_invariant_contains_fires_in_debug() {
        invariant_contains(&[1, 2, 3], 9, "absent");
    }
}
