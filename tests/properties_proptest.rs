use keygraph::{PrefixIndex, RelationGraph};
use petgraph::graphmap::UnGraphMap;
use petgraph::visit::Bfs;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashSet};

#[derive(Debug, Clone)]
enum Operation {
    Insert(String),
    Search(String),
}

fn small_word() -> impl Strategy<Value = String> {
    // Narrow alphabet so prefixes overlap heavily.
    "[abé]{0,6}"
}

proptest! {
    #[test]
    fn test_prefix_index_matches_btree_set(ops in proptest::collection::vec(
        prop_oneof![
            small_word().prop_map(Operation::Insert),
            small_word().prop_map(Operation::Search),
        ],
        1..100
    )) {
        let mut model = BTreeSet::new();
        let mut index = PrefixIndex::new();

        for op in ops {
            match op {
                Operation::Insert(word) => {
                    let model_res = model.insert(word.clone());
                    let index_res = index.insert(&word);
                    prop_assert_eq!(model_res, index_res, "Insert result mismatch for {:?}", word);
                }
                Operation::Search(prefix) => {
                    let expected: Vec<String> = model
                        .iter()
                        .filter(|w| w.starts_with(prefix.as_str()))
                        .cloned()
                        .collect();
                    prop_assert_eq!(index.search_prefix(&prefix), expected, "Search mismatch for {:?}", prefix);
                }
            }
        }

        // Final consistency check
        prop_assert_eq!(index.len(), model.len());
        let all: Vec<String> = index.search_prefix("");
        let expected: Vec<String> = model.iter().cloned().collect();
        prop_assert_eq!(all, expected);
        for word in &model {
            prop_assert!(index.contains(word));
            prop_assert!(index.search_prefix(word).contains(word));
        }
    }

    #[test]
    fn test_absent_prefix_is_empty(words in proptest::collection::vec("[ab]{1,5}", 0..20)) {
        let index: PrefixIndex = words.iter().collect();
        // 'z' never appears in the alphabet above.
        prop_assert!(index.search_prefix("z").is_empty());
        prop_assert!(index.search_prefix("az").is_empty());
    }

    #[test]
    fn test_bfs_matches_petgraph(
        edges in proptest::collection::vec((0u8..24, 0u8..24), 0..60),
        start in 0u8..24,
    ) {
        let graph: RelationGraph<u8> = edges.iter().copied().collect();
        let reference: UnGraphMap<u8, ()> = UnGraphMap::from_edges(edges.iter().copied());

        let order = graph.bfs(&start);
        prop_assert_eq!(order.first(), Some(&start));

        let unique: HashSet<u8> = order.iter().copied().collect();
        prop_assert_eq!(unique.len(), order.len(), "bfs repeated a node: {:?}", order);

        if reference.contains_node(start) {
            let mut bfs = Bfs::new(&reference, start);
            let mut expected = Vec::new();
            while let Some(n) = bfs.next(&reference) {
                expected.push(n);
            }
            prop_assert_eq!(order, expected);
        } else {
            prop_assert_eq!(order, vec![start]);
        }
    }

    #[test]
    fn test_add_edge_is_symmetric(edges in proptest::collection::vec((0u8..16, 0u8..16), 1..40)) {
        let graph: RelationGraph<u8> = edges.iter().copied().collect();

        for &(a, b) in &edges {
            prop_assert!(graph.bfs(&a).contains(&b));
            prop_assert!(graph.bfs(&b).contains(&a));
            prop_assert!(graph.neighbors(&a).any(|&n| n == b));
            prop_assert!(graph.neighbors(&b).any(|&n| n == a));
        }
        prop_assert_eq!(graph.edge_count(), edges.len());
    }
}
