use anyhow::Result;
use arbor_common::NodeAddress;
use arbor_storage::{MemoryStorageBackend, Node};
use arbor_tree::{ArborTreeError, Tree};
use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

type MemoryTree = Tree<MemoryStorageBackend<NodeAddress, Node>>;

fn build(values: &[u64]) -> Result<MemoryTree, ArborTreeError> {
    let mut tree = Tree::new(MemoryStorageBackend::default());
    for value in values {
        tree.insert(*value)?;
    }
    Ok(tree)
}

fn values() -> impl Strategy<Value = Vec<u64>> {
    // A narrow range so that duplicates are common
    prop::collection::vec(0u64..64, 0..48)
}

proptest! {
    #[test]
    fn inorder_is_sorted_after_inserts(values in values()) {
        let tree = build(&values)?;

        let walked = tree.inorder()?;
        let mut sorted = values.clone();
        sorted.sort_unstable();

        prop_assert_eq!(walked, sorted);
        prop_assert!(tree.is_valid_bst()?);
    }

    #[test]
    fn every_walk_visits_each_node_once(values in values()) {
        let tree = build(&values)?;
        let mut sorted = values.clone();
        sorted.sort_unstable();

        for mut walked in [tree.preorder()?, tree.postorder()?] {
            walked.sort_unstable();
            prop_assert_eq!(&walked, &sorted);
        }
        prop_assert_eq!(tree.size()?, values.len());
    }

    #[test]
    fn deletes_keep_the_tree_valid_and_sized(values in values(), seed in any::<u64>()) {
        let mut tree = build(&values)?;
        let mut doomed = values.clone();
        doomed.shuffle(&mut StdRng::seed_from_u64(seed));
        doomed.truncate(values.len() / 2);

        let mut remaining = values.clone();
        for value in doomed {
            tree.delete(value)?;
            let position = remaining.iter().position(|v| *v == value).unwrap();
            remaining.swap_remove(position);

            prop_assert!(tree.is_valid_bst()?);
            prop_assert_eq!(tree.size()?, remaining.len());
        }

        remaining.sort_unstable();
        prop_assert_eq!(tree.inorder()?, remaining);
    }

    #[test]
    fn deleting_an_absent_value_changes_nothing(values in values(), absent in 64u64..128) {
        prop_assume!(!values.is_empty());
        let mut tree = build(&values)?;
        let before = tree.serialize()?;

        let result = tree.delete(absent);

        prop_assert!(matches!(result, Err(ArborTreeError::ValueNotInTree(v)) if v == absent));
        prop_assert_eq!(tree.serialize()?, before);
        prop_assert_eq!(tree.size()?, values.len());
    }

    #[test]
    fn inverting_twice_restores_the_shape(values in values()) {
        let mut tree = build(&values)?;
        let original = tree.serialize()?;
        let preorder = tree.preorder()?;

        tree.invert()?;
        let mut mirrored = tree.inorder()?;
        mirrored.reverse();
        let mut sorted = values.clone();
        sorted.sort_unstable();
        prop_assert_eq!(mirrored, sorted);

        tree.invert()?;
        prop_assert_eq!(tree.serialize()?, original);
        prop_assert_eq!(tree.preorder()?, preorder);
    }

    #[test]
    fn depth_never_exceeds_height(values in values()) {
        prop_assume!(!values.is_empty());
        let tree = build(&values)?;
        let height = tree.height()?;

        for value in &values {
            prop_assert!(tree.depth(*value)? <= height);
        }
        prop_assert_eq!(tree.min()?, *values.iter().min().unwrap());
        prop_assert_eq!(tree.max()?, *values.iter().max().unwrap());
    }
}
