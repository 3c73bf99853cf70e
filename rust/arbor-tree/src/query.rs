use arbor_common::NodeAddress;
use arbor_storage::{Node, NodeStore};

use crate::{ArborTreeError, Tree};

impl<Store, Clock> Tree<Store, Clock>
where
    Store: NodeStore,
    Clock: arbor_common::Clock,
{
    /// The first node holding `value` along the search path from the root.
    pub fn find(&self, value: u64) -> Result<Node, ArborTreeError> {
        self.ensure_not_empty()?;
        Ok(self.locate(self.root, NodeAddress::EMPTY, value)?.node)
    }

    /// True if some node on the search path holds `value`.
    pub fn contains(&self, value: u64) -> Result<bool, ArborTreeError> {
        match self.find(value) {
            Ok(_) => Ok(true),
            Err(ArborTreeError::TreeIsEmpty | ArborTreeError::ValueNotInTree(_)) => Ok(false),
            Err(error) => Err(error),
        }
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Result<u64, ArborTreeError> {
        self.ensure_not_empty()?;
        Ok(self.leftmost(self.root)?.value)
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Result<u64, ArborTreeError> {
        self.ensure_not_empty()?;
        Ok(self.rightmost(self.root)?.value)
    }

    /// The number of nodes reachable from the root; `0` for an empty tree.
    pub fn size(&self) -> Result<usize, ArborTreeError> {
        if self.is_empty() {
            return Ok(0);
        }

        let mut count = 0;
        let mut pending = vec![self.root];
        while let Some(address) = pending.pop() {
            let node = self.node(&address)?;
            count += 1;
            pending.extend([node.left, node.right].into_iter().filter(|a| !a.is_empty()));
        }

        Ok(count)
    }

    /// The number of edges on the longest root-to-leaf path. A lone root and
    /// an empty tree both have height `0`.
    pub fn height(&self) -> Result<usize, ArborTreeError> {
        if self.is_empty() {
            return Ok(0);
        }

        let mut tallest = 0;
        let mut pending = vec![(self.root, 0usize)];
        while let Some((address, depth)) = pending.pop() {
            let node = self.node(&address)?;
            tallest = tallest.max(depth);
            for child in [node.left, node.right] {
                if !child.is_empty() {
                    pending.push((child, depth + 1));
                }
            }
        }

        Ok(tallest)
    }

    /// The number of edges between the root and a node holding `value`.
    ///
    /// This searches the whole tree (the node itself, then its left subtree,
    /// then its right subtree) rather than following the search path, so it
    /// also answers for an inverted tree.
    pub fn depth(&self, value: u64) -> Result<usize, ArborTreeError> {
        if self.is_empty() {
            return Err(ArborTreeError::ValueNotInTree(value));
        }

        let mut pending = vec![(self.root, 0usize)];
        while let Some((address, depth)) = pending.pop() {
            let node = self.node(&address)?;
            if node.value == value {
                return Ok(depth);
            }
            // Right first so the left subtree is searched first
            for child in [node.right, node.left] {
                if !child.is_empty() {
                    pending.push((child, depth + 1));
                }
            }
        }

        Err(ArborTreeError::ValueNotInTree(value))
    }

    /// True if every node's left subtree holds only smaller values and its
    /// right subtree only equal or greater values. An empty tree is valid.
    pub fn is_valid_bst(&self) -> Result<bool, ArborTreeError> {
        if self.is_empty() {
            return Ok(true);
        }

        let mut pending = vec![Bounds {
            address: self.root,
            at_least: None,
            below: None,
        }];
        while let Some(bounds) = pending.pop() {
            let node = self.node(&bounds.address)?;
            if !bounds.admits(node.value) {
                return Ok(false);
            }

            if !node.left.is_empty() {
                pending.push(Bounds {
                    address: node.left,
                    below: Some(node.value),
                    ..bounds
                });
            }
            if !node.right.is_empty() {
                pending.push(Bounds {
                    address: node.right,
                    at_least: Some(node.value),
                    ..bounds
                });
            }
        }

        Ok(true)
    }
}

/// The range of values a subtree may hold, inherited from its ancestors: at
/// least the value of the nearest ancestor it hangs right of, and below the
/// value of the nearest ancestor it hangs left of.
#[derive(Clone, Copy)]
struct Bounds {
    address: NodeAddress,
    at_least: Option<u64>,
    below: Option<u64>,
}

impl Bounds {
    fn admits(&self, value: u64) -> bool {
        self.at_least.is_none_or(|floor| value >= floor)
            && self.below.is_none_or(|ceiling| value < ceiling)
    }
}

#[cfg(test)]
mod tests {
    use crate::ArborTreeError;
    use crate::tree::tests::{chain_of, full_tree, tree_of};
    use anyhow::Result;
    use arbor_common::NodeAddress;
    use arbor_storage::{Node, NodeStore};

    #[test]
    fn it_finds_values_along_the_search_path() -> Result<()> {
        let tree = full_tree()?;

        assert_eq!(tree.find(6)?.value, 6);
        assert!(tree.find(6)?.is_leaf());
        assert_eq!(tree.find(3)?.value, 3);
        assert!(matches!(tree.find(9), Err(ArborTreeError::ValueNotInTree(9))));
        assert!(tree.contains(4)?);
        assert!(!tree.contains(1)?);
        Ok(())
    }

    #[test]
    fn it_refuses_queries_on_an_empty_tree() -> Result<()> {
        let tree = tree_of(&[])?;

        assert!(matches!(tree.find(1), Err(ArborTreeError::TreeIsEmpty)));
        assert!(matches!(tree.min(), Err(ArborTreeError::TreeIsEmpty)));
        assert!(matches!(tree.max(), Err(ArborTreeError::TreeIsEmpty)));
        assert!(matches!(tree.depth(1), Err(ArborTreeError::ValueNotInTree(1))));
        assert!(!tree.contains(1)?);
        assert_eq!(tree.size()?, 0);
        assert_eq!(tree.height()?, 0);
        assert!(tree.is_valid_bst()?);
        Ok(())
    }

    #[test]
    fn it_reports_extremes() -> Result<()> {
        let tree = tree_of(&[5, 3, 7, 2, 4, 6, 8, 1, 9])?;

        assert_eq!(tree.min()?, 1);
        assert_eq!(tree.max()?, 9);
        Ok(())
    }

    #[test]
    fn it_measures_size_and_height() -> Result<()> {
        assert_eq!(tree_of(&[5])?.size()?, 1);
        assert_eq!(tree_of(&[5])?.height()?, 0);
        assert_eq!(tree_of(&[5, 3])?.height()?, 1);

        let tree = full_tree()?;
        assert_eq!(tree.size()?, 7);
        assert_eq!(tree.height()?, 2);

        let chain = tree_of(&[1, 2, 3, 4, 5])?;
        assert_eq!(chain.size()?, 5);
        assert_eq!(chain.height()?, 4);
        Ok(())
    }

    #[test]
    fn it_measures_depth() -> Result<()> {
        let tree = full_tree()?;

        assert_eq!(tree.depth(5)?, 0);
        assert_eq!(tree.depth(7)?, 1);
        assert_eq!(tree.depth(4)?, 2);
        assert!(matches!(tree.depth(10), Err(ArborTreeError::ValueNotInTree(10))));
        Ok(())
    }

    #[test]
    fn it_detects_broken_ordering() -> Result<()> {
        let mut tree = full_tree()?;
        assert!(tree.is_valid_bst()?);

        // Rewrite 4 (right child of 3) to 6: it is still above 3 but no
        // longer below the root
        let three = tree.get_root()?.left;
        let four = tree.node(&three)?.right;
        tree.store.put(four, Node::leaf(6))?;
        assert!(!tree.is_valid_bst()?);

        // A duplicate of a node in its right subtree is fine...
        tree.store.put(four, Node::leaf(3))?;
        assert!(tree.is_valid_bst()?);

        // ...but not in its left subtree
        let two = tree.node(&three)?.left;
        tree.store.put(two, Node::leaf(3))?;
        assert!(!tree.is_valid_bst()?);
        Ok(())
    }

    #[test]
    fn it_walks_a_long_ascending_chain() -> Result<()> {
        let tree = chain_of(0..50_000)?;

        assert_eq!(tree.height()?, 49_999);
        assert_eq!(tree.depth(49_999)?, 49_999);
        assert!(matches!(tree.depth(50_000), Err(ArborTreeError::ValueNotInTree(50_000))));
        assert!(tree.is_valid_bst()?);
        assert_eq!(tree.size()?, 50_000);
        Ok(())
    }

    #[test]
    fn it_walks_a_long_descending_chain() -> Result<()> {
        let mut tree = chain_of((0..50_000).rev())?;

        assert_eq!(tree.height()?, 49_999);
        assert_eq!(tree.depth(0)?, 49_999);
        assert!(tree.is_valid_bst()?);

        // Break the ordering at the bottom of the chain
        let bottom = tree.find(0)?;
        let address = tree.locate(tree.root, NodeAddress::EMPTY, 0)?.address;
        tree.store.put(address, Node { value: 50_000, ..bottom })?;
        assert!(!tree.is_valid_bst()?);
        Ok(())
    }
}
