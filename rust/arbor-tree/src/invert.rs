use arbor_storage::NodeStore;

use crate::{ArborTreeError, Tree};

impl<Store, Clock> Tree<Store, Clock>
where
    Store: NodeStore,
    Clock: arbor_common::Clock,
{
    /// Mirrors the tree by swapping the left and right links of every
    /// non-leaf node.
    ///
    /// The result is generally not a valid search tree; searches that follow
    /// the ordering ([`Tree::find`], [`Tree::delete`]) may miss values until
    /// the tree is inverted back.
    pub fn invert(&mut self) -> Result<(), ArborTreeError> {
        let mut pending = Vec::new();
        if !self.is_empty() {
            pending.push(self.root);
        }

        let mut swapped = 0usize;
        while let Some(address) = pending.pop() {
            let mut node = self.node(&address)?;
            if node.is_leaf() {
                continue;
            }

            node.mirror();
            self.store.put(address, node)?;
            swapped += 1;

            pending.extend([node.left, node.right].into_iter().filter(|a| !a.is_empty()));
        }

        tracing::debug!(swapped, "Inverted tree");
        Ok(())
    }
}
