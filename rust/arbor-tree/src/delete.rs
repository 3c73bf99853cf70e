use arbor_common::NodeAddress;
use arbor_storage::{Direction, Node, NodeStore};

use crate::{ArborTreeError, Tree};

/// A node found by a parent-tracking descent.
#[derive(Debug)]
pub(crate) struct Located {
    pub parent: NodeAddress,
    pub address: NodeAddress,
    pub node: Node,
}

impl<Store, Clock> Tree<Store, Clock>
where
    Store: NodeStore,
    Clock: arbor_common::Clock,
{
    /// Removes one node holding `value`.
    ///
    /// A node with two children takes the smallest value of its right subtree,
    /// and the node that held that value is removed in its place. A node with
    /// one child is replaced by that child in its parent's link. A leaf is
    /// unlinked from its parent. The removed record is cleared from the store.
    ///
    /// The value is located before anything is written, so a failed deletion
    /// leaves the tree untouched.
    pub fn delete(&mut self, value: u64) -> Result<(), ArborTreeError> {
        self.ensure_not_empty()?;
        self.remove_from(self.root, NodeAddress::EMPTY, value)
    }

    /// Descends from `start` (whose parent is `parent`) to the first node
    /// holding `value`.
    pub(crate) fn locate(
        &self,
        start: NodeAddress,
        parent: NodeAddress,
        value: u64,
    ) -> Result<Located, ArborTreeError> {
        let mut parent = parent;
        let mut address = start;

        loop {
            let node = self.node(&address)?;
            if node.value == value {
                return Ok(Located {
                    parent,
                    address,
                    node,
                });
            }

            let next = node.child(Direction::of(value, node.value));
            if next.is_empty() {
                return Err(ArborTreeError::ValueNotInTree(value));
            }

            parent = address;
            address = next;
        }
    }

    fn remove_from(
        &mut self,
        start: NodeAddress,
        parent: NodeAddress,
        value: u64,
    ) -> Result<(), ArborTreeError> {
        let Located {
            parent,
            address,
            node,
        } = self.locate(start, parent, value)?;

        match (node.left.is_empty(), node.right.is_empty()) {
            (false, false) => {
                let successor = self.leftmost(node.right)?.value;
                self.store.put(
                    address,
                    Node {
                        value: successor,
                        ..node
                    },
                )?;

                tracing::debug!(value, successor, %address, "Promoted in-order successor");
                // The successor has no left child, so this lands in a case below
                self.remove_from(node.right, address, successor)
            }
            (true, true) => {
                self.relink(parent, address, NodeAddress::EMPTY)?;
                self.store.clear(&address)?;

                tracing::debug!(value, %address, "Removed leaf");
                Ok(())
            }
            (left_is_empty, _) => {
                let child = if left_is_empty { node.right } else { node.left };
                self.relink(parent, address, child)?;
                self.store.clear(&address)?;

                tracing::debug!(value, %address, %child, "Spliced out node with one child");
                Ok(())
            }
        }
    }

    /// Rewrites whichever link of `parent` points at `from` to point at `to`.
    /// An empty `parent` stands for the tree itself, whose root is rewritten.
    fn relink(
        &mut self,
        parent: NodeAddress,
        from: NodeAddress,
        to: NodeAddress,
    ) -> Result<(), ArborTreeError> {
        if parent.is_empty() {
            tracing::trace!(%from, %to, "Relinking root");
            self.root = to;
            return Ok(());
        }

        let mut record = self.node(&parent)?;
        let Some(direction) = record.slot_of(&from) else {
            return Err(ArborTreeError::UnexpectedTreeShape(format!(
                "{parent} does not link to {from}"
            )));
        };

        tracing::trace!(%parent, ?direction, %from, %to, "Relinking child");
        record.set_child(direction, to);
        self.store.put(parent, record)?;
        Ok(())
    }

    /// The node reached by following left links from `address`.
    pub(crate) fn leftmost(&self, address: NodeAddress) -> Result<Node, ArborTreeError> {
        self.extreme(address, Direction::Left)
    }

    /// The node reached by following right links from `address`.
    pub(crate) fn rightmost(&self, address: NodeAddress) -> Result<Node, ArborTreeError> {
        self.extreme(address, Direction::Right)
    }

    fn extreme(&self, address: NodeAddress, direction: Direction) -> Result<Node, ArborTreeError> {
        let mut node = self.node(&address)?;
        loop {
            let next = node.child(direction);
            if next.is_empty() {
                return Ok(node);
            }
            node = self.node(&next)?;
        }
    }
}
