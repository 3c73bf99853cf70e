use arbor_common::NodeAddress;
use arbor_storage::NodeStore;

use crate::{ArborTreeError, Tree};

impl<Store, Clock> Tree<Store, Clock>
where
    Store: NodeStore,
    Clock: arbor_common::Clock,
{
    /// Values in node, left, right order.
    pub fn preorder(&self) -> Result<Vec<u64>, ArborTreeError> {
        let mut values = Vec::new();
        let mut pending = self.root_stack();

        while let Some(address) = pending.pop() {
            let node = self.node(&address)?;
            values.push(node.value);
            push_present(&mut pending, node.right);
            push_present(&mut pending, node.left);
        }

        Ok(values)
    }

    /// Values in left, node, right order. For a valid tree this is sorted.
    pub fn inorder(&self) -> Result<Vec<u64>, ArborTreeError> {
        let mut values = Vec::new();
        let mut ancestors = Vec::new();
        let mut current = self.root;

        loop {
            while !current.is_empty() {
                let node = self.node(&current)?;
                ancestors.push(node);
                current = node.left;
            }

            let Some(node) = ancestors.pop() else {
                break;
            };
            values.push(node.value);
            current = node.right;
        }

        Ok(values)
    }

    /// Values in left, right, node order.
    pub fn postorder(&self) -> Result<Vec<u64>, ArborTreeError> {
        // Node, right, left order reversed
        let mut values = Vec::new();
        let mut pending = self.root_stack();

        while let Some(address) = pending.pop() {
            let node = self.node(&address)?;
            values.push(node.value);
            push_present(&mut pending, node.left);
            push_present(&mut pending, node.right);
        }

        values.reverse();
        Ok(values)
    }

    fn root_stack(&self) -> Vec<NodeAddress> {
        let mut pending = Vec::new();
        push_present(&mut pending, self.root);
        pending
    }
}

fn push_present(pending: &mut Vec<NodeAddress>, address: NodeAddress) {
    if !address.is_empty() {
        pending.push(address);
    }
}
