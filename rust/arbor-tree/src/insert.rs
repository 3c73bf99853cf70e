use arbor_common::{NodeAddress, generate_address};
use arbor_storage::{Direction, Node, NodeStore};

use crate::{ArborTreeError, Tree};

impl<Store, Clock> Tree<Store, Clock>
where
    Store: NodeStore,
    Clock: arbor_common::Clock,
{
    /// Inserts `value` as a new leaf and returns the new node's address.
    ///
    /// Values smaller than a node descend left, all others descend right, so
    /// a duplicate lands in the right subtree of its equal. No rebalancing is
    /// performed.
    pub fn insert(&mut self, value: u64) -> Result<NodeAddress, ArborTreeError> {
        if self.is_empty() {
            let address = self.allocate(value, &NodeAddress::EMPTY)?;
            self.store.put(address, Node::leaf(value))?;
            self.root = address;

            tracing::debug!(value, %address, "Planted root");
            return Ok(address);
        }

        let mut current = self.root;
        loop {
            let mut node = self.node(&current)?;
            let direction = Direction::of(value, node.value);
            let child = node.child(direction);

            if child.is_empty() {
                let address = self.allocate(value, &current)?;
                self.store.put(address, Node::leaf(value))?;
                node.set_child(direction, address);
                self.store.put(current, node)?;

                tracing::debug!(value, %address, parent = %current, ?direction, "Inserted leaf");
                return Ok(address);
            }

            current = child;
        }
    }

    /// Generates an address for a new node under `parent` that no live record
    /// already occupies.
    fn allocate(&mut self, value: u64, parent: &NodeAddress) -> Result<NodeAddress, ArborTreeError> {
        loop {
            let context = self.clock.tick();
            let address = generate_address(value, parent, context);

            if !self.store.contains(&address)? {
                return Ok(address);
            }

            tracing::warn!(value, %address, context, "Generated address is taken; retrying");
        }
    }
}
