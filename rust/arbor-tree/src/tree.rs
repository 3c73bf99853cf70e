use arbor_common::{NodeAddress, SequenceClock};
use arbor_storage::{Node, NodeStore};

use crate::ArborTreeError;

/// A binary search tree over a [`NodeStore`].
///
/// The tree owns its store, the address of its root node and the [`Clock`]
/// that supplies context tokens for new node addresses. It is empty exactly
/// when its root address is [`NodeAddress::EMPTY`]; the record read at the root
/// is then [`Node::SENTINEL`].
///
/// Every node record reachable from the root is live, and every record the
/// tree has written but no longer links to has been cleared from the store.
///
/// Operations are synchronous and assume a single caller: mutations take
/// `&mut self`, queries take `&self`.
///
/// [`Clock`]: arbor_common::Clock
#[derive(Debug)]
pub struct Tree<Store, Clock = SequenceClock>
where
    Store: NodeStore,
    Clock: arbor_common::Clock,
{
    pub(crate) store: Store,
    pub(crate) root: NodeAddress,
    pub(crate) clock: Clock,
}

impl<Store> Tree<Store, SequenceClock>
where
    Store: NodeStore,
{
    /// Creates an empty tree over `store`, addressing nodes with a fresh
    /// [`SequenceClock`].
    pub fn new(store: Store) -> Self {
        Self::with_clock(store, SequenceClock::default())
    }
}

impl<Store, Clock> Tree<Store, Clock>
where
    Store: NodeStore,
    Clock: arbor_common::Clock,
{
    /// Creates an empty tree over `store` using the given clock.
    pub fn with_clock(store: Store, clock: Clock) -> Self {
        Self::from_root(store, NodeAddress::EMPTY, clock)
    }

    /// Reopens a tree rooted at `root` over records already in `store`.
    ///
    /// The clock must not replay context tokens that the nodes already in the
    /// store were addressed with; resuming the tree's own clock satisfies this.
    pub fn from_root(store: Store, root: NodeAddress, clock: Clock) -> Self {
        Self { store, root, clock }
    }

    /// The address of the root node, or [`NodeAddress::EMPTY`].
    pub fn root(&self) -> &NodeAddress {
        &self.root
    }

    /// The clock used to address new nodes.
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// True if the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// The store this tree operates through.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Gives the store back, along with the root address needed to reopen the
    /// tree later.
    pub fn into_store(self) -> (Store, NodeAddress) {
        (self.store, self.root)
    }

    /// The root node record.
    pub fn get_root(&self) -> Result<Node, ArborTreeError> {
        if self.is_empty() {
            return Err(ArborTreeError::TreeIsEmpty);
        }
        self.node(&self.root)
    }

    pub(crate) fn node(&self, address: &NodeAddress) -> Result<Node, ArborTreeError> {
        Ok(self.store.get(address)?)
    }

    pub(crate) fn ensure_not_empty(&self) -> Result<(), ArborTreeError> {
        if self.is_empty() {
            Err(ArborTreeError::TreeIsEmpty)
        } else {
            Ok(())
        }
    }
}
