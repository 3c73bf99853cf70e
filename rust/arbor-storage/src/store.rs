use arbor_common::NodeAddress;

use crate::{ArborStorageError, Node, StorageBackend};

/// The mapping from [`NodeAddress`] to [`Node`] record that a tree operates
/// through.
///
/// Reading an address that holds nothing yields [`Node::SENTINEL`]. Errors are
/// reserved for failures of the underlying substrate.
pub trait NodeStore {
    /// Read the record at `address`, or [`Node::SENTINEL`] if there is none.
    fn get(&self, address: &NodeAddress) -> Result<Node, ArborStorageError>;
    /// True if a record has been written at `address` and not cleared since.
    ///
    /// Unlike comparing [`NodeStore::get`] against [`Node::SENTINEL`], this
    /// tells a live leaf holding `0` apart from an empty slot.
    fn contains(&self, address: &NodeAddress) -> Result<bool, ArborStorageError>;
    /// Write `node` at `address`.
    fn put(&mut self, address: NodeAddress, node: Node) -> Result<(), ArborStorageError>;
    /// Reset `address` so that it reads back as [`Node::SENTINEL`].
    fn clear(&mut self, address: &NodeAddress) -> Result<(), ArborStorageError>;
}

impl<Backend> NodeStore for Backend
where
    Backend: StorageBackend<Key = NodeAddress, Value = Node>,
{
    fn get(&self, address: &NodeAddress) -> Result<Node, ArborStorageError> {
        Ok(StorageBackend::get(self, address)
            .map_err(Into::<ArborStorageError>::into)?
            .unwrap_or(Node::SENTINEL))
    }

    fn contains(&self, address: &NodeAddress) -> Result<bool, ArborStorageError> {
        Ok(StorageBackend::get(self, address)
            .map_err(Into::<ArborStorageError>::into)?
            .is_some())
    }

    fn put(&mut self, address: NodeAddress, node: Node) -> Result<(), ArborStorageError> {
        debug_assert!(!address.is_empty(), "the empty address never holds a node");
        self.set(address, node).map_err(Into::<ArborStorageError>::into)
    }

    fn clear(&mut self, address: &NodeAddress) -> Result<(), ArborStorageError> {
        self.unset(address).map_err(Into::<ArborStorageError>::into)
    }
}

/// A universal envelope for compatible combinations of [Encoder](crate::Encoder) and a
/// byte-valued [StorageBackend]. Node records are encoded on the way in and
/// decoded on the way out.
#[derive(Clone, Debug)]
pub struct Storage<Encoder, Backend>
where
    Encoder: crate::Encoder,
    Backend: StorageBackend,
{
    /// The [Encoder](crate::Encoder) used by the [Storage]
    pub encoder: Encoder,
    /// The [StorageBackend] used by the [Storage]
    pub backend: Backend,
}

impl<Encoder, Backend> NodeStore for Storage<Encoder, Backend>
where
    Encoder: crate::Encoder,
    Backend: StorageBackend<Key = NodeAddress, Value = Vec<u8>>,
{
    fn get(&self, address: &NodeAddress) -> Result<Node, ArborStorageError> {
        let Some(bytes) = StorageBackend::get(&self.backend, address)
            .map_err(Into::<ArborStorageError>::into)?
        else {
            return Ok(Node::SENTINEL);
        };

        self.encoder
            .decode::<Node>(&bytes)
            .map_err(Into::<ArborStorageError>::into)
    }

    fn contains(&self, address: &NodeAddress) -> Result<bool, ArborStorageError> {
        Ok(StorageBackend::get(&self.backend, address)
            .map_err(Into::<ArborStorageError>::into)?
            .is_some())
    }

    fn put(&mut self, address: NodeAddress, node: Node) -> Result<(), ArborStorageError> {
        debug_assert!(!address.is_empty(), "the empty address never holds a node");
        let bytes = self
            .encoder
            .encode(&node)
            .map_err(Into::<ArborStorageError>::into)?;
        self.backend
            .set(address, bytes)
            .map_err(Into::<ArborStorageError>::into)
    }

    fn clear(&mut self, address: &NodeAddress) -> Result<(), ArborStorageError> {
        self.backend.unset(address).map_err(Into::<ArborStorageError>::into)
    }
}
