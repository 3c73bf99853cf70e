use std::{collections::HashMap, sync::Arc};

use parking_lot::RwLock;

use crate::ArborStorageError;

use super::StorageBackend;

/// A trivial implementation of [StorageBackend] - backed by a [HashMap] - where
/// all values are kept in memory and never persisted.
///
/// Clones share the same entries.
#[derive(Clone, Debug)]
pub struct MemoryStorageBackend<Key, Value>
where
    Key: Eq + std::hash::Hash,
    Value: Clone,
{
    entries: Arc<RwLock<HashMap<Key, Value>>>,
}

impl<Key, Value> Default for MemoryStorageBackend<Key, Value>
where
    Key: Eq + std::hash::Hash,
    Value: Clone,
{
    fn default() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<Key, Value> MemoryStorageBackend<Key, Value>
where
    Key: Eq + std::hash::Hash,
    Value: Clone,
{
    /// The number of entries currently held
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// True if nothing is currently held
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl<Key, Value> StorageBackend for MemoryStorageBackend<Key, Value>
where
    Key: Clone + Eq + std::hash::Hash,
    Value: Clone,
{
    type Key = Key;
    type Value = Value;
    type Error = ArborStorageError;

    fn set(&mut self, key: Self::Key, value: Self::Value) -> Result<(), Self::Error> {
        self.entries.write().insert(key, value);
        Ok(())
    }

    fn get(&self, key: &Self::Key) -> Result<Option<Self::Value>, Self::Error> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn unset(&mut self, key: &Self::Key) -> Result<(), Self::Error> {
        self.entries.write().remove(key);
        Ok(())
    }
}
