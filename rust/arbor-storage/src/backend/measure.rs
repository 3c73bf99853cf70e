use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use super::StorageBackend;

/// A [MeasuredStorageBackend] acts as a proxy over a [StorageBackend]
/// implementation that measures reads, writes and removals.
#[derive(Clone, Debug)]
pub struct MeasuredStorageBackend<Backend>
where
    Backend: StorageBackend,
{
    reads: Arc<AtomicUsize>,
    writes: Arc<AtomicUsize>,
    removals: Arc<AtomicUsize>,
    backend: Backend,
}

impl<Backend> MeasuredStorageBackend<Backend>
where
    Backend: StorageBackend,
{
    /// Wrap the provided [StorageBackend] so that access to it may be
    /// measured.
    pub fn new(backend: Backend) -> Self {
        Self {
            reads: Arc::new(AtomicUsize::default()),
            writes: Arc::new(AtomicUsize::default()),
            removals: Arc::new(AtomicUsize::default()),
            backend,
        }
    }

    /// The aggregate number of reads from the wrapped [StorageBackend]
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }

    /// The aggregate number of writes to the wrapped [StorageBackend]
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::Relaxed)
    }

    /// The aggregate number of removals from the wrapped [StorageBackend]
    pub fn removals(&self) -> usize {
        self.removals.load(Ordering::Relaxed)
    }

    /// Writes plus removals: every access that changed the backend
    pub fn mutations(&self) -> usize {
        self.writes() + self.removals()
    }
}

impl<Backend> StorageBackend for MeasuredStorageBackend<Backend>
where
    Backend: StorageBackend,
{
    type Key = Backend::Key;
    type Value = Backend::Value;
    type Error = Backend::Error;

    fn set(&mut self, key: Self::Key, value: Self::Value) -> Result<(), Self::Error> {
        self.writes.fetch_add(1, Ordering::Relaxed);
        self.backend.set(key, value)
    }

    fn get(&self, key: &Self::Key) -> Result<Option<Self::Value>, Self::Error> {
        self.reads.fetch_add(1, Ordering::Relaxed);
        self.backend.get(key)
    }

    fn unset(&mut self, key: &Self::Key) -> Result<(), Self::Error> {
        self.removals.fetch_add(1, Ordering::Relaxed);
        self.backend.unset(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorageBackend;
    use anyhow::Result;

    #[test]
    fn it_counts_every_kind_of_access() -> Result<()> {
        let mut backend = MeasuredStorageBackend::new(MemoryStorageBackend::<u8, u8>::default());
        let observer = backend.clone();

        backend.set(1, 10)?;
        backend.get(&1)?;
        backend.get(&2)?;
        backend.unset(&1)?;

        assert_eq!(observer.writes(), 1);
        assert_eq!(observer.reads(), 2);
        assert_eq!(observer.removals(), 1);
        assert_eq!(observer.mutations(), 2);

        Ok(())
    }
}
