use anyhow::Result;
use arbor_common::NodeAddress;

use crate::{CborEncoder, FileSystemStorageBackend, Storage};

/// A file-system backed node store together with the temporary directory that
/// holds it. The directory is removed when the [`tempfile::TempDir`] drops.
pub type TargetNodeStorage = (
    Storage<CborEncoder, FileSystemStorageBackend<NodeAddress, Vec<u8>>>,
    tempfile::TempDir,
);

/// Creates a persisted [`StorageBackend`](crate::StorageBackend) in a fresh
/// temporary directory, for use in tests
pub fn make_target_storage<K>() -> Result<(FileSystemStorageBackend<K, Vec<u8>>, tempfile::TempDir)>
where
    K: AsRef<[u8]> + Clone,
{
    let root = tempfile::tempdir()?;
    let storage = FileSystemStorageBackend::<K, Vec<u8>>::new(root.path())?;
    Ok((storage, root))
}

/// Creates a CBOR-encoded, file-system backed node store in a fresh temporary
/// directory, for use in tests
pub fn make_target_node_storage() -> Result<TargetNodeStorage> {
    let (backend, root) = make_target_storage::<NodeAddress>()?;
    Ok((
        Storage {
            encoder: CborEncoder,
            backend,
        },
        root,
    ))
}
