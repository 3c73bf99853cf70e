use base58::ToBase58;
use std::{
    marker::PhantomData,
    path::{Path, PathBuf},
};

use crate::ArborStorageError;

use super::StorageBackend;

/// A basic file-system-based [StorageBackend] implementation. All values are
/// stored inside a root directory as files named after their (base58-encoded)
/// keys.
#[derive(Clone, Debug)]
pub struct FileSystemStorageBackend<Key, Value>
where
    Key: AsRef<[u8]> + Clone,
    Value: AsRef<[u8]> + From<Vec<u8>> + Clone,
{
    root_dir: PathBuf,
    key_type: PhantomData<Key>,
    value_type: PhantomData<Value>,
}

impl<Key, Value> FileSystemStorageBackend<Key, Value>
where
    Key: AsRef<[u8]> + Clone,
    Value: AsRef<[u8]> + From<Vec<u8>> + Clone,
{
    /// Creates a new [`FileSystemStorageBackend`] that stores files in
    /// `root_dir`, creating the directory if needed.
    pub fn new<Pathlike>(root_dir: Pathlike) -> Result<Self, ArborStorageError>
    where
        Pathlike: AsRef<Path>,
    {
        let root_dir = root_dir.as_ref().to_owned();
        std::fs::create_dir_all(&root_dir)
            .map_err(|error| ArborStorageError::StorageBackend(format!("{error}")))?;
        tracing::debug!(root = %root_dir.display(), "Opened file-system storage");
        Ok(Self {
            root_dir,
            key_type: PhantomData,
            value_type: PhantomData,
        })
    }

    fn make_path(&self, key: &Key) -> PathBuf {
        self.root_dir.join(key.as_ref().to_base58())
    }
}

impl<Key, Value> StorageBackend for FileSystemStorageBackend<Key, Value>
where
    Key: AsRef<[u8]> + Clone,
    Value: AsRef<[u8]> + From<Vec<u8>> + Clone,
{
    type Key = Key;
    type Value = Value;
    type Error = ArborStorageError;

    fn set(&mut self, key: Self::Key, value: Self::Value) -> Result<(), Self::Error> {
        std::fs::write(self.make_path(&key), value)
            .map_err(|error| ArborStorageError::StorageBackend(format!("{error}")))
    }

    fn get(&self, key: &Self::Key) -> Result<Option<Self::Value>, Self::Error> {
        let path = self.make_path(key);
        if !path.exists() {
            return Ok(None);
        }

        std::fs::read(path)
            .map(|value| Some(Value::from(value)))
            .map_err(|error| ArborStorageError::StorageBackend(format!("{error}")))
    }

    fn unset(&mut self, key: &Self::Key) -> Result<(), Self::Error> {
        match std::fs::remove_file(self.make_path(key)) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(ArborStorageError::StorageBackend(format!("{error}"))),
        }
    }
}
