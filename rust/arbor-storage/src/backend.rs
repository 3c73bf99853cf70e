use crate::ArborStorageError;

mod memory;
pub use memory::*;

mod fs;
pub use fs::*;

mod measure;
pub use measure::*;

/// A [StorageBackend] is a facade over some generalized storage substrate that
/// is capable of storing, retrieving and removing values by some key
pub trait StorageBackend: Clone {
    /// The key type used by this [StorageBackend]
    type Key;
    /// The value type able to be stored by this [StorageBackend]
    type Value;
    /// The error type produced by this [StorageBackend]
    type Error: Into<ArborStorageError>;

    /// Store the given value against the given key
    fn set(&mut self, key: Self::Key, value: Self::Value) -> Result<(), Self::Error>;
    /// Retrieve a value (if any) stored against the given key
    fn get(&self, key: &Self::Key) -> Result<Option<Self::Value>, Self::Error>;
    /// Remove the value (if any) stored against the given key
    fn unset(&mut self, key: &Self::Key) -> Result<(), Self::Error>;
}
