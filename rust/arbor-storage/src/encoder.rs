use serde::{Serialize, de::DeserializeOwned};

use crate::ArborStorageError;

mod cbor;
pub use cbor::*;

/// An [Encoder] converts node records to and from bytes
pub trait Encoder: Clone {
    /// The error type produced by this [Encoder]
    type Error: Into<ArborStorageError>;

    /// Encode a serializable item into its bytes.
    fn encode<T>(&self, block: &T) -> Result<Vec<u8>, Self::Error>
    where
        T: Serialize + std::fmt::Debug;

    /// Decode bytes into some deserializable type.
    fn decode<T>(&self, bytes: &[u8]) -> Result<T, Self::Error>
    where
        T: DeserializeOwned;
}
