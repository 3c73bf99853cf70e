use crate::ArborStorageError;

use super::Encoder;
use serde::{Serialize, de::DeserializeOwned};

/// A basic [`Encoder`] implementation that encodes data as IPLD-compatible CBOR
#[derive(Clone, Copy, Debug, Default)]
pub struct CborEncoder;

impl Encoder for CborEncoder {
    type Error = ArborStorageError;

    fn encode<T>(&self, block: &T) -> Result<Vec<u8>, Self::Error>
    where
        T: Serialize + std::fmt::Debug,
    {
        serde_ipld_dagcbor::to_vec(block)
            .map_err(|error| ArborStorageError::EncodeFailed(format!("{error}")))
    }

    fn decode<T>(&self, bytes: &[u8]) -> Result<T, Self::Error>
    where
        T: DeserializeOwned,
    {
        serde_ipld_dagcbor::from_slice::<T>(bytes)
            .map_err(|error| ArborStorageError::DecodeFailed(format!("{error}")))
    }
}
