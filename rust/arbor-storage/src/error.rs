use thiserror::Error;

/// The common error type used by this crate
#[derive(Error, Debug)]
pub enum ArborStorageError {
    /// An error that occurs while encoding a node record
    #[error("Failed to encode a node record: {0}")]
    EncodeFailed(String),

    /// An error that occurs while decoding a node record
    #[error("Failed to decode a node record: {0}")]
    DecodeFailed(String),

    /// An error that occurs when working with a storage backend
    #[error("Storage backend error: {0}")]
    StorageBackend(String),
}
