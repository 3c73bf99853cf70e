use arbor_storage::ArborStorageError;
use thiserror::Error;

/// Errors that can occur when working with a [`Tree`](crate::Tree).
#[derive(Error, Debug)]
pub enum ArborTreeError {
    /// The operation requires a non-empty tree
    #[error("The tree is empty")]
    TreeIsEmpty,

    /// A lookup reached an empty child link without finding the value
    #[error("Value {0} is not in the tree")]
    ValueNotInTree(u64),

    /// Stored links do not describe the tree they were expected to
    #[error("Tree did not match expected shape: {0}")]
    UnexpectedTreeShape(String),

    /// An error from the node store
    #[error("{0}")]
    Storage(ArborStorageError),
}

impl From<ArborStorageError> for ArborTreeError {
    fn from(value: ArborStorageError) -> Self {
        ArborTreeError::Storage(value)
    }
}
