#![warn(missing_docs)]

//! This crate contains the storage layer underneath an arbor tree: a mapping
//! from [`NodeAddress`](arbor_common::NodeAddress) to [`Node`] record.
//!
//! The tree only ever talks to a [`NodeStore`]. Reading an address that was
//! never written (or was cleared) yields [`Node::SENTINEL`]; absence is
//! represented, not signaled.
//!
//! A [`StorageBackend`] holding [`Node`] records directly is a [`NodeStore`]:
//!
//! ```rust
//! use arbor_common::{NodeAddress, generate_address};
//! use arbor_storage::{MemoryStorageBackend, Node, NodeStore};
//!
//! let mut store = MemoryStorageBackend::<NodeAddress, Node>::default();
//! let address = generate_address(5, &NodeAddress::EMPTY, 0);
//!
//! store.put(address, Node::leaf(5)).unwrap();
//! assert_eq!(store.get(&address).unwrap(), Node::leaf(5));
//!
//! store.clear(&address).unwrap();
//! assert_eq!(store.get(&address).unwrap(), Node::SENTINEL);
//! ```
//!
//! Byte-oriented backends are combined with an [`Encoder`] in a [`Storage`]
//! envelope:
//!
//! ```rust
//! use arbor_common::NodeAddress;
//! use arbor_storage::{CborEncoder, MemoryStorageBackend, Storage};
//!
//! let storage = Storage {
//!     encoder: CborEncoder,
//!     backend: MemoryStorageBackend::<NodeAddress, Vec<u8>>::default(),
//! };
//! ```

mod backend;
pub use backend::*;

mod encoder;
pub use encoder::*;

mod error;
pub use error::*;

mod node;
pub use node::*;

mod store;
pub use store::*;

#[cfg(any(test, feature = "helpers"))]
mod helpers;
#[cfg(any(test, feature = "helpers"))]
pub use helpers::*;
