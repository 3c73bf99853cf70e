#![warn(missing_docs)]

//! A binary search tree whose nodes live in an address-keyed store.
//!
//! This crate provides [`Tree`], an unbalanced BST of `u64` values. Nodes are
//! never linked by pointer: each is named by a
//! [`NodeAddress`](arbor_common::NodeAddress) derived from its value, its
//! parent's address and a tick of the tree's [`Clock`](arbor_common::Clock),
//! and child links are addresses into a [`NodeStore`](arbor_storage::NodeStore).
//!
//! Values smaller than a node go left; equal or greater values go right, so
//! duplicates are permitted and always route right.
//!
//! ```
//! use arbor_common::NodeAddress;
//! use arbor_storage::{MemoryStorageBackend, Node};
//! use arbor_tree::Tree;
//!
//! let mut tree = Tree::new(MemoryStorageBackend::<NodeAddress, Node>::default());
//!
//! for value in [5, 3, 7, 2, 4, 6, 8] {
//!     tree.insert(value).unwrap();
//! }
//!
//! assert_eq!(tree.inorder().unwrap(), vec![2, 3, 4, 5, 6, 7, 8]);
//! assert_eq!(tree.serialize().unwrap(), "5(3(2)(4))(7(6)(8))");
//!
//! tree.delete(5).unwrap();
//! assert_eq!(tree.get_root().unwrap().value, 6);
//! ```
//!
//! A tree can be reopened over a store whose records outlived it, given the
//! root address and a clock that will not replay earlier context tokens:
//!
//! ```
//! use arbor_common::{NodeAddress, SequenceClock};
//! use arbor_storage::{MemoryStorageBackend, Node};
//! use arbor_tree::Tree;
//!
//! let store = MemoryStorageBackend::<NodeAddress, Node>::default();
//! let mut tree = Tree::new(store.clone());
//! tree.insert(10).unwrap();
//! tree.insert(20).unwrap();
//!
//! let (root, clock) = (*tree.root(), *tree.clock());
//! drop(tree);
//!
//! let mut reopened = Tree::from_root(store, root, clock);
//! reopened.insert(15).unwrap();
//! assert_eq!(reopened.preorder().unwrap(), vec![10, 20, 15]);
//! ```

mod error;
pub use error::*;

mod tree;
pub use tree::*;

mod insert;

mod delete;

mod traverse;

mod query;

mod invert;

mod render;
