#![warn(missing_docs)]

//! Addressing primitives shared by the arbor crates.
//!
//! Nodes in an arbor tree are never referenced by pointer. Each node is named
//! by a [`NodeAddress`]: a BLAKE3 digest mixed from the node's value, its
//! parent's address and a context token drawn from a [`Clock`]. The reserved
//! [`NodeAddress::EMPTY`] address means "no node here".

mod address;
pub use address::*;

mod clock;
pub use clock::*;

mod generate;
pub use generate::*;
