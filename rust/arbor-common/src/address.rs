use std::{array::TryFromSliceError, fmt::Display};

use base58::ToBase58;
use serde::{Deserialize, Serialize};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// The size of a [`NodeAddress`] in bytes.
pub const NODE_ADDRESS_SIZE: usize = 32;

/// An opaque, fixed-width identifier naming a node record in a store.
///
/// Addresses are produced by [`generate_address`](crate::generate_address).
/// The all-zero address is reserved as [`NodeAddress::EMPTY`] and is never
/// handed out by the generator.
#[derive(
    FromBytes,
    IntoBytes,
    Immutable,
    KnownLayout,
    Clone,
    Copy,
    Default,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[repr(transparent)]
pub struct NodeAddress(#[serde(with = "serde_bytes")] [u8; NODE_ADDRESS_SIZE]);

impl NodeAddress {
    /// The sentinel address meaning "no child" or "no node here".
    pub const EMPTY: NodeAddress = NodeAddress([0u8; NODE_ADDRESS_SIZE]);

    /// Returns true if this is the [`NodeAddress::EMPTY`] sentinel.
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// The raw bytes of this address.
    pub fn bytes(&self) -> &[u8; NODE_ADDRESS_SIZE] {
        &self.0
    }
}

impl From<[u8; NODE_ADDRESS_SIZE]> for NodeAddress {
    fn from(value: [u8; NODE_ADDRESS_SIZE]) -> Self {
        NodeAddress(value)
    }
}

impl TryFrom<&[u8]> for NodeAddress {
    type Error = TryFromSliceError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Ok(NodeAddress(value.try_into()?))
    }
}

impl AsRef<[u8]> for NodeAddress {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Display for NodeAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0.to_base58())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn it_treats_only_the_zero_address_as_empty() {
        assert!(NodeAddress::EMPTY.is_empty());
        assert!(NodeAddress::default().is_empty());

        let mut bytes = [0u8; NODE_ADDRESS_SIZE];
        bytes[31] = 1;
        assert!(!NodeAddress::from(bytes).is_empty());
    }

    #[test]
    fn it_converts_from_a_slice_of_the_right_length() -> Result<()> {
        let bytes = [7u8; NODE_ADDRESS_SIZE];
        let address = NodeAddress::try_from(bytes.as_slice())?;

        assert_eq!(address.bytes(), &bytes);
        assert!(NodeAddress::try_from(&bytes[..16]).is_err());

        Ok(())
    }

    #[test]
    fn it_displays_as_base58() {
        let address = NodeAddress::from([1u8; NODE_ADDRESS_SIZE]);
        let rendered = address.to_string();

        assert!(rendered.starts_with('#'));
        assert_eq!(&rendered[1..], [1u8; NODE_ADDRESS_SIZE].to_base58());
    }

    #[test]
    fn it_serializes_as_a_byte_string() -> Result<()> {
        let address = NodeAddress::from([9u8; NODE_ADDRESS_SIZE]);
        let bytes = serde_ipld_dagcbor::to_vec(&address)?;

        // CBOR byte string header (major type 2, one byte length) + 32 bytes
        assert_eq!(bytes.len(), 2 + NODE_ADDRESS_SIZE);
        assert_eq!(serde_ipld_dagcbor::from_slice::<NodeAddress>(&bytes)?, address);

        Ok(())
    }
}
