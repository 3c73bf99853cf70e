use crate::NodeAddress;

const ADDRESS_DERIVATION_CONTEXT: &str = "arbor 2026-10-14 node address v1";

/// Derives the address of a new node from its value, its parent's address and
/// a context token.
///
/// The mix is a keyed BLAKE3 derivation over the little-endian value, the
/// parent address bytes and the little-endian context token. Re-inserting the
/// same value under the same parent with a different `context` yields a
/// different address. The result is never [`NodeAddress::EMPTY`].
pub fn generate_address(value: u64, parent: &NodeAddress, context: u64) -> NodeAddress {
    let mut hasher = blake3::Hasher::new_derive_key(ADDRESS_DERIVATION_CONTEXT);
    hasher.update(&value.to_le_bytes());
    hasher.update(parent.bytes());
    hasher.update(&context.to_le_bytes());

    let mut reader = hasher.finalize_xof();
    loop {
        let mut bytes = [0u8; crate::NODE_ADDRESS_SIZE];
        reader.fill(&mut bytes);
        let address = NodeAddress::from(bytes);
        if !address.is_empty() {
            return address;
        }
    }
}
