//! Hex formatting helpers shared by records and error messages.

use alloy::primitives::{Address, B256};

/// Lowercase 0x-prefixed hex for an address.
pub fn address_hex(address: &Address) -> String {
    format!("0x{}", alloy::hex::encode(address))
}

/// Lowercase 0x-prefixed hex for a 32-byte hash.
pub fn hash_hex(hash: &B256) -> String {
    format!("0x{}", alloy::hex::encode(hash))
}
