//! Address formatting.

use alloy_primitives::Address;

use crate::BaseNetwork;

/// Length of a formatted address: `0x` followed by 40 hex digits.
pub const ADDRESS_HEX_LEN: usize = 2 + 2 * 20;

/// Lowercase hex digit for a nibble in `0..16`.
const fn nibble_to_hex(nibble: u8) -> char {
    if nibble < 10 { (b'0' + nibble) as char } else { (b'a' + (nibble - 10)) as char }
}

/// Formats `address` as `0x` followed by 40 lowercase hex digits.
///
/// Unlike the `Display` impl of [`Address`], no EIP-55 checksum casing is applied.
pub fn to_hex_string(address: &Address) -> String {
    let mut out = String::with_capacity(ADDRESS_HEX_LEN);
    out.push_str("0x");
    for byte in address.as_slice() {
        out.push(nibble_to_hex(byte >> 4));
        out.push(nibble_to_hex(byte & 0x0f));
    }
    out
}

/// Returns the block explorer link for `address` on `chain_id`.
///
/// Returns an empty string when `chain_id` is not a Base network.
pub fn explorer_url(address: &Address, chain_id: u64) -> String {
    BaseNetwork::from_chain_id(chain_id)
        .map(|network| format!("{}{}", network.explorer_base_url(), to_hex_string(address)))
        .unwrap_or_default()
}
