//! Deterministic transaction fingerprints.
//!
//! The fingerprint is `keccak256` over the packed concatenation
//!
//! ```text
//! chain_id (32) ‖ sender (20) ‖ to (20) ‖ value (32) ‖ data (n) ‖ nonce (32) ‖ timestamp (32)
//! ```
//!
//! with every integer widened to a big-endian `uint256`, the same layout as
//! Solidity's `abi.encodePacked`. It covers the sender and the timestamp, so
//! it is a fingerprint of one submission and not a canonical transaction id.

use alloy_primitives::{Address, B256, Bytes, Keccak256, U256};
use serde::{Deserialize, Serialize};

/// Number of bytes every packed integer occupies.
const WORD_LEN: usize = 32;

/// Number of bytes a packed address occupies.
const ADDRESS_LEN: usize = 20;

/// Packed length of everything except the calldata.
pub const PACKED_FIXED_LEN: usize = WORD_LEN * 4 + ADDRESS_LEN * 2;

/// Computes the fingerprint of a transaction.
pub fn transaction_hash(
    chain_id: u64,
    sender: Address,
    to: Address,
    value: U256,
    data: &[u8],
    nonce: u64,
    timestamp: u64,
) -> B256 {
    let mut hasher = Keccak256::new();
    hasher.update(U256::from(chain_id).to_be_bytes::<WORD_LEN>());
    hasher.update(sender);
    hasher.update(to);
    hasher.update(value.to_be_bytes::<WORD_LEN>());
    hasher.update(data);
    hasher.update(U256::from(nonce).to_be_bytes::<WORD_LEN>());
    hasher.update(U256::from(timestamp).to_be_bytes::<WORD_LEN>());
    let hash = hasher.finalize();

    tracing::trace!(
        target: "base_utils::hash",
        chain_id,
        %sender,
        %to,
        nonce,
        timestamp,
        %hash,
        "fingerprinted transaction"
    );
    hash
}

/// The caller-controlled fields of a transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDescriptor {
    /// Recipient.
    pub to: Address,
    /// Value in wei.
    pub value: U256,
    /// Calldata.
    pub data: Bytes,
    /// Sender nonce.
    pub nonce: u64,
}

impl TransactionDescriptor {
    /// Fingerprints the transaction as sent by `sender` on `chain_id` at `timestamp`.
    ///
    /// See [`transaction_hash`].
    pub fn fingerprint(&self, chain_id: u64, sender: Address, timestamp: u64) -> B256 {
        transaction_hash(chain_id, sender, self.to, self.value, &self.data, self.nonce, timestamp)
    }

    /// Length of the packed preimage hashed by [`Self::fingerprint`].
    pub fn packed_len(&self) -> usize {
        PACKED_FIXED_LEN + self.data.len()
    }
}
