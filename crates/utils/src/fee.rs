//! This module contains the simplified L1 calldata gas estimator.
//!
//! The estimate reproduces the regolith calldata formula only: `4` gas per zero
//! byte and `16` gas per non-zero byte. It does not query the `GasPriceOracle`
//! and does not model compression, blob fees or scalars, so it will not match
//! the fee actually charged on a live network.

use serde::{Deserialize, Serialize};

use crate::is_recognized_network;

/// Cost per zero byte in calldata.
pub const ZERO_BYTE_COST: u64 = 4;

/// Cost per non-zero byte in calldata.
pub const NON_ZERO_BYTE_COST: u64 = 16;

/// Zero and non-zero byte counts of a calldata payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalldataStats {
    /// Number of `0x00` bytes.
    pub zero_bytes: u64,
    /// Number of bytes other than `0x00`.
    pub non_zero_bytes: u64,
}

impl CalldataStats {
    /// Counts the zero and non-zero bytes of `input` in a single pass.
    pub fn from_calldata(input: &[u8]) -> Self {
        input.iter().fold(Self::default(), |mut stats, byte| {
            if *byte == 0x00 {
                stats.zero_bytes += 1;
            } else {
                stats.non_zero_bytes += 1;
            }
            stats
        })
    }

    /// Total number of bytes counted.
    pub const fn len(&self) -> u64 {
        self.zero_bytes.saturating_add(self.non_zero_bytes)
    }

    /// Returns `true` if no bytes were counted.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Calldata gas for the counted bytes.
    pub const fn data_gas(&self) -> u64 {
        self.zero_bytes
            .saturating_mul(ZERO_BYTE_COST)
            .saturating_add(self.non_zero_bytes.saturating_mul(NON_ZERO_BYTE_COST))
    }
}

/// Estimates the L1 data gas for posting `data` from a Base network.
///
/// Returns `0` when `chain_id` is not Base Mainnet or Base Sepolia, regardless
/// of `data`. Otherwise returns `4 * zero_bytes + 16 * non_zero_bytes`.
pub fn estimate_l1_gas_cost(data: &[u8], chain_id: u64) -> u64 {
    if !is_recognized_network(chain_id) {
        tracing::trace!(target: "base_utils::fee", chain_id, "skipping estimate for unknown chain");
        return 0;
    }

    let stats = CalldataStats::from_calldata(data);
    let gas = stats.data_gas();
    tracing::trace!(
        target: "base_utils::fee",
        chain_id,
        zero_bytes = stats.zero_bytes,
        non_zero_bytes = stats.non_zero_bytes,
        gas,
        "estimated l1 calldata gas"
    );
    gas
}
