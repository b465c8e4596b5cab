//! Gas estimation commands.

use std::fmt;

use alloy_primitives::Bytes;
use base_cli_utils::GlobalArgs;
use base_utils::{CalldataStats, OperationClass};
use clap::Args;
use serde::Serialize;

/// The l1-gas command.
#[derive(Debug, Clone, Args)]
pub struct L1GasCommand {
    /// Hex encoded calldata, with or without a `0x` prefix.
    #[arg(value_name = "CALLDATA")]
    pub data: Bytes,
}

/// Result of an L1 calldata gas estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct L1GasReport {
    /// The chain the estimate was made for.
    pub chain_id: u64,
    /// Byte counts of the calldata.
    #[serde(flatten)]
    pub stats: CalldataStats,
    /// Estimated gas, `0` off the Base networks.
    pub gas: u64,
}

impl fmt::Display for L1GasReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.gas)
    }
}

impl L1GasCommand {
    /// Estimates the calldata gas on the chain selected by `--network`.
    pub fn report(&self, global: &GlobalArgs) -> L1GasReport {
        let chain_id = global.chain_id();
        let stats = CalldataStats::from_calldata(&self.data);

        // Same result as `estimate_l1_gas_cost`, without counting the bytes twice.
        let gas = if base_utils::is_recognized_network(chain_id) {
            stats.data_gas()
        } else {
            tracing::warn!(target: "cli", chain_id, "not a Base network, estimate is zero");
            0
        };

        L1GasReport { chain_id, stats, gas }
    }
}

/// The gas-limit command.
#[derive(Debug, Clone, Args)]
pub struct GasLimitCommand {
    /// Operation class: `transfer`, `call`, `deploy` or a numeric code.
    #[arg(value_name = "CLASS")]
    pub class: OperationClass,
}

/// Gas limit of an operation class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GasLimitReport {
    /// The resolved operation class.
    pub class: OperationClass,
    /// Its gas limit.
    pub gas_limit: u64,
}

impl fmt::Display for GasLimitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.gas_limit)
    }
}

impl GasLimitCommand {
    /// Looks up the gas limit.
    pub fn report(&self) -> GasLimitReport {
        GasLimitReport {
            class: self.class,
            gas_limit: base_utils::optimized_gas_limit(self.class.code()),
        }
    }
}
