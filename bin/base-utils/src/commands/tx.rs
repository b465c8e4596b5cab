//! Transaction fingerprint command.

use std::{
    fmt,
    time::{SystemTime, UNIX_EPOCH},
};

use alloy_primitives::{Address, B256, Bytes, U256};
use base_cli_utils::GlobalArgs;
use base_utils::TransactionDescriptor;
use clap::Args;
use eyre::WrapErr;
use serde::Serialize;

/// The tx-hash command.
#[derive(Debug, Clone, Args)]
pub struct TxHashCommand {
    /// Sender address.
    #[arg(long)]
    pub sender: Address,
    /// Recipient address.
    #[arg(long)]
    pub to: Address,
    /// Value in wei, decimal or `0x` prefixed hex.
    #[arg(long, default_value = "0")]
    pub value: U256,
    /// Hex encoded calldata.
    #[arg(long, default_value = "0x")]
    pub data: Bytes,
    /// Sender nonce.
    #[arg(long, default_value_t = 0)]
    pub nonce: u64,
    /// Unix timestamp in seconds. Defaults to the current time.
    #[arg(long)]
    pub timestamp: Option<u64>,
}

/// A transaction fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxHashReport {
    /// The chain the fingerprint was computed for.
    pub chain_id: u64,
    /// The timestamp that was hashed.
    pub timestamp: u64,
    /// The fingerprint.
    pub hash: B256,
}

impl fmt::Display for TxHashReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hash)
    }
}

impl TxHashCommand {
    /// Fingerprints the transaction on the chain selected by `--network`.
    pub fn report(&self, global: &GlobalArgs) -> eyre::Result<TxHashReport> {
        let timestamp = match self.timestamp {
            Some(timestamp) => timestamp,
            None => {
                let now = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .wrap_err("system clock is before the unix epoch")?
                    .as_secs();
                tracing::debug!(target: "cli", timestamp = now, "no timestamp given, using now");
                now
            }
        };

        let tx = TransactionDescriptor {
            to: self.to,
            value: self.value,
            data: self.data.clone(),
            nonce: self.nonce,
        };
        let chain_id = global.chain_id();

        let hash = tx.fingerprint(chain_id, self.sender, timestamp);

        Ok(TxHashReport { chain_id, timestamp, hash })
    }
}
