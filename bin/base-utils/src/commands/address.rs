//! Address commands.

use std::fmt;

use alloy_primitives::Address;
use base_cli_utils::GlobalArgs;
use base_utils::SystemContracts;
use clap::Args;
use serde::Serialize;

/// The system command.
#[derive(Debug, Clone, Args)]
pub struct SystemCommand {
    /// The address to classify.
    pub address: Address,
}

/// Classification of an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemReport {
    /// Lowercase hex address.
    pub address: String,
    /// Whether the address is reserved for a system contract.
    pub system: bool,
    /// Contract name for well-known predeploys.
    pub name: Option<&'static str>,
}

impl fmt::Display for SystemReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.system, self.name) {
            (true, Some(name)) => write!(f, "{} is a system contract ({name})", self.address),
            (true, None) => write!(f, "{} is a system contract", self.address),
            (false, _) => write!(f, "{} is not a system contract", self.address),
        }
    }
}

impl SystemCommand {
    /// Classifies the address.
    pub fn report(&self) -> SystemReport {
        SystemReport {
            address: base_utils::to_hex_string(&self.address),
            system: base_utils::is_system_contract(self.address),
            name: SystemContracts::name_of(self.address),
        }
    }
}

/// The explorer command.
#[derive(Debug, Clone, Args)]
pub struct ExplorerCommand {
    /// The address to link to.
    pub address: Address,
}

/// A block explorer link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplorerReport {
    /// The chain the link points into.
    pub chain_id: u64,
    /// The link, empty off the Base networks.
    pub url: String,
}

impl fmt::Display for ExplorerReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl ExplorerCommand {
    /// Builds the explorer link on the chain selected by `--network`.
    pub fn report(&self, global: &GlobalArgs) -> ExplorerReport {
        let chain_id = global.chain_id();
        let url = base_utils::explorer_url(&self.address, chain_id);
        if url.is_empty() {
            tracing::warn!(target: "cli", chain_id, "no block explorer for chain");
        }
        ExplorerReport { chain_id, url }
    }
}

/// The hex command.
#[derive(Debug, Clone, Args)]
pub struct HexCommand {
    /// The address to format.
    pub address: Address,
}

/// A formatted address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HexReport {
    /// Lowercase hex address.
    pub address: String,
}

impl fmt::Display for HexReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

impl HexCommand {
    /// Formats the address.
    pub fn report(&self) -> HexReport {
        HexReport { address: base_utils::to_hex_string(&self.address) }
    }
}
