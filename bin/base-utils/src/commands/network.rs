//! Network classification command.

use std::fmt;

use base_cli_utils::GlobalArgs;
use base_utils::BaseNetwork;
use clap::Args;
use serde::Serialize;

/// The network command.
#[derive(Debug, Clone, Args)]
pub struct NetworkCommand {}

/// Classification of the selected chain id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkReport {
    /// The classified chain id.
    pub chain_id: u64,
    /// Network label, `Unknown` for chains outside Base.
    pub name: &'static str,
    /// Whether the chain is Base Mainnet.
    pub mainnet: bool,
    /// Whether the chain is Base Sepolia.
    pub testnet: bool,
    /// Whether the chain is either Base network.
    pub recognized: bool,
    /// Block explorer address prefix, if recognized.
    pub explorer: Option<&'static str>,
}

impl fmt::Display for NetworkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (chain id {})", self.name, self.chain_id)
    }
}

impl NetworkCommand {
    /// Classifies the chain selected by `--network`.
    pub fn report(&self, global: &GlobalArgs) -> NetworkReport {
        let chain_id = global.chain_id();
        let recognized = base_utils::is_recognized_network(chain_id);
        if !recognized {
            tracing::warn!(target: "cli", chain_id, "chain is not a Base network");
        }

        NetworkReport {
            chain_id,
            name: base_utils::network_name(chain_id),
            mainnet: base_utils::is_mainnet(chain_id),
            testnet: base_utils::is_testnet(chain_id),
            recognized,
            explorer: BaseNetwork::from_chain_id(chain_id).map(BaseNetwork::explorer_base_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::output::test_utils::global;

    #[rstest]
    #[case::mainnet("8453", "Base Mainnet", true, false)]
    #[case::sepolia("84532", "Base Sepolia", false, true)]
    #[case::optimism("10", "Unknown", false, false)]
    fn report(
        #[case] network: &str,
        #[case] name: &str,
        #[case] mainnet: bool,
        #[case] testnet: bool,
    ) {
        let report = NetworkCommand {}.report(&global(&["-n", network]));
        assert_eq!(report.name, name);
        assert_eq!(report.mainnet, mainnet);
        assert_eq!(report.testnet, testnet);
        assert_eq!(report.recognized, mainnet || testnet);
        assert_eq!(report.explorer.is_some(), report.recognized);
    }
}
