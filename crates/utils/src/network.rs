//! Base network identification.
//!
//! Classification is keyed purely on the numeric chain id. Unknown ids never
//! produce an error, they degrade to [`UNKNOWN_NETWORK_NAME`].

use core::{fmt, str::FromStr};

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Base Mainnet chain ID.
pub const BASE_MAINNET_CHAIN_ID: u64 = 8453;

/// Base Sepolia chain ID.
pub const BASE_SEPOLIA_CHAIN_ID: u64 = 84532;

/// Label returned by [`network_name`] for chain ids outside the Base networks.
pub const UNKNOWN_NETWORK_NAME: &str = "Unknown";

/// Block explorer address prefix for Base Mainnet.
pub const BASE_MAINNET_EXPLORER: &str = "https://basescan.org/address/";

/// Block explorer address prefix for Base Sepolia.
pub const BASE_SEPOLIA_EXPLORER: &str = "https://sepolia.basescan.org/address/";

/// A recognized Base network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseNetwork {
    /// Base Mainnet.
    Mainnet,
    /// Base Sepolia testnet.
    Sepolia,
}

impl BaseNetwork {
    /// All recognized networks.
    pub const ALL: [Self; 2] = [Self::Mainnet, Self::Sepolia];

    /// Returns the network for the given chain id, if it is a Base network.
    pub const fn from_chain_id(chain_id: u64) -> Option<Self> {
        match chain_id {
            BASE_MAINNET_CHAIN_ID => Some(Self::Mainnet),
            BASE_SEPOLIA_CHAIN_ID => Some(Self::Sepolia),
            _ => None,
        }
    }

    /// Returns the chain id of the network.
    pub const fn chain_id(self) -> u64 {
        match self {
            Self::Mainnet => BASE_MAINNET_CHAIN_ID,
            Self::Sepolia => BASE_SEPOLIA_CHAIN_ID,
        }
    }

    /// Returns the human readable name of the network.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mainnet => "Base Mainnet",
            Self::Sepolia => "Base Sepolia",
        }
    }

    /// Returns the block explorer prefix that addresses are appended to.
    pub const fn explorer_base_url(self) -> &'static str {
        match self {
            Self::Mainnet => BASE_MAINNET_EXPLORER,
            Self::Sepolia => BASE_SEPOLIA_EXPLORER,
        }
    }

    /// Returns `true` for the testnet.
    pub const fn is_testnet(self) -> bool {
        matches!(self, Self::Sepolia)
    }
}

impl fmt::Display for BaseNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a Base network.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("unknown base network: {name}")]
pub struct NetworkParseError {
    /// The rejected input.
    pub name: String,
}

impl FromStr for BaseNetwork {
    type Err = NetworkParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "base" | "base-mainnet" | "8453" => Ok(Self::Mainnet),
            "sepolia" | "testnet" | "base-sepolia" | "84532" => Ok(Self::Sepolia),
            _ => Err(NetworkParseError { name: s.to_string() }),
        }
    }
}

/// Returns `true` iff `chain_id` is Base Mainnet.
pub const fn is_mainnet(chain_id: u64) -> bool {
    chain_id == BASE_MAINNET_CHAIN_ID
}

/// Returns `true` iff `chain_id` is Base Sepolia.
pub const fn is_testnet(chain_id: u64) -> bool {
    chain_id == BASE_SEPOLIA_CHAIN_ID
}

/// Returns `true` if `chain_id` is either Base network.
pub const fn is_recognized_network(chain_id: u64) -> bool {
    is_mainnet(chain_id) || is_testnet(chain_id)
}

/// Returns the network label for `chain_id`, or [`UNKNOWN_NETWORK_NAME`].
pub const fn network_name(chain_id: u64) -> &'static str {
    match BaseNetwork::from_chain_id(chain_id) {
        Some(network) => network.name(),
        None => UNKNOWN_NETWORK_NAME,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::mainnet(BASE_MAINNET_CHAIN_ID, true, false, "Base Mainnet")]
    #[case::sepolia(BASE_SEPOLIA_CHAIN_ID, false, true, "Base Sepolia")]
    #[case::ethereum(1, false, false, UNKNOWN_NETWORK_NAME)]
    #[case::optimism(10, false, false, UNKNOWN_NETWORK_NAME)]
    #[case::zero(0, false, false, UNKNOWN_NETWORK_NAME)]
    #[case::max(u64::MAX, false, false, UNKNOWN_NETWORK_NAME)]
    fn test_classify_chain_id(
        #[case] chain_id: u64,
        #[case] mainnet: bool,
        #[case] testnet: bool,
        #[case] name: &str,
    ) {
        assert_eq!(is_mainnet(chain_id), mainnet);
        assert_eq!(is_testnet(chain_id), testnet);
        assert_eq!(is_recognized_network(chain_id), mainnet || testnet);
        assert_eq!(network_name(chain_id), name);
    }

    #[test]
    fn test_neighbours_of_recognized_ids_are_unknown() {
        for id in [8452, 8454, 84531, 84533] {
            assert!(!is_recognized_network(id));
            assert_eq!(network_name(id), UNKNOWN_NETWORK_NAME);
        }
    }

    #[test]
    fn test_chain_id_roundtrip() {
        for network in BaseNetwork::ALL {
            assert_eq!(BaseNetwork::from_chain_id(network.chain_id()), Some(network));
        }
    }

    #[rstest]
    #[case::mainnet("mainnet", BaseNetwork::Mainnet)]
    #[case::base("Base", BaseNetwork::Mainnet)]
    #[case::mainnet_id("8453", BaseNetwork::Mainnet)]
    #[case::sepolia("sepolia", BaseNetwork::Sepolia)]
    #[case::testnet(" TESTNET ", BaseNetwork::Sepolia)]
    #[case::sepolia_id("84532", BaseNetwork::Sepolia)]
    fn test_parse_network(#[case] input: &str, #[case] expected: BaseNetwork) {
        assert_eq!(input.parse::<BaseNetwork>().unwrap(), expected);
    }

    #[test]
    fn test_parse_unknown_network() {
        let err = "goerli".parse::<BaseNetwork>().unwrap_err();
        assert_eq!(err.to_string(), "unknown base network: goerli");
    }

    #[test]
    fn test_explorer_prefixes() {
        assert_eq!(BaseNetwork::Mainnet.explorer_base_url(), "https://basescan.org/address/");
        assert_eq!(
            BaseNetwork::Sepolia.explorer_base_url(),
            "https://sepolia.basescan.org/address/"
        );
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&BaseNetwork::Sepolia).unwrap(), "\"sepolia\"");
        let network: BaseNetwork = serde_json::from_str("\"mainnet\"").unwrap();
        assert_eq!(network, BaseNetwork::Mainnet);
    }
}
