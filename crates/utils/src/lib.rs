#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/base/base-utils/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod network;
pub use network::{
    BASE_MAINNET_CHAIN_ID, BASE_MAINNET_EXPLORER, BASE_SEPOLIA_CHAIN_ID, BASE_SEPOLIA_EXPLORER,
    BaseNetwork, NetworkParseError, UNKNOWN_NETWORK_NAME, is_mainnet, is_recognized_network,
    is_testnet, network_name,
};

mod fee;
pub use fee::{CalldataStats, NON_ZERO_BYTE_COST, ZERO_BYTE_COST, estimate_l1_gas_cost};

mod gas;
pub use gas::{
    CONTRACT_CALL_GAS_LIMIT, CONTRACT_DEPLOY_GAS_LIMIT, DEFAULT_GAS_LIMIT, OperationClass,
    OperationClassParseError, TRANSFER_GAS_LIMIT, optimized_gas_limit,
};

mod predeploys;
pub use predeploys::{SystemContracts, is_system_contract};

mod hash;
pub use hash::{PACKED_FIXED_LEN, TransactionDescriptor, transaction_hash};

mod format;
pub use format::{ADDRESS_HEX_LEN, explorer_url, to_hex_string};
