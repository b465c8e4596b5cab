//! Reserved system addresses of the Base network.
//!
//! Base inherits the OP Stack predeploy namespace: every address in
//! `0x4200000000000000000000000000000000000000..=0x42000000000000000000000000000000000000FF`
//! is reserved for protocol contracts.
//! See <https://specs.optimism.io/protocol/predeploys.html#predeploys>

use alloy_primitives::{Address, U160, address};

/// Container for the reserved system contract addresses.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct SystemContracts;

impl SystemContracts {
    /// The named reserved addresses that [`is_system_contract`] matches exactly.
    pub const NAMED: [Address; 3] =
        [Self::L2_STANDARD_BRIDGE, Self::GAS_PRICE_ORACLE, Self::L1_BLOCK];

    /// First address of the reserved predeploy range (inclusive).
    pub const RANGE_START: Address = address!("0x4200000000000000000000000000000000000000");

    /// Last address of the reserved predeploy range (inclusive).
    pub const RANGE_END: Address = address!("0x42000000000000000000000000000000000000FF");

    /// The `L2StandardBridge` used to deposit and withdraw tokens.
    /// <https://specs.optimism.io/protocol/predeploys.html#l2standardbridge>
    pub const L2_STANDARD_BRIDGE: Address = address!("0x4200000000000000000000000000000000000010");

    /// The `GasPriceOracle` exposing the L1 fee parameters.
    /// <https://specs.optimism.io/protocol/predeploys.html#gaspriceoracle>
    pub const GAS_PRICE_ORACLE: Address = address!("0x420000000000000000000000000000000000000F");

    /// The `L1Block` contract holding the latest known L1 block attributes.
    /// <https://specs.optimism.io/protocol/predeploys.html#l1block>
    pub const L1_BLOCK: Address = address!("0x4200000000000000000000000000000000000015");

    /// The WETH9 predeploy address.
    pub const WETH9: Address = address!("0x4200000000000000000000000000000000000006");

    /// The `L2CrossDomainMessenger` proxy address.
    pub const L2_CROSS_DOMAIN_MESSENGER: Address =
        address!("0x4200000000000000000000000000000000000007");

    /// The sequencer fee vault proxy address.
    pub const SEQUENCER_FEE_VAULT: Address = address!("0x4200000000000000000000000000000000000011");

    /// The `L2ToL1MessagePasser` used to initiate withdrawals.
    pub const L2_TO_L1_MESSAGE_PASSER: Address =
        address!("0x4200000000000000000000000000000000000016");

    /// The base fee vault proxy address.
    pub const BASE_FEE_VAULT: Address = address!("0x4200000000000000000000000000000000000019");

    /// The L1 fee vault proxy address.
    pub const L1_FEE_VAULT: Address = address!("0x420000000000000000000000000000000000001a");

    const LABELS: [(Address, &'static str); 9] = [
        (Self::WETH9, "WETH9"),
        (Self::L2_CROSS_DOMAIN_MESSENGER, "L2CrossDomainMessenger"),
        (Self::GAS_PRICE_ORACLE, "GasPriceOracle"),
        (Self::L2_STANDARD_BRIDGE, "L2StandardBridge"),
        (Self::SEQUENCER_FEE_VAULT, "SequencerFeeVault"),
        (Self::L1_BLOCK, "L1Block"),
        (Self::L2_TO_L1_MESSAGE_PASSER, "L2ToL1MessagePasser"),
        (Self::BASE_FEE_VAULT, "BaseFeeVault"),
        (Self::L1_FEE_VAULT, "L1FeeVault"),
    ];

    /// Returns the contract name of a well-known predeploy.
    pub fn name_of(address: Address) -> Option<&'static str> {
        Self::LABELS.iter().find(|(known, _)| *known == address).map(|(_, name)| *name)
    }

    /// Returns `true` if `address` lies within the reserved predeploy range.
    pub fn in_reserved_range(address: Address) -> bool {
        let value = address_value(address);
        (address_value(Self::RANGE_START)..=address_value(Self::RANGE_END)).contains(&value)
    }
}

/// Interprets the address as a big-endian unsigned integer.
const fn address_value(address: Address) -> U160 {
    U160::from_be_bytes(address.0.0)
}

/// Returns `true` if `address` is a reserved system contract.
///
/// Matches the [`SystemContracts::NAMED`] addresses exactly, or any address in
/// the inclusive range [`SystemContracts::RANGE_START`]..=[`SystemContracts::RANGE_END`].
pub fn is_system_contract(address: Address) -> bool {
    SystemContracts::NAMED.contains(&address) || SystemContracts::in_reserved_range(address)
}
