//! Fixed gas limits by operation class.

use core::{fmt, str::FromStr};

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Gas limit for a plain value transfer.
pub const TRANSFER_GAS_LIMIT: u64 = 21_000;

/// Gas limit for a call into an existing contract.
pub const CONTRACT_CALL_GAS_LIMIT: u64 = 100_000;

/// Gas limit for a contract deployment.
pub const CONTRACT_DEPLOY_GAS_LIMIT: u64 = 2_000_000;

/// Gas limit used for every other operation code.
pub const DEFAULT_GAS_LIMIT: u64 = 50_000;

/// The kind of operation a gas limit is requested for.
///
/// Codes `0`, `1` and `2` map to the named variants; any other code is kept
/// in [`OperationClass::Other`] and falls back to [`DEFAULT_GAS_LIMIT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum OperationClass {
    /// Plain value transfer (code `0`).
    Transfer,
    /// Contract call (code `1`).
    ContractCall,
    /// Contract deployment (code `2`).
    ContractDeploy,
    /// Any other operation code.
    Other(u8),
}

impl OperationClass {
    /// Returns the numeric operation code.
    pub const fn code(self) -> u8 {
        match self {
            Self::Transfer => 0,
            Self::ContractCall => 1,
            Self::ContractDeploy => 2,
            Self::Other(code) => code,
        }
    }

    /// Returns the gas limit for this class.
    pub const fn gas_limit(self) -> u64 {
        optimized_gas_limit(self.code())
    }
}

impl From<u8> for OperationClass {
    fn from(code: u8) -> Self {
        match code {
            0 => Self::Transfer,
            1 => Self::ContractCall,
            2 => Self::ContractDeploy,
            other => Self::Other(other),
        }
    }
}

impl From<OperationClass> for u8 {
    fn from(class: OperationClass) -> Self {
        class.code()
    }
}

impl fmt::Display for OperationClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transfer => f.write_str("transfer"),
            Self::ContractCall => f.write_str("call"),
            Self::ContractDeploy => f.write_str("deploy"),
            Self::Other(code) => write!(f, "other({code})"),
        }
    }
}

/// Error returned when a string is neither a known class name nor a `u8` code.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("invalid operation class: {input}")]
pub struct OperationClassParseError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for OperationClass {
    type Err = OperationClassParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "transfer" => Ok(Self::Transfer),
            "call" | "contract-call" => Ok(Self::ContractCall),
            "deploy" | "contract-deploy" => Ok(Self::ContractDeploy),
            other => other
                .parse::<u8>()
                .map(Self::from)
                .map_err(|_| OperationClassParseError { input: s.to_string() }),
        }
    }
}

/// Returns the gas limit for the operation class `code`.
///
/// Unrecognized codes fall through to [`DEFAULT_GAS_LIMIT`].
pub const fn optimized_gas_limit(code: u8) -> u64 {
    match code {
        0 => TRANSFER_GAS_LIMIT,
        1 => CONTRACT_CALL_GAS_LIMIT,
        2 => CONTRACT_DEPLOY_GAS_LIMIT,
        _ => DEFAULT_GAS_LIMIT,
    }
}
