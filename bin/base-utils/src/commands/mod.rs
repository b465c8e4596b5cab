//! Contains cli commands.

use std::io::Write;

use base_cli_utils::GlobalArgs;
use clap::Subcommand;

pub mod address;
pub use address::{ExplorerCommand, HexCommand, SystemCommand};

pub mod gas;
pub use gas::{GasLimitCommand, L1GasCommand};

pub mod network;
pub use network::NetworkCommand;

pub mod tx;
pub use tx::TxHashCommand;

/// Subcommands for the CLI.
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Classifies the selected network.
    #[command(alias = "n")]
    Network(NetworkCommand),
    /// Estimates the L1 calldata gas of a payload.
    #[command(name = "l1-gas")]
    L1Gas(L1GasCommand),
    /// Looks up the gas limit for an operation class.
    #[command(name = "gas-limit")]
    GasLimit(GasLimitCommand),
    /// Checks whether an address is a reserved system contract.
    System(SystemCommand),
    /// Computes the fingerprint of a transaction.
    #[command(name = "tx-hash")]
    TxHash(TxHashCommand),
    /// Prints the block explorer link for an address.
    Explorer(ExplorerCommand),
    /// Prints an address as lowercase hex.
    Hex(HexCommand),
}

impl Commands {
    /// Runs the command, writing its result to `out`.
    pub fn run<W: Write>(&self, global: &GlobalArgs, out: W) -> eyre::Result<()> {
        match self {
            Self::Network(cmd) => crate::output::emit(&cmd.report(global), global.json, out),
            Self::L1Gas(cmd) => crate::output::emit(&cmd.report(global), global.json, out),
            Self::GasLimit(cmd) => crate::output::emit(&cmd.report(), global.json, out),
            Self::System(cmd) => crate::output::emit(&cmd.report(), global.json, out),
            Self::TxHash(cmd) => crate::output::emit(&cmd.report(global)?, global.json, out),
            Self::Explorer(cmd) => crate::output::emit(&cmd.report(global), global.json, out),
            Self::Hex(cmd) => crate::output::emit(&cmd.report(), global.json, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::cli::Cli;

    const L1_BLOCK: &str = "0x4200000000000000000000000000000000000015";

    fn run(args: &[&str]) -> String {
        base_cli_utils::init_test_tracing();
        let cli = Cli::try_parse_from(std::iter::once("base-utils").chain(args.iter().copied()))
            .unwrap();
        let mut out = Vec::new();
        cli.execute(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn network_text() {
        assert_eq!(run(&["network"]), "Base Mainnet (chain id 8453)\n");
        assert_eq!(run(&["-n", "1", "network"]), "Unknown (chain id 1)\n");
    }

    #[test]
    fn l1_gas_text() {
        assert_eq!(run(&["l1-gas", "0x00ff00"]), "24\n");
        assert_eq!(run(&["-n", "1", "l1-gas", "0x00ff00"]), "0\n");
    }

    #[test]
    fn gas_limit_text() {
        assert_eq!(run(&["gas-limit", "deploy"]), "2000000\n");
        assert_eq!(run(&["gas-limit", "9"]), "50000\n");
    }

    #[test]
    fn explorer_json() {
        let out = run(&["--json", "-n", "84532", "explorer", L1_BLOCK]);
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["chain_id"], 84532);
        assert_eq!(
            json["url"],
            "https://sepolia.basescan.org/address/0x4200000000000000000000000000000000000015"
        );
    }

    #[test]
    fn hex_text() {
        assert_eq!(
            run(&["hex", "0xD8DA6BF26964AF9D7EED9E03E53415D37AA96045"]),
            "0xd8da6bf26964af9d7eed9e03e53415d37aa96045\n"
        );
    }

    #[test]
    fn invalid_calldata_is_rejected() {
        assert!(Cli::try_parse_from(["base-utils", "l1-gas", "0xzz"]).is_err());
    }
}
