//! Top level command line interface.

use std::io::Write;

use base_cli_utils::GlobalArgs;
use clap::Parser;

use crate::commands::Commands;

/// Chain classification, calldata gas and address helpers for Base.
#[derive(Debug, Clone, Parser)]
pub struct Cli {
    /// Global arguments.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// The command to run.
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Installs logging and runs the selected command, printing its result to stdout.
    pub fn run(self) -> eyre::Result<()> {
        let _guard = self.global.init_tracing()?;
        self.execute(std::io::stdout().lock())
    }

    /// Runs the selected command, writing its result to `out`.
    pub fn execute<W: Write>(self, out: W) -> eyre::Result<()> {
        tracing::debug!(
            target: "cli",
            chain_id = self.global.chain_id(),
            command = ?self.command,
            "running command"
        );
        self.command.run(&self.global, out)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use clap::CommandFactory;

    use super::*;

    struct LogSink(Arc<Mutex<Vec<u8>>>);

    impl Write for LogSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["base-utils", "network", "--json", "-n", "84532"]).unwrap();
        assert!(cli.global.json);
        assert_eq!(cli.global.chain_id(), 84532);
    }

    #[test]
    fn json_output_is_free_of_logs() {
        let cli =
            Cli::try_parse_from(["base-utils", "-n", "1", "-vvvvv", "--json", "network"]).unwrap();

        let logs = Arc::new(Mutex::new(Vec::new()));
        let writer = Arc::clone(&logs);
        let (dispatch, _guard) = cli
            .global
            .logging
            .to_config()
            .dispatch(move || LogSink(Arc::clone(&writer)), false);

        let mut out = Vec::new();
        tracing::dispatcher::with_default(&dispatch, || cli.execute(&mut out)).unwrap();

        let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(report["chain_id"], 1);
        assert_eq!(report["recognized"], false);

        let logs = String::from_utf8(logs.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("running command"), "{logs}");
        assert!(logs.contains("not a Base network"), "{logs}");
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["base-utils"]).is_err());
    }
}
