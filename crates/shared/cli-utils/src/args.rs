//! Global CLI arguments for the Base utilities.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::{
    ConsoleLogConfig, FileLogConfig, LogConfig, LogFormat, LogRotation, WorkerGuard,
    verbosity_to_level_filter,
};

/// Logging flags.
///
/// Logs never share stdout with command output: the console copy goes to
/// stderr and `--log-dir` adds a file copy.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
pub struct LogArgs {
    /// Verbosity, one `-v` per level: ERROR, WARN, INFO, DEBUG, TRACE.
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        default_value = "3",
        env = "BASE_UTILS_LOG_LEVEL",
        global = true
    )]
    pub level: u8,

    /// Do not log to stderr.
    #[arg(long = "quiet", short = 'q', global = true)]
    pub quiet: bool,

    /// Format of the stderr logs.
    #[arg(
        long = "log-format",
        default_value = "full",
        env = "BASE_UTILS_LOG_FORMAT",
        global = true
    )]
    pub console_format: LogFormat,

    /// Also write logs to rolling files in this directory.
    #[arg(long = "log-dir", env = "BASE_UTILS_LOG_DIR", global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Format of the file logs.
    #[arg(long = "log-file-format", default_value = "json", global = true)]
    pub file_format: LogFormat,

    /// How often a new log file is started.
    #[arg(long = "log-rotation", default_value = "never", global = true)]
    pub rotation: LogRotation,
}

impl Default for LogArgs {
    fn default() -> Self {
        Self {
            level: 3,
            quiet: false,
            console_format: LogFormat::Full,
            log_dir: None,
            file_format: LogFormat::Json,
            rotation: LogRotation::Never,
        }
    }
}

impl LogArgs {
    /// Resolves the flags into a [`LogConfig`].
    pub fn to_config(&self) -> LogConfig {
        LogConfig {
            global_level: verbosity_to_level_filter(self.level),
            console_logs: (!self.quiet)
                .then_some(ConsoleLogConfig { format: self.console_format }),
            file_logs: self.log_dir.clone().map(|directory_path| FileLogConfig {
                directory_path,
                format: self.file_format,
                rotation: self.rotation,
            }),
        }
    }
}

impl From<LogArgs> for LogConfig {
    fn from(args: LogArgs) -> Self {
        args.to_config()
    }
}

/// Global arguments shared across all commands.
///
/// The chain defaults to Base Mainnet (8453). Can be set via `--network` or the
/// `BASE_UTILS_NETWORK` env var, either as a numeric id or a chain name.
#[derive(Debug, Clone, Parser)]
pub struct GlobalArgs {
    /// Chain ID or name (8453 = Base Mainnet, 84532 = Base Sepolia).
    #[arg(
        long = "network",
        alias = "chain-id",
        short = 'n',
        global = true,
        default_value = "8453",
        env = "BASE_UTILS_NETWORK"
    )]
    pub chain: alloy_chains::Chain,

    /// Print results as JSON instead of plain text.
    #[arg(long = "json", global = true, env = "BASE_UTILS_JSON")]
    pub json: bool,

    /// Logging configuration.
    #[command(flatten)]
    pub logging: LogArgs,
}

impl GlobalArgs {
    /// Returns the numeric id of the selected chain.
    pub fn chain_id(&self) -> u64 {
        self.chain.id()
    }

    /// Installs the global tracing subscriber from the logging flags.
    ///
    /// Hold the returned guard for the rest of the run, file logs are lost
    /// once it is dropped.
    pub fn init_tracing(&self) -> eyre::Result<Option<WorkerGuard>> {
        self.logging.to_config().init_tracing_subscriber()
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use rstest::rstest;
    use tracing::level_filters::LevelFilter;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        log: LogArgs,
    }

    #[derive(Parser)]
    struct GlobalCli {
        #[command(flatten)]
        global: GlobalArgs,
    }

    fn parse_log_args(args: &[&str]) -> LogArgs {
        TestCli::parse_from(std::iter::once("test").chain(args.iter().copied())).log
    }

    fn parse_global_args(args: &[&str]) -> GlobalArgs {
        GlobalCli::parse_from(std::iter::once("test").chain(args.iter().copied())).global
    }

    #[rstest]
    #[case::default(&[], 3)]
    #[case::single_v(&["-v"], 1)]
    #[case::double_v(&["-vv"], 2)]
    #[case::quad_v(&["-vvvv"], 4)]
    #[case::quint_v(&["-vvvvv"], 5)]
    fn verbosity_parsing(#[case] args: &[&str], #[case] expected: u8) {
        // ArgAction::Count replaces the default once any -v is given.
        assert_eq!(parse_log_args(args).level, expected);
    }

    #[rstest]
    #[case::short(&["-q"])]
    #[case::long(&["--quiet"])]
    fn quiet_mode(#[case] args: &[&str]) {
        assert!(parse_log_args(args).quiet);
    }

    #[rstest]
    #[case::full("full", LogFormat::Full)]
    #[case::compact("compact", LogFormat::Compact)]
    #[case::json("json", LogFormat::Json)]
    #[case::pretty("pretty", LogFormat::Pretty)]
    #[case::logfmt("logfmt", LogFormat::Logfmt)]
    fn console_format_parsing(#[case] format_str: &str, #[case] expected: LogFormat) {
        assert_eq!(parse_log_args(&["--log-format", format_str]).console_format, expected);
    }

    #[test]
    fn default_matches_parsed_defaults() {
        assert_eq!(LogArgs::default(), parse_log_args(&[]));
        assert_eq!(LogArgs::default().to_config(), LogConfig::default());
    }

    #[test]
    fn quiet_drops_console_logs() {
        let config: LogConfig = LogArgs { quiet: true, ..Default::default() }.into();
        assert_eq!(config.global_level, LevelFilter::INFO);
        assert!(config.console_logs.is_none());
    }

    #[test]
    fn log_dir_enables_file_logs() {
        let args = parse_log_args(&["--log-dir", "/var/log/base", "--log-rotation", "hourly"]);
        assert_eq!(args.log_dir.as_deref(), Some(std::path::Path::new("/var/log/base")));

        let file_config = args.to_config().file_logs.unwrap();
        assert_eq!(file_config.directory_path, PathBuf::from("/var/log/base"));
        assert_eq!(file_config.format, LogFormat::Json);
        assert_eq!(file_config.rotation, LogRotation::Hourly);
    }

    #[test]
    fn global_args_default_chain() {
        let global = parse_global_args(&[]);
        assert_eq!(global.chain_id(), 8453);
        assert!(!global.json);
    }

    #[rstest]
    #[case::base_mainnet(&["--network", "8453"], 8453)]
    #[case::base_sepolia(&["--network", "84532"], 84532)]
    #[case::alias(&["--chain-id", "84532"], 84532)]
    #[case::short(&["-n", "1"], 1)]
    #[case::named(&["--network", "base"], 8453)]
    fn chain_parsing(#[case] args: &[&str], #[case] expected_id: u64) {
        assert_eq!(parse_global_args(args).chain_id(), expected_id);
    }

    #[test]
    fn json_flag() {
        assert!(parse_global_args(&["--json"]).json);
    }

    #[test]
    fn env_var_names() {
        use clap::CommandFactory;

        let cmd = GlobalCli::command();
        let env_of = |long: &str| {
            cmd.get_arguments()
                .find(|a| a.get_long() == Some(long))
                .and_then(|a| a.get_env())
                .and_then(|e| e.to_str())
                .map(str::to_owned)
        };

        assert_eq!(env_of("network").as_deref(), Some("BASE_UTILS_NETWORK"));
        assert_eq!(env_of("verbose").as_deref(), Some("BASE_UTILS_LOG_LEVEL"));
        assert_eq!(env_of("log-format").as_deref(), Some("BASE_UTILS_LOG_FORMAT"));
        assert_eq!(env_of("log-dir").as_deref(), Some("BASE_UTILS_LOG_DIR"));
    }
}
