//! Logging configuration types.
//!
//! [`LogConfig`] is the resolved form of the [`LogArgs`](crate::LogArgs) flags and is
//! what [`LogConfig::init_tracing_subscriber`] consumes.

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Full format with timestamp, level, target and spans.
    #[default]
    Full,
    /// Compact single-line format.
    Compact,
    /// Newline delimited JSON.
    Json,
    /// Multi-line, human oriented format.
    Pretty,
    /// `key=value` pairs, see [`LogfmtFormatter`](crate::LogfmtFormatter).
    Logfmt,
}

/// Rotation of log files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    /// Rotate every minute.
    Minutely,
    /// Rotate every hour.
    Hourly,
    /// Rotate every day.
    Daily,
    /// Never rotate.
    #[default]
    Never,
}

/// Configuration for file logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLogConfig {
    /// Directory the log files are written to.
    pub directory_path: PathBuf,
    /// Format of the file logs.
    pub format: LogFormat,
    /// Rotation of the log files.
    pub rotation: LogRotation,
}

/// Configuration for console logging.
///
/// Console logs are written to stderr, leaving stdout to command output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleLogConfig {
    /// Format of the console logs.
    pub format: LogFormat,
}

/// Global logging configuration.
///
/// Defaults to `INFO` logs on stderr in the full format, without file logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Global verbosity level.
    pub global_level: LevelFilter,
    /// Console logging, `None` when quiet.
    pub console_logs: Option<ConsoleLogConfig>,
    /// File logging, `None` when disabled.
    pub file_logs: Option<FileLogConfig>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global_level: LevelFilter::INFO,
            console_logs: Some(ConsoleLogConfig { format: LogFormat::Full }),
            file_logs: None,
        }
    }
}

/// Maps a `-v` count to a level filter.
///
/// `0` disables logging, `1`=ERROR, `2`=WARN, `3`=INFO, `4`=DEBUG, `5+`=TRACE.
pub const fn verbosity_to_level_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::OFF,
        1 => LevelFilter::ERROR,
        2 => LevelFilter::WARN,
        3 => LevelFilter::INFO,
        4 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::off(0, LevelFilter::OFF)]
    #[case::error(1, LevelFilter::ERROR)]
    #[case::warn(2, LevelFilter::WARN)]
    #[case::info(3, LevelFilter::INFO)]
    #[case::debug(4, LevelFilter::DEBUG)]
    #[case::trace(5, LevelFilter::TRACE)]
    #[case::saturates(42, LevelFilter::TRACE)]
    fn test_verbosity_to_level_filter(#[case] verbosity: u8, #[case] expected: LevelFilter) {
        assert_eq!(verbosity_to_level_filter(verbosity), expected);
    }

    #[test]
    fn test_default_config() {
        let config = LogConfig::default();
        assert_eq!(config.global_level, LevelFilter::INFO);
        assert_eq!(config.console_logs, Some(ConsoleLogConfig { format: LogFormat::Full }));
        assert!(config.file_logs.is_none());
    }

    #[test]
    fn test_format_serde() {
        assert_eq!(serde_json::to_string(&LogFormat::Logfmt).unwrap(), "\"logfmt\"");
        let rotation: LogRotation = serde_json::from_str("\"daily\"").unwrap();
        assert_eq!(rotation, LogRotation::Daily);
    }
}
