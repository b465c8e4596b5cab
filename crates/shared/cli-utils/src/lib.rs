#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/base/base-utils/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub use clap;

mod args;
pub use args::{GlobalArgs, LogArgs};

mod cli;
pub use cli::CliStyles;

mod logging;
pub use logging::{
    ConsoleLogConfig, FileLogConfig, LogConfig, LogFormat, LogRotation, verbosity_to_level_filter,
};

mod subscriber;
pub use subscriber::{LOG_FILE_NAME, LogfmtFormatter, init_test_tracing};
pub use tracing_appender::non_blocking::WorkerGuard;
