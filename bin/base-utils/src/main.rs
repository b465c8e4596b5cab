#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/base/base-utils/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod cli;
pub mod commands;
pub mod output;

fn main() {
    let cli = base_cli_utils::parse_cli!(cli::Cli);

    if let Err(err) = cli.run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}
