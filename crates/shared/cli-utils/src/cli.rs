//! CLI parsing utilities.

use clap::builder::{
    Styles,
    styling::{AnsiColor, Color, Style},
};

/// Help and error styling shared by the Base utility binaries.
#[derive(Debug, Clone, Copy)]
pub struct CliStyles;

impl CliStyles {
    /// Returns the [`Styles`] applied by [`parse_cli!`](crate::parse_cli).
    pub const fn init() -> Styles {
        let heading = Style::new().bold().underline().fg_color(Some(Color::Ansi(AnsiColor::Blue)));
        let failure = Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Red)));

        Styles::styled()
            .usage(heading)
            .header(heading)
            .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
            .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::White))))
            .valid(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Green))))
            .invalid(failure)
            .error(failure)
    }
}

/// Parses CLI arguments, stamping the calling binary's name, version and description.
///
/// ```ignore
/// let cli = base_cli_utils::parse_cli!(Cli);
/// ```
#[macro_export]
macro_rules! parse_cli {
    ($cli_type:ty) => {{
        use $crate::clap::{CommandFactory, FromArgMatches};

        let cmd = <$cli_type>::command()
            .name(env!("CARGO_BIN_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .about(env!("CARGO_PKG_DESCRIPTION"))
            .styles($crate::CliStyles::init());
        let matches = cmd.get_matches();
        <$cli_type>::from_arg_matches(&matches).unwrap_or_else(|err| err.exit())
    }};
}
