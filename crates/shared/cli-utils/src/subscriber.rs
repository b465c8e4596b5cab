//! Tracing subscriber initialization.

use std::{
    fmt,
    io::{self, IsTerminal},
    sync::Once,
};

use tracing::{Dispatch, Subscriber};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{
        FmtContext, FormattedFields, MakeWriter,
        format::{FormatEvent, FormatFields, Writer},
        time::{FormatTime, SystemTime},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

use crate::{FileLogConfig, LogConfig, LogFormat, LogRotation};

/// File name prefix of rolling log files.
pub const LOG_FILE_NAME: &str = "base-utils.log";

/// Logfmt event formatter.
///
/// Emits `time="..." level=INFO target=base_utils msg="estimated gas gas=24"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogfmtFormatter;

impl<S, N> FormatEvent<S, N> for LogfmtFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        write!(writer, "time=\"")?;
        SystemTime.format_time(&mut writer)?;
        write!(writer, "\" level={} target={} msg=\"", meta.level(), meta.target())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        write!(writer, "\"")?;

        if let Some(scope) = ctx.event_scope() {
            for span in scope.from_root() {
                write!(writer, " {}={{", span.name())?;
                if let Some(fields) = span.extensions().get::<FormattedFields<N>>() {
                    write!(writer, "{fields}")?;
                }
                write!(writer, "}}")?;
            }
        }

        writeln!(writer)
    }
}

impl From<LogRotation> for Rotation {
    fn from(rotation: LogRotation) -> Self {
        match rotation {
            LogRotation::Minutely => Self::MINUTELY,
            LogRotation::Hourly => Self::HOURLY,
            LogRotation::Daily => Self::DAILY,
            LogRotation::Never => Self::NEVER,
        }
    }
}

impl LogConfig {
    /// Installs the global tracing subscriber with console logs on stderr.
    ///
    /// `RUST_LOG` directives override [`LogConfig::global_level`]. When file
    /// logging is enabled the returned guard flushes the background writer on
    /// drop and must be held until the program exits.
    pub fn init_tracing_subscriber(&self) -> eyre::Result<Option<WorkerGuard>> {
        let (dispatch, guard) = self.dispatch(io::stderr, io::stderr().is_terminal());

        dispatch
            .try_init()
            .map_err(|e| eyre::eyre!("Failed to initialize tracing subscriber: {e}"))?;

        Ok(guard)
    }

    /// Builds the subscriber without installing it, sending console logs to `console`.
    ///
    /// Events reach the file layer through a background writer that stops when
    /// the returned guard is dropped.
    pub fn dispatch<W>(&self, console: W, ansi: bool) -> (Dispatch, Option<WorkerGuard>)
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let filter =
            EnvFilter::builder().with_default_directive(self.global_level.into()).from_env_lossy();

        let console_layer =
            self.console_logs.map(|console_logs| format_layer(console_logs.format, console, ansi));

        let (file_layer, guard) = match self.file_logs.as_ref() {
            Some(config) => {
                let (layer, guard) = build_file_layer(config);
                (Some(layer), Some(guard))
            }
            None => (None, None),
        };

        let subscriber =
            tracing_subscriber::registry().with(filter).with(console_layer).with(file_layer);

        (Dispatch::new(subscriber), guard)
    }
}

fn build_file_layer<S>(config: &FileLogConfig) -> (Box<dyn Layer<S> + Send + Sync>, WorkerGuard)
where
    S: Subscriber + for<'a> LookupSpan<'a> + Send + Sync,
{
    let appender =
        RollingFileAppender::new(config.rotation.into(), &config.directory_path, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    (format_layer(config.format, writer, false), guard)
}

fn format_layer<S, W>(format: LogFormat, writer: W, ansi: bool) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a> + Send + Sync,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let base = tracing_subscriber::fmt::layer().with_writer(writer).with_ansi(ansi);

    match format {
        LogFormat::Full => base.boxed(),
        LogFormat::Compact => base.compact().boxed(),
        LogFormat::Json => base.json().boxed(),
        LogFormat::Pretty => base.pretty().boxed(),
        LogFormat::Logfmt => base.event_format(LogfmtFormatter).boxed(),
    }
}

/// Initializes tracing for tests, writing through the test harness capture.
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_test_tracing() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
            .from_env_lossy();

        let _ = tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().try_init();
    });
}
