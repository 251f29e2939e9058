use std::{
    fs::File,
    io::{self, IsTerminal},
    path::Path,
    sync::Mutex,
};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{Event, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

use crate::config::LoggingConfig;

/// Filter used when nothing else is configured. Kept quiet so log lines
/// don't crowd the interactive prompts.
pub const DEFAULT_FILTER: &str = "warn";

/// Plain-text file format: local timestamp, level, source location, fields.
struct FileFmt;

impl<S, N> FormatEvent<S, N> for FileFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        write!(
            writer,
            "{} {:>5} ",
            Local::now().format("%Y-%m-%dT%H:%M:%S%.6f%:z"),
            meta.level()
        )?;

        let file = meta.file().map(|f| {
            f.strip_prefix("src/")
                .or_else(|| f.strip_prefix("src\\"))
                .unwrap_or(f)
        });
        if let (Some(file), Some(line)) = (file, meta.line()) {
            write!(writer, "{file}:{line} ")?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Picks the active filter directive.
///
/// Precedence: command line, then `RUST_LOG`, then the config file, then
/// [`DEFAULT_FILTER`]. Blank values are skipped.
pub fn resolve_filter(
    cli: Option<&str>,
    env: Option<&str>,
    config: Option<&str>,
) -> String {
    [cli, env, config]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

fn open_log_file(path: &Path) -> Result<File> {
    File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))
}

/// Initializes logging. Call once at startup.
///
/// - Stderr: compact, no timestamps or targets; colored on a terminal.
/// - File: only when `config.file` is set, appended in plain text.
pub fn init(
    config: &LoggingConfig,
    cli_level: Option<&str>,
) -> Result<()> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = resolve_filter(cli_level, env.as_deref(), config.level.as_deref());
    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("invalid log level '{directive}'"))?;

    let stderr_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr);

    let file_layer = match &config.file {
        Some(path) => Some(
            tracing_subscriber::fmt::layer()
                .event_format(FileFmt)
                .with_ansi(false)
                .with_writer(Mutex::new(open_log_file(path)?)),
        ),
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("logging already initialized")?;

    tracing::debug!(filter = %directive, "logging initialized");
    Ok(())
}
