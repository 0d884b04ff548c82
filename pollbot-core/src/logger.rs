//! Tracing setup: one fmt layer with a local timestamp, teed to stdout and (optionally) a log file.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::Writer, fmt::time::FormatTime, fmt::writer::MakeWriterExt,
    layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

/// Local time as `YYYY-MM-DD HH:MM:SS`.
struct ChronoLocal;

impl FormatTime for ChronoLocal {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{} ", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber. Level comes from `RUST_LOG` (default `info`), so load `.env` first.
///
/// With `log_file = Some(path)` every line also goes to `path` (append, no ANSI); missing parent
/// directories are created. With `None` only stdout is used.
pub fn init_tracing(log_file: Option<&Path>) -> anyhow::Result<()> {
    let event_format = tracing_subscriber::fmt::format()
        .with_timer(ChronoLocal)
        .with_level(true)
        .with_target(true);

    let registry = Registry::default().with(env_filter());

    let result = match log_file {
        Some(path) => {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(dir)?;
            }
            let file = Arc::new(OpenOptions::new().create(true).append(true).open(path)?);
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(io::stdout.and(file))
                        .event_format(event_format)
                        .with_ansi(false),
                )
                .try_init()
        }
        None => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(io::stdout)
                    .event_format(event_format),
            )
            .try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))
}
