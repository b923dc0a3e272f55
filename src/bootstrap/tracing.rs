//! Tracing configuration for AgentGit
//!
//! ## Behavior / 行为
//!
//! - stderr output always, so command results on stdout stay clean
//! - optional non-blocking file output in `<app data>/logs/agentgit.log`
//! - `RUST_LOG` overrides the default filter

use std::{fs, io, path::Path};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

const LOG_FILE_NAME: &str = "agentgit.log";
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives: `debug` for development builds, `info`
/// otherwise.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    vec![
        if is_dev { "debug" } else { "info" }.to_string(),
        if is_dev { "ag_app=debug" } else { "ag_app=info" }.to_string(),
        if is_dev { "ag_infra=debug" } else { "ag_infra=info" }.to_string(),
        if is_dev { "agentgit_lib=debug" } else { "agentgit_lib=info" }.to_string(),
    ]
}

/// Initialize the global tracing subscriber.
///
/// Pass `log_dir` to also write logs to a file there. A file writer that
/// cannot be created is reported on stderr and skipped.
///
/// The returned guard flushes the file writer when dropped; hold it until
/// the command has finished, or the last buffered lines are lost.
///
/// ## Errors / 错误
///
/// A subscriber is already registered (call once per process).
pub fn init_tracing_subscriber(log_dir: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let (file_writer, guard) = match log_dir.map(build_file_writer).transpose() {
        Ok(Some((writer, guard))) => (Some(writer), Some(guard)),
        Ok(None) => (None, None),
        Err(err) => {
            eprintln!("Failed to initialize file logging, continuing with stderr only: {err}");
            (None, None)
        }
    };

    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIME_FORMAT.to_string()))
        .with_level(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(BoxMakeWriter::new(io::stderr));

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIME_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}

fn build_file_writer(log_dir: &Path) -> anyhow::Result<(NonBlocking, WorkerGuard)> {
    fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    Ok(tracing_appender::non_blocking(file_appender))
}
