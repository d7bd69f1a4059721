use anyhow::{Context, Result};
use podview_runtime_config::{LOG_ENV_VAR, ViewerConfig};
use std::path::Path;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `PODVIEW_LOG` wins over `log.level`.
///
/// While the TUI owns the terminal, logs go to a file. The returned guard
/// flushes that file and must outlive the viewer.
pub fn init(config: &ViewerConfig, tui_mode: bool) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(&config.log.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    if !tui_mode {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
        return None;
    }

    let path = config.log_file()?;
    match file_writer(&path) {
        Ok((writer, guard)) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(writer)
                .try_init();
            Some(guard)
        }
        Err(e) => {
            eprintln!("warning: logging disabled: {:#}", e);
            None
        }
    }
}

/// Non-blocking appender for a single, never-rotated log file.
fn file_writer(path: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("invalid log file path {}", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .with_context(|| format!("opening log file {}", path.display()))?;
    Ok(tracing_appender::non_blocking(appender))
}
