pub mod context;
pub mod settings;
pub mod sinks;

pub use context::{detect_context, ExecutionContext};
pub use settings::{ConsoleOutput, LogSettings};

use crate::{cli::Command, Result};
use anyhow::{anyhow, Context};
use std::env;
use std::io;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::prelude::*;

/// Keeps the file sink flushing until the command finishes.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Install the global subscriber for one CLI invocation.
///
/// A second call in the same process fails because the global default is already set.
pub fn init(command: &Command) -> Result<LoggingGuard> {
    let workspace = workspace_root()?;
    let settings = LogSettings::load(&workspace)?;
    let filter = settings.filter()?;

    let context = detect_context(command);
    let console = settings.console.unwrap_or_else(|| context.default_console());
    let log_file = settings.log_file(&workspace);
    let (file_sink, file_guard) = match &log_file {
        Some(path) => {
            let (writer, guard) = sinks::file_writer(path)?;
            (writer, Some(guard))
        }
        None => (BoxMakeWriter::new(io::sink), None),
    };

    tracing_subscriber::registry()
        .with(sinks::layer(file_sink))
        .with(sinks::layer(sinks::console_writer(console)))
        .with(filter)
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::debug!(
        context = ?context,
        console = %console,
        log_file = ?log_file,
        "logging initialized"
    );

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Directory holding `.onlyoffice/`: the working directory, else the home directory.
fn workspace_root() -> Result<PathBuf> {
    env::current_dir()
        .ok()
        .or_else(dirs_next::home_dir)
        .ok_or_else(|| anyhow!("neither the working directory nor $HOME is available"))
}
