//! Node logging settings read from `.onlyoffice/config/logging.toml`.

use crate::Result;
use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::env;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::filter::EnvFilter;

pub const SETTINGS_FILE: &str = ".onlyoffice/config/logging.toml";
pub const LOG_DIR: &str = ".onlyoffice/logs";
pub const LOG_FILE_NAME: &str = "onlyoffice-node.log";

/// Console sink for human-readable log lines.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleOutput {
    Stdout,
    Stderr,
    None,
}

impl FromStr for ConsoleOutput {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "stdout" => Ok(Self::Stdout),
            "stderr" => Ok(Self::Stderr),
            "none" => Ok(Self::None),
            other => Err(format!(
                "unknown console output '{}', expected stdout, stderr or none",
                other
            )),
        }
    }
}

impl fmt::Display for ConsoleOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
            Self::None => "none",
        })
    }
}

/// The `[logging]` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSettings {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Write `onlyoffice-node.log`; off leaves the console sink only.
    pub file: bool,
    /// Log directory; relative paths hang off the workspace.
    pub directory: Option<PathBuf>,
    /// Overrides the execution context's console default.
    pub console: Option<ConsoleOutput>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: true,
            directory: None,
            console: None,
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct SettingsFile {
    logging: LogSettings,
}

impl LogSettings {
    /// Defaults, then the workspace settings file, then `ONLYOFFICE_CONSOLE_OUTPUT`.
    pub fn load(workspace: &Path) -> Result<Self> {
        let path = workspace.join(SETTINGS_FILE);
        let mut settings = match std::fs::read_to_string(&path) {
            Ok(content) => {
                toml::from_str::<SettingsFile>(&content)
                    .with_context(|| format!("invalid logging settings in {}", path.display()))?
                    .logging
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => LogSettings::default(),
            Err(err) => {
                return Err(anyhow::Error::new(err).context(format!(
                    "failed to read logging settings {}",
                    path.display()
                )))
            }
        };

        if let Ok(value) = env::var("ONLYOFFICE_CONSOLE_OUTPUT") {
            if !value.trim().is_empty() {
                settings.console = Some(value.parse::<ConsoleOutput>().map_err(|e| anyhow!(e))?);
            }
        }

        EnvFilter::try_new(&settings.level)
            .with_context(|| format!("invalid logging level '{}'", settings.level))?;
        Ok(settings)
    }

    /// `RUST_LOG` when set and valid, else the configured level.
    pub fn filter(&self) -> Result<EnvFilter> {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .with_context(|| format!("invalid logging level '{}'", self.level))
    }

    /// Log file location, or `None` when the file sink is off.
    pub fn log_file(&self, workspace: &Path) -> Option<PathBuf> {
        if !self.file {
            return None;
        }
        // an absolute directory replaces the workspace on join
        let directory = match &self.directory {
            Some(directory) => workspace.join(directory),
            None => workspace.join(LOG_DIR),
        };
        Some(directory.join(LOG_FILE_NAME))
    }
}
