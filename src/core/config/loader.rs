#![allow(clippy::result_large_err)]

use super::{ConfigValidator, NodeConfig};
use crate::core::error::{codes, AppError};
use std::env;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "onlyoffice.toml";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from workspace root (workspace/onlyoffice.toml)
    /// Environment variables override config file values
    pub fn load_from_workspace(workspace_path: &Path) -> Result<NodeConfig, AppError> {
        Self::load(None, workspace_path)
    }

    /// Load an explicit config file when given, else the workspace default.
    /// A missing default file is not an error; a missing explicit one is.
    pub fn load(explicit: Option<&Path>, workspace_path: &Path) -> Result<NodeConfig, AppError> {
        let config_file = match explicit {
            Some(path) => Some(Self::load_from_file(path)?.ok_or_else(|| {
                AppError::new(
                    crate::core::types::ErrorCategory::ConfigError,
                    format!("Config file {} does not exist", path.display()),
                )
                .with_code(codes::CONFIG_INVALID)
            })?),
            None => Self::load_from_file(&workspace_path.join(CONFIG_FILE_NAME))?,
        };

        let mut config = config_file.unwrap_or_default();

        // Apply environment variable overrides
        Self::apply_env_overrides(&mut config);

        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Load config from specific file path
    /// Returns Ok(None) if file doesn't exist
    pub fn load_from_file(path: &Path) -> Result<Option<NodeConfig>, AppError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::new(
                crate::core::types::ErrorCategory::IoError,
                format!("Failed to read config file {}: {}", path.display(), e),
            )
        })?;

        let config: NodeConfig = toml::from_str(&content).map_err(|e| {
            AppError::new(
                crate::core::types::ErrorCategory::ConfigError,
                format!("Failed to parse config file {}: {}", path.display(), e),
            )
            .with_code(codes::CONFIG_INVALID)
        })?;

        Ok(Some(config))
    }

    /// Apply environment variable overrides to the configuration
    /// Environment variables take precedence over config file values
    fn apply_env_overrides(config: &mut NodeConfig) {
        if let Ok(base_url) = env::var("ONLYOFFICE_BASE_URL") {
            config.credentials.base_url = Some(base_url);
        }

        if let Ok(token) = env::var("ONLYOFFICE_TOKEN") {
            config.credentials.token = Some(token);
        }

        if let Ok(continue_on_fail_str) = env::var("ONLYOFFICE_CONTINUE_ON_FAIL") {
            if let Ok(continue_on_fail) = continue_on_fail_str.parse::<bool>() {
                config.execution.continue_on_fail = continue_on_fail;
            }
        }

        if let Ok(timeout_str) = env::var("ONLYOFFICE_REQUEST_TIMEOUT_SECS") {
            if let Ok(timeout) = timeout_str.parse::<u64>() {
                config.execution.request_timeout_secs = Some(timeout);
            }
        }
    }

    /// Get documentation for supported environment variables
    pub fn env_var_documentation() -> &'static [&'static str] {
        &[
            "ONLYOFFICE_BASE_URL - Base URL of the OnlyOffice instance (required)",
            "ONLYOFFICE_TOKEN - API access token sent as a bearer token (required)",
            "ONLYOFFICE_CONTINUE_ON_FAIL - Record per-item errors and continue (true/false, default: false)",
            "ONLYOFFICE_REQUEST_TIMEOUT_SECS - HTTP request timeout in seconds (default: client default)",
        ]
    }
}
