#![allow(clippy::result_large_err)]

pub mod loader;
pub mod validation;

pub use loader::ConfigLoader;
pub use validation::ConfigValidator;

use crate::core::credentials::OnlyOfficeCredentials;
use crate::core::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Node configuration loaded from onlyoffice.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NodeConfig {
    /// Instance connection settings
    #[serde(default)]
    pub credentials: CredentialsConfig,

    /// Batch execution settings
    #[serde(default)]
    pub execution: ExecutionConfig,
}

/// Credentials section; both values are required before any call is made
#[derive(Clone, Serialize, Deserialize, Default)]
pub struct CredentialsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Execution configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExecutionConfig {
    /// Record per-item errors and keep going
    #[serde(default)]
    pub continue_on_fail: bool,

    /// HTTP client timeout; unset leaves reqwest's default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl NodeConfig {
    /// Resolve validated credentials from the loaded values.
    pub fn credentials(&self) -> Result<OnlyOfficeCredentials, AppError> {
        OnlyOfficeCredentials::new(
            self.credentials.base_url.as_deref().unwrap_or_default(),
            self.credentials.token.as_deref().unwrap_or_default(),
        )
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.execution.request_timeout_secs.map(Duration::from_secs)
    }
}
