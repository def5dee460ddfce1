#![allow(clippy::result_large_err)]

use super::NodeConfig;
use crate::core::error::{codes, AppError};

pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate configuration rules that do not need credentials
    pub fn validate(config: &NodeConfig) -> Result<(), AppError> {
        if config.execution.request_timeout_secs == Some(0) {
            return Err(AppError::new(
                crate::core::types::ErrorCategory::ConfigError,
                "execution.request_timeout_secs must be greater than zero",
            )
            .with_code(codes::CONFIG_INVALID));
        }

        // Present but malformed URLs are reported early; absent ones only when a call is made
        if let Some(base_url) = &config.credentials.base_url {
            if !base_url.trim().is_empty() {
                url::Url::parse(base_url.trim()).map_err(|err| {
                    AppError::new(
                        crate::core::types::ErrorCategory::ConfigError,
                        format!("credentials.base_url is not a valid URL: {}", err),
                    )
                    .with_code(codes::CONFIG_INVALID)
                })?;
            }
        }

        Ok(())
    }
}
