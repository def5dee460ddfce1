#![allow(clippy::result_large_err)]

use crate::core::error::{codes, AppError};
use crate::core::types::ErrorCategory;
use std::fmt;
use url::Url;

/// Fixed prefix of the files API below the instance base URL.
pub const API_PREFIX: &str = "/api/2.0";

/// Bearer token that never prints its value.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretToken(String);

impl SecretToken {
    pub fn new<T: Into<String>>(token: T) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretToken(***)")
    }
}

/// Validated connection settings for an OnlyOffice instance.
#[derive(Debug, Clone)]
pub struct OnlyOfficeCredentials {
    base_url: Url,
    token: SecretToken,
}

impl OnlyOfficeCredentials {
    pub fn new(base_url: &str, token: &str) -> Result<Self, AppError> {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return Err(config_error("credentials.base_url is required")
                .with_suggestion("Set ONLYOFFICE_BASE_URL or [credentials].base_url"));
        }
        let parsed = Url::parse(trimmed).map_err(|err| {
            config_error(format!("invalid credentials.base_url '{}': {}", trimmed, err))
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(config_error(format!(
                "credentials.base_url must use http or https, got '{}'",
                parsed.scheme()
            )));
        }
        if token.trim().is_empty() {
            return Err(config_error("credentials.token is required")
                .with_suggestion("Set ONLYOFFICE_TOKEN or [credentials].token"));
        }
        Ok(Self {
            base_url: parsed,
            token: SecretToken::new(token.trim()),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn token(&self) -> &SecretToken {
        &self.token
    }

    /// Base URL with the API prefix appended and no trailing slash.
    pub fn api_base(&self) -> String {
        format!(
            "{}{}",
            self.base_url.as_str().trim_end_matches('/'),
            API_PREFIX
        )
    }

    /// Value of the `Authorization` header attached to every call.
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.token.expose())
    }
}

fn config_error<T: Into<String>>(message: T) -> AppError {
    AppError::new(ErrorCategory::ConfigError, message).with_code(codes::CONFIG_INVALID)
}
