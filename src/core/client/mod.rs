#![allow(clippy::result_large_err)] // Transport returns AppError so HTTP failures keep status and body context.

use crate::core::credentials::OnlyOfficeCredentials;
use crate::core::error::{codes, AppError};
use crate::core::node::request::{HttpMethod, RequestSpec};
use crate::core::types::ErrorCategory;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use std::time::Duration;

/// Longest response body excerpt kept in error context.
const ERROR_BODY_LIMIT: usize = 512;

/// Sends one request description and returns the decoded body.
///
/// Bodies that are not JSON come back as a `Value::String` so that callers can
/// decide how to interpret them.
#[async_trait]
pub trait FilesTransport: Send + Sync + 'static {
    async fn send(&self, request: &RequestSpec) -> Result<Value, AppError>;
}

/// reqwest-backed client for the files API.
#[derive(Clone)]
pub struct FilesApiClient {
    http: reqwest::Client,
    credentials: OnlyOfficeCredentials,
    api_base: String,
}

impl FilesApiClient {
    pub fn new(credentials: OnlyOfficeCredentials) -> Self {
        Self::with_http(reqwest::Client::new(), credentials)
    }

    /// Build a client whose requests give up after `timeout`.
    pub fn with_timeout(
        credentials: OnlyOfficeCredentials,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| {
                AppError::with_source(
                    ErrorCategory::ConfigError,
                    "failed to build HTTP client",
                    Box::new(err),
                )
                .with_code(codes::CONFIG_INVALID)
            })?;
        Ok(Self::with_http(http, credentials))
    }

    pub fn with_http(http: reqwest::Client, credentials: OnlyOfficeCredentials) -> Self {
        let api_base = credentials.api_base();
        Self {
            http,
            credentials,
            api_base,
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn url_for(&self, request: &RequestSpec) -> String {
        format!("{}{}", self.api_base, request.path)
    }
}

#[async_trait]
impl FilesTransport for FilesApiClient {
    async fn send(&self, request: &RequestSpec) -> Result<Value, AppError> {
        let url = self.url_for(request);
        tracing::debug!(method = %request.method, path = %request.path, "sending files api request");

        let mut builder = self
            .http
            .request(to_method(request.method), &url)
            .header(AUTHORIZATION, self.credentials.authorization_header())
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|err| {
            let mut error = AppError::with_source(
                ErrorCategory::HttpError,
                format!("{} {} failed: {}", request.method, request.path, err),
                Box::new(err),
            )
            .with_code(codes::HTTP_TRANSPORT);
            error.add_context("url", &url);
            error
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|err| {
            AppError::with_source(
                ErrorCategory::HttpError,
                format!("failed to read response body from {}", request.path),
                Box::new(err),
            )
            .with_code(codes::HTTP_TRANSPORT)
        })?;

        if !status.is_success() {
            return Err(status_error(request, status, &text));
        }

        tracing::debug!(status = status.as_u16(), bytes = text.len(), "files api response");
        Ok(decode_body(text))
    }
}

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

fn status_error(request: &RequestSpec, status: StatusCode, body: &str) -> AppError {
    let mut error = if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        AppError::new(
            ErrorCategory::AuthenticationError,
            format!(
                "{} {} was rejected with status {}",
                request.method, request.path, status
            ),
        )
        .with_code(codes::HTTP_UNAUTHORIZED)
        .with_suggestion("Check that the access token is valid for this instance")
    } else {
        AppError::new(
            ErrorCategory::HttpError,
            format!(
                "{} {} returned status {}",
                request.method, request.path, status
            ),
        )
        .with_code(codes::HTTP_STATUS)
    };
    error.add_context("status", &status.as_u16().to_string());
    if !body.is_empty() {
        let excerpt: String = body.chars().take(ERROR_BODY_LIMIT).collect();
        error.add_context("body", &excerpt);
    }
    error
}

fn decode_body(text: String) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}
