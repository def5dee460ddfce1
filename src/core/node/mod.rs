#![allow(clippy::result_large_err)] // Node execution returns AppError for consistent structured diagnostics.

pub mod batch;
pub mod description;
pub mod normalize;
pub mod request;

pub use batch::{BatchExecutor, BatchSettings};
pub use description::{CredentialDescription, NodeDescription};
pub use normalize::normalize;
pub use request::{build_request, request_for, HttpMethod, RequestSpec};

use crate::core::client::{FilesApiClient, FilesTransport};
use crate::core::credentials::OnlyOfficeCredentials;
use crate::core::error::AppError;
use onlyoffice_types::{NodeParameters, Operation};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Result of running the node for one input item.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemOutput {
    /// Raw create/update/delete response.
    Single(Value),
    /// Normalized listing; every entry becomes its own output record.
    Entries(Vec<Value>),
}

impl ItemOutput {
    pub fn into_records(self) -> Vec<Value> {
        match self {
            ItemOutput::Single(value) => vec![value],
            ItemOutput::Entries(entries) => entries,
        }
    }
}

/// The OnlyOffice node: parameter parsing, request mapping and dispatch.
pub struct OnlyOfficeNode {
    description: NodeDescription,
    transport: Arc<dyn FilesTransport>,
}

impl OnlyOfficeNode {
    pub fn new(transport: Arc<dyn FilesTransport>) -> Self {
        Self {
            description: NodeDescription::onlyoffice(),
            transport,
        }
    }

    /// Node backed by the reqwest client for the given instance.
    pub fn connect(
        credentials: OnlyOfficeCredentials,
        timeout: Option<Duration>,
    ) -> Result<Self, AppError> {
        let client = match timeout {
            Some(timeout) => FilesApiClient::with_timeout(credentials, timeout)?,
            None => FilesApiClient::new(credentials),
        };
        Ok(Self::new(Arc::new(client)))
    }

    pub fn description(&self) -> &NodeDescription {
        &self.description
    }

    /// Decode one input item into node parameters.
    pub fn parameters(item: &Value) -> Result<NodeParameters, AppError> {
        if !item.is_object() {
            return Err(AppError::invalid_parameter(
                "node input item must be a JSON object",
            ));
        }
        serde_json::from_value(item.clone()).map_err(|err| {
            AppError::invalid_parameter(format!("invalid node parameters: {}", err))
        })
    }

    /// Map parameters onto a request, checking selectors then required fields.
    pub fn prepare(&self, params: &NodeParameters) -> Result<(Operation, RequestSpec), AppError> {
        let (resource, operation) = request::parse_selectors(&params.resource, &params.operation)?;
        let missing = self
            .description
            .missing_required(resource, operation, params);
        if !missing.is_empty() {
            let mut err = AppError::invalid_parameter(format!(
                "{} {} requires parameter(s): {}",
                resource,
                operation,
                missing.join(", ")
            ));
            err.add_context("missing", &missing.join(","));
            return Err(err);
        }
        Ok((operation, request_for(resource, operation, params)?))
    }

    pub async fn execute_item(&self, item: &Value) -> Result<ItemOutput, AppError> {
        let params = Self::parameters(item)?;
        self.execute(&params).await
    }

    pub async fn execute(&self, params: &NodeParameters) -> Result<ItemOutput, AppError> {
        let (operation, request) = self.prepare(params)?;
        let response = self.transport.send(&request).await?;
        if operation == Operation::List {
            let entries = normalize(&response);
            tracing::debug!(
                folder_id = %params.folder_id,
                entries = entries.len(),
                "normalized folder listing"
            );
            Ok(ItemOutput::Entries(entries))
        } else {
            Ok(ItemOutput::Single(response))
        }
    }
}
