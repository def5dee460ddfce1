#![allow(clippy::result_large_err)]

use crate::core::error::AppError;
use crate::core::node::OnlyOfficeNode;
use serde_json::{json, Value};
use std::time::Instant;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSettings {
    /// Capture per-item errors as `{"error": ..}` records instead of aborting.
    pub continue_on_fail: bool,
}

/// Runs input items through the node one at a time, in order.
pub struct BatchExecutor<'a> {
    node: &'a OnlyOfficeNode,
    settings: BatchSettings,
}

impl<'a> BatchExecutor<'a> {
    pub fn new(node: &'a OnlyOfficeNode, settings: BatchSettings) -> Self {
        Self { node, settings }
    }

    pub async fn run(&self, items: &[Value]) -> Result<Vec<Value>, AppError> {
        let start = Instant::now();
        let mut records = Vec::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            match self.node.execute_item(item).await {
                Ok(output) => records.extend(output.into_records()),
                Err(err) if self.settings.continue_on_fail => {
                    tracing::warn!(item = index, code = %err.code, "item failed: {}", err.message);
                    records.push(json!({ "error": err.message }));
                }
                Err(mut err) => {
                    err.add_context("item", &index.to_string());
                    return Err(err);
                }
            }
        }

        tracing::info!(
            items = items.len(),
            records = records.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "batch completed"
        );
        Ok(records)
    }
}
