use crate::{
    cli::args::{DescribeArgs, ExecArgs, RunArgs},
    core::{
        config::NodeConfig,
        node::{BatchExecutor, BatchSettings, CredentialDescription, NodeDescription},
        AppError, ConfigLoader, ErrorCategory, OnlyOfficeNode,
    },
    Result,
};
use anyhow::Context;
use serde::Serialize;
use serde_json::Value;
use std::{
    env,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

/// Execute a batch of items read from a file or stdin.
pub async fn run(args: RunArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let items = read_items(args.input_path().map(PathBuf::as_path))?;
    tracing::info!(items = items.len(), "starting batch run");

    let settings = BatchSettings {
        continue_on_fail: args.continue_on_fail || config.execution.continue_on_fail,
    };
    let records = execute(&config, settings, &items).await?;
    print_json(&records, args.pretty)
}

/// Execute one item assembled from command-line flags.
pub async fn exec(args: ExecArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let item = args.to_item();
    tracing::info!(
        resource = %args.resource,
        operation = %args.operation,
        "executing single item"
    );

    let settings = BatchSettings {
        continue_on_fail: config.execution.continue_on_fail,
    };
    let records = execute(&config, settings, std::slice::from_ref(&item)).await?;
    print_json(&records, args.pretty)
}

/// Print the static node or credential description.
pub fn describe(args: DescribeArgs) -> Result<()> {
    if args.credentials {
        print_json(&CredentialDescription::onlyoffice(), args.pretty)
    } else {
        print_json(&NodeDescription::onlyoffice(), args.pretty)
    }
}

async fn execute(
    config: &NodeConfig,
    settings: BatchSettings,
    items: &[Value],
) -> Result<Vec<Value>> {
    let credentials = config.credentials()?;
    let node = OnlyOfficeNode::connect(credentials, config.request_timeout())?;
    let records = BatchExecutor::new(&node, settings).run(items).await?;
    Ok(records)
}

fn load_config(explicit: Option<&Path>) -> Result<NodeConfig> {
    let workspace = env::current_dir().context("failed to resolve current directory")?;
    Ok(ConfigLoader::load(explicit, &workspace)?)
}

/// Parse the batch input: an array of items, or a single object treated as one item.
fn read_items(path: Option<&Path>) -> Result<Vec<Value>> {
    let content = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read input from stdin")?;
            buffer
        }
    };

    parse_items(&content).map_err(Into::into)
}

fn parse_items(content: &str) -> std::result::Result<Vec<Value>, AppError> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let value: Value = serde_json::from_str(content).map_err(|err| {
        AppError::new(
            ErrorCategory::SerializationError,
            format!("input is not valid JSON: {}", err),
        )
    })?;
    match value {
        Value::Array(items) => Ok(items),
        Value::Object(_) => Ok(vec![value]),
        other => Err(AppError::invalid_parameter(format!(
            "input must be a JSON array of items, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered)?;
    stdout.flush()?;
    Ok(())
}
