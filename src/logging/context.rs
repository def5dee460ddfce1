use crate::cli::Command;
use crate::logging::settings::ConsoleOutput;
use std::env;

/// Execution contexts that influence how logging is routed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionContext {
    /// Single invocations driven by hand (`exec`, `describe`).
    LocalDev,
    /// Batch runs whose stdout is consumed by another process.
    Batch,
    /// Node hosted by a remote agent on a different machine.
    RemoteAgent,
}

impl ExecutionContext {
    /// Console sink used when none is configured. Never stdout, which carries JSON.
    pub fn default_console(self) -> ConsoleOutput {
        match self {
            ExecutionContext::LocalDev => ConsoleOutput::Stderr,
            ExecutionContext::Batch | ExecutionContext::RemoteAgent => ConsoleOutput::None,
        }
    }
}

/// Derive the active execution context from a parsed CLI command plus overrides.
pub fn detect_context(command: &Command) -> ExecutionContext {
    if remote_override_enabled() {
        return ExecutionContext::RemoteAgent;
    }

    match command {
        Command::Run(_) => ExecutionContext::Batch,
        Command::Exec(_) | Command::Describe(_) => ExecutionContext::LocalDev,
    }
}

fn remote_override_enabled() -> bool {
    env::var("ONLYOFFICE_REMOTE_AGENT")
        .map(|value| value.trim() == "1")
        .unwrap_or(false)
}
