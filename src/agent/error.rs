//! Agent-specific error types with rich miette diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Errors specific to the agent layer (tools, ReAct loop, orchestration).
#[derive(Debug, Error, Diagnostic)]
pub enum AgentError {
    #[error("tool not found: \"{name}\"")]
    #[diagnostic(
        code(noema::agent::tool_not_found),
        help("Register the tool first or check available tools with `registry.list()`.")
    )]
    ToolNotFound { name: String },

    #[error("tool execution failed: {tool_name} — {message}")]
    #[diagnostic(
        code(noema::agent::tool_execution),
        help("The tool rejected its input. Check the tool's signature for required parameters.")
    )]
    ToolExecution { tool_name: String, message: String },

    #[error("{0}")]
    #[diagnostic(
        code(noema::agent::engine),
        help("An engine-level error occurred during an agent operation.")
    )]
    Engine(Box<crate::error::NoemaError>),
}

impl From<crate::error::NoemaError> for AgentError {
    fn from(e: crate::error::NoemaError) -> Self {
        Self::Engine(Box::new(e))
    }
}

/// Convenience alias for agent operations.
pub type AgentResult<T> = std::result::Result<T, AgentError>;
