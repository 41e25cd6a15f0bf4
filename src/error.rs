//! Rich diagnostic error types for the noema engine.
//!
//! The graph core itself has no failure modes: a missing path or an empty
//! query result is a normal outcome expressed as `Option`/empty `Vec`, never
//! as an error. The enums here cover the fallible edges — configuration and
//! the opt-in "unknown entity is a hard error" policy — with miette
//! `#[diagnostic]` derives providing error codes and help text.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for the noema engine.
///
/// Each variant wraps a subsystem-specific error, preserving the full
/// diagnostic chain (error codes and help text) through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum NoemaError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Engine(#[from] EngineError),
}

// ---------------------------------------------------------------------------
// Graph errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum GraphError {
    #[error("unknown entity: \"{name}\"")]
    #[diagnostic(
        code(noema::graph::unknown_entity),
        help(
            "The entity has never appeared as a subject or object of an \
             inserted triple. Insert a triple mentioning it first, or check \
             the spelling — matching is exact and case-sensitive."
        )
    )]
    UnknownEntity { name: String },
}

// ---------------------------------------------------------------------------
// Engine errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum EngineError {
    #[error("invalid configuration: {message}")]
    #[diagnostic(
        code(noema::engine::invalid_config),
        help("Check the EngineConfig fields. {message}")
    )]
    InvalidConfig { message: String },
}

/// Convenience alias for functions returning noema results.
pub type NoemaResult<T> = std::result::Result<T, NoemaError>;
