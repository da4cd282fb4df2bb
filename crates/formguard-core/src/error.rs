//! Engine misuse errors
//!
//! These are not validation failures. They signal that a caller invoked the
//! engine wrongly, e.g. dispatching a form without one of its fields.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("form '{kind}' is missing required field '{field}'")]
    MissingField { kind: &'static str, field: &'static str },

    #[error("unknown form kind '{0}'")]
    UnknownFormKind(String),

    #[error("unknown password policy '{0}' (expected 'strict' or 'relaxed')")]
    UnknownPolicy(String),
}

pub type Result<T, E = EngineError> = std::result::Result<T, E>;
