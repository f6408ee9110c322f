//! Core error type.
//!
//! The steering algorithms themselves never fail; these errors surface at the
//! edges, where external data (percept batches, agent lookups) enters.

use thiserror::Error;

use crate::AgentId;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("non-finite {field} in percept: {value}")]
    NonFinite {
        field: &'static str,
        value: f64,
    },
}

/// Shorthand result type for `st-core`.
pub type CoreResult<T> = Result<T, CoreError>;
