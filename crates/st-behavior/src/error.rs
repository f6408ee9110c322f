use thiserror::Error;

use crate::AgentKind;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("invalid {kind} profile: {reason}")]
    InvalidProfile {
        kind:   AgentKind,
        reason: String,
    },
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
