use st_behavior::BehaviorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(String),

    #[error("invalid config value {field}: {reason}")]
    Invalid {
        field:  &'static str,
        reason: String,
    },

    #[error(transparent)]
    Profile(#[from] BehaviorError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
