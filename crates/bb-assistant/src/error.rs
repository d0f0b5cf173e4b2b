//! Errors raised while loading assistant configuration.
//!
//! Replying to a message never fails; these only surface at startup.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    UnknownIntent(#[from] bb_protocol::ParseIntentError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias for assistant results.
pub type AssistantResult<T> = Result<T, AssistantError>;

/// Read a configuration file, tagging IO failures with the path.
pub(crate) fn read_config(path: &str) -> AssistantResult<String> {
    std::fs::read_to_string(path).map_err(|source| AssistantError::Io {
        path: path.to_string(),
        source,
    })
}
