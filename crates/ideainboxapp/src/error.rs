use crate::handoff::HandoffMethod;
use thiserror::Error;

/// Raw note text was rejected before normalization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid input: please provide text content")]
    Empty,

    #[error("Note is too short: write at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Note is too long: limit it to {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },
}

#[derive(Error, Debug)]
pub enum InboxError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Enhancement service error: {0}")]
    Enhancement(String),

    #[error("Could not send via {method}: {reason}")]
    Handoff {
        method: HandoffMethod,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl InboxError {
    pub fn handoff(method: HandoffMethod, reason: impl Into<String>) -> Self {
        InboxError::Handoff {
            method,
            reason: reason.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, InboxError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, InboxError>;
