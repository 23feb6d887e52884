use thiserror::Error;

#[derive(Error, Debug)]
pub enum HiveError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Coarse classification used when an error is surfaced to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A required field was missing; nothing was sent to the remote store.
    Validation,
    /// The remote store (or its local stand-in) rejected or failed a call.
    Persistence,
    /// A referenced entity does not exist.
    NotFound,
}

impl HiveError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation(_) => ErrorCategory::Validation,
            Self::NotFound(_) => ErrorCategory::NotFound,
            Self::Persistence(_) | Self::Io(_) | Self::Serialization(_) | Self::Internal(_) => {
                ErrorCategory::Persistence
            }
        }
    }
}
