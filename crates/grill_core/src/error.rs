use thiserror::Error;

/// Failure of a single request flow. Any variant aborts the whole request
/// before the final store write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrillError {
    /// A required request field is missing or malformed.
    #[error("validation error: {0}")]
    Validation(String),

    /// The referenced customer does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The geocoding or routing service rejected the call or returned
    /// nothing usable.
    #[error("upstream error: {0}")]
    Upstream(String),

    /// The record store read or write failed.
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl GrillError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence(message.into())
    }

    /// Stable machine-readable code used in error response bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::NotFound(_) => "not_found",
            Self::Upstream(_) => "upstream_error",
            Self::Persistence(_) => "persistence_error",
        }
    }

    /// The message without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(message)
            | Self::NotFound(message)
            | Self::Upstream(message)
            | Self::Persistence(message) => message,
        }
    }
}
