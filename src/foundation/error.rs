/// Result alias used across the crate.
pub type FlowResult<T> = Result<T, FlowError>;

/// Errors produced at the fallible edges of the crate (configuration, sinks, encoding).
///
/// Drawing itself never fails; every error comes from input validation or output IO.
#[derive(thiserror::Error, Debug)]
pub enum FlowError {
    /// Invalid configuration or API misuse.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failure while encoding output frames.
    #[error("encode error: {0}")]
    Encode(String),

    /// Failure while (de)serializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error, usually IO with attached context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FlowError {
    /// Build a [`FlowError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FlowError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`FlowError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
