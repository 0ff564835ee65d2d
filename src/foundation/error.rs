/// Convenience result type used across pathmotion.
pub type MotionResult<T> = Result<T, MotionError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Sampling never fails: degenerate geometry and non-positive durations have
/// defined fallbacks. Errors only surface at construction time or when a
/// consumer callback fails.
#[derive(thiserror::Error, Debug)]
pub enum MotionError {
    /// Invalid user-provided path or numeric input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid or unreadable engine configuration.
    #[error("config error: {0}")]
    Config(String),

    /// The completion callback reported a failure. The engine is already idle.
    #[error("completion callback failed: {0}")]
    Completion(anyhow::Error),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MotionError {
    /// Build a [`MotionError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MotionError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`MotionError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for MotionError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
