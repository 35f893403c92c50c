/// Convenience result type used across the crate.
pub type SceneResult<T> = Result<T, SceneError>;

/// Top-level error taxonomy for property and material APIs.
///
/// Missing values are never errors: an unset property resolves to `None`.
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    /// Invalid user-provided definition data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Rejected time interval operations.
    #[error("interval error: {0}")]
    Interval(String),

    /// Errors while resolving property values at a time.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing definitions.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SceneError {
    /// Build a [`SceneError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SceneError::Interval`] value.
    pub fn interval(msg: impl Into<String>) -> Self {
        Self::Interval(msg.into())
    }

    /// Build a [`SceneError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`SceneError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for SceneError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
