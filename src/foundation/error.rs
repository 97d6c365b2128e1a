/// Convenience result type used throughout scrollfx.
pub type ScrollFxResult<T> = Result<T, ScrollFxError>;

/// Top-level error type for scrollfx.
///
/// Only configuration paths can fail. Sampling, ticking and label formatting are
/// infallible once a component has been constructed.
#[derive(thiserror::Error, Debug)]
pub enum ScrollFxError {
    /// Invalid scene, component, or geometry configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid interpolation table or partition.
    #[error("table error: {0}")]
    Table(String),

    /// Scene JSON could not be decoded.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollFxError {
    /// Build a [`ScrollFxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrollFxError::Table`] value.
    pub fn table(msg: impl Into<String>) -> Self {
        Self::Table(msg.into())
    }

    /// Build a [`ScrollFxError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ScrollFxError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
