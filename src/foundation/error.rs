/// Convenience result type used across slidefx.
pub type SlideFxResult<T> = Result<T, SlideFxError>;

/// Top-level error taxonomy used by construction and configuration APIs.
///
/// Navigation never fails with an error: rejected requests are reported as `false`.
#[derive(thiserror::Error, Debug)]
pub enum SlideFxError {
    /// Invalid caller-provided data (empty item sets, out-of-range values).
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid or incomplete slider configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Unparsable or incompatible SVG shape descriptors.
    #[error("shape error: {0}")]
    Shape(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SlideFxError {
    /// Build a [`SlideFxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SlideFxError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`SlideFxError::Shape`] value.
    pub fn shape(msg: impl Into<String>) -> Self {
        Self::Shape(msg.into())
    }

    /// Build a [`SlideFxError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for SlideFxError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
