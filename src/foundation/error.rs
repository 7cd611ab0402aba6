/// Convenience result type used across pitchreel.
pub type PitchResult<T> = Result<T, PitchError>;

/// Top-level error taxonomy used by timeline and animation APIs.
///
/// Every variant describes a programmer or content error: a timeline with inconsistent timing
/// or a malformed interpolation cannot produce a meaningful frame, so nothing here is retried
/// or silently defaulted.
#[derive(thiserror::Error, Debug)]
pub enum PitchError {
    /// Invalid timeline construction or configuration values.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Malformed interpolation ranges (length mismatch, non-monotonic input, non-finite values).
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// Malformed spring or easing parameters.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors while evaluating a frame (out-of-bounds requests, pipeline failures).
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PitchError {
    /// Build a [`PitchError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`PitchError::InvalidRange`] value.
    pub fn invalid_range(msg: impl Into<String>) -> Self {
        Self::InvalidRange(msg.into())
    }

    /// Build a [`PitchError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`PitchError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`PitchError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
