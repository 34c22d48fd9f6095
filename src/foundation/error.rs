/// Result alias used across the crate.
pub type LandingResult<T> = Result<T, LandingError>;

/// Errors raised while building, configuring, or rendering a landing view.
///
/// Runtime choreography never fails: missing elements are skipped silently. These variants
/// cover construction-time problems (bad config, malformed markup) and output stages.
#[derive(thiserror::Error, Debug)]
pub enum LandingError {
    /// A configuration value is out of range.
    #[error("validation error: {0}")]
    Validation(String),

    /// A tween or timeline was described inconsistently.
    #[error("animation error: {0}")]
    Animation(String),

    /// The element tree was edited inconsistently (duplicate id, missing parent).
    #[error("stage error: {0}")]
    Stage(String),

    /// SVG parsing or rasterization failed.
    #[error("render error: {0}")]
    Render(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other failure, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LandingError {
    /// Build a [`LandingError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LandingError::Animation`].
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`LandingError::Stage`].
    pub fn stage(msg: impl Into<String>) -> Self {
        Self::Stage(msg.into())
    }

    /// Build a [`LandingError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`LandingError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for LandingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
