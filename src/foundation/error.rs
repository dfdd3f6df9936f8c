/// Convenience result type used across Wirecraft.
pub type WirecraftResult<T> = Result<T, WirecraftError>;

/// Top-level error taxonomy for host-level failures.
///
/// Document defects are never reported through this type; they surface as
/// [`crate::ValidationIssue`] values and the pipeline keeps going.
#[derive(thiserror::Error, Debug)]
pub enum WirecraftError {
    /// The input could not be read or parsed into a document at all.
    #[error("validation error: {0}")]
    Validation(String),

    /// Geometry could not be computed (non-finite or oversized pages).
    #[error("layout error: {0}")]
    Layout(String),

    /// Page construction or rasterization failed.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WirecraftError {
    /// Build a [`WirecraftError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`WirecraftError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`WirecraftError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`WirecraftError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for WirecraftError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
