//! Error types for fetching and drawing map content.

use thiserror::Error;

/// Boxed cause carried by wrapping errors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias using RenderError.
pub type RenderResult<T> = Result<T, RenderError>;

/// Primary error type for rendering a map.
#[derive(Debug, Error)]
pub enum RenderError {
    // === Provider Errors ===
    #[error("There was a problem connecting to the image service")]
    Connection(#[source] BoxError),

    #[error("There was a problem while attempting to request the image service")]
    Request(#[source] BoxError),

    // === Drawing Errors ===
    #[error("Canvas error: {0}")]
    Canvas(String),

    #[error("Failed to decode image: {0}")]
    Image(String),
}

impl RenderError {
    /// Whether the error came from talking to a remote service.
    pub fn is_provider_error(&self) -> bool {
        matches!(self, RenderError::Connection(_) | RenderError::Request(_))
    }
}
