//! HTTP transport used by the provider.

use std::io::Read;

use map_common::BoxError;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use thiserror::Error;
use tracing::trace;

/// A response whose body has not been read yet.
pub struct TransportResponse {
    /// Value of the `Content-Type` header, if present
    pub content_type: Option<String>,
    pub body: Box<dyn Read + Send>,
}

impl TransportResponse {
    pub fn new(content_type: Option<String>, body: impl Read + Send + 'static) -> Self {
        Self {
            content_type,
            body: Box::new(body),
        }
    }

    /// Whether the declared content type is an image type.
    pub fn is_image(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|content_type| content_type.starts_with("image"))
    }
}

impl std::fmt::Debug for TransportResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportResponse")
            .field("content_type", &self.content_type)
            .finish_non_exhaustive()
    }
}

/// Failure while performing a request.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The server could not be reached or answered with an error status
    #[error("network error: {0}")]
    Network(#[source] BoxError),

    /// Anything else, e.g. a malformed request or a broken body stream
    #[error("request error: {0}")]
    Other(#[source] BoxError),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            TransportError::Other(Box::new(err))
        } else {
            TransportError::Network(Box::new(err))
        }
    }
}

/// Synchronous GET requests.
///
/// Implementations must be usable from several threads, the provider holds
/// one per endpoint.
pub trait ImageTransport: Send + Sync {
    fn get(&self, url: &str) -> Result<TransportResponse, TransportError>;
}

/// Blocking reqwest client with the library's default timeouts.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }
}

impl ImageTransport for ReqwestTransport {
    fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        let response = self.client.get(url).send()?.error_for_status()?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        trace!(
            status = %response.status(),
            content_type = ?content_type,
            "Image service responded"
        );

        Ok(TransportResponse {
            content_type,
            body: Box::new(response),
        })
    }
}
