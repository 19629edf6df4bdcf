//! Client for ArcGIS-style image services.
//!
//! The provider asks the service to render the current view and wraps the
//! returned image as a raster feature:
//! - [`ImageServiceInfo`] describes the endpoint and request parameters
//! - [`request`] builds the `exportImage` query string
//! - [`ImageTransport`] performs the HTTP GET (reqwest by default)
//! - [`ImageServiceProvider`] applies the error policy and builds rasters

pub mod info;
pub mod provider;
pub mod request;
pub mod transport;

pub use info::{ImageServiceInfo, InterpolationType};
pub use provider::ImageServiceProvider;
pub use request::build_request_url;
pub use transport::{ImageTransport, ReqwestTransport, TransportError, TransportResponse};
