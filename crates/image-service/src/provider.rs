//! Raster provider backed by an image service.

use std::io::Read;

use map_common::{
    BoundingBox, Feature, Provider, Raster, RenderError, RenderResult, Viewport,
};
use tracing::{debug, instrument, warn};

use crate::info::ImageServiceInfo;
use crate::request::build_request_url;
use crate::transport::{ImageTransport, ReqwestTransport, TransportError};

/// Fetches a rendered image of the current view from an image service.
///
/// Every call performs a single request; there is no caching and no retry.
/// Expected "no image" outcomes are reported as `Ok(None)`. Transport
/// failures are returned as [`RenderError`] unless `continue_on_error` is
/// set, in which case they are logged and reported as `Ok(None)` too.
pub struct ImageServiceProvider<T = ReqwestTransport> {
    info: ImageServiceInfo,
    transport: T,
    srid: i32,
    continue_on_error: bool,
}

impl ImageServiceProvider<ReqwestTransport> {
    /// Create a provider using a default blocking HTTP client.
    pub fn new(info: ImageServiceInfo, continue_on_error: bool) -> Result<Self, TransportError> {
        Ok(Self::with_transport(info, continue_on_error, ReqwestTransport::new()?))
    }
}

impl<T: ImageTransport> ImageServiceProvider<T> {
    pub fn with_transport(info: ImageServiceInfo, continue_on_error: bool, transport: T) -> Self {
        Self {
            info,
            transport,
            srid: -1,
            continue_on_error,
        }
    }

    pub fn info(&self) -> &ImageServiceInfo {
        &self.info
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn continue_on_error(&self) -> bool {
        self.continue_on_error
    }

    pub fn set_continue_on_error(&mut self, continue_on_error: bool) {
        self.continue_on_error = continue_on_error;
    }

    pub fn set_srid(&mut self, srid: i32) {
        self.srid = srid;
    }

    /// Request an image for the viewport.
    ///
    /// Returns `Ok(None)` without touching the network when the viewport
    /// size does not fit into `i32` pixels, and `Ok(None)` when the service
    /// answers with something that is not an image.
    #[instrument(skip(self), fields(url = %self.info.url))]
    pub fn try_get_map(&self, viewport: &Viewport) -> RenderResult<Option<Raster>> {
        let (Some(width), Some(height)) = (to_pixels(viewport.width), to_pixels(viewport.height))
        else {
            warn!(
                width = viewport.width,
                height = viewport.height,
                "Could not convert viewport size to integer pixels"
            );
            return Ok(None);
        };

        let extent = viewport.extent();
        let url = build_request_url(&self.info, &extent, width, height);
        debug!(request = %url, "Requesting image");

        match self.fetch(&url, extent) {
            Ok(raster) => Ok(raster),
            Err(err) => self.handle_error(err),
        }
    }

    fn fetch(&self, url: &str, extent: BoundingBox) -> Result<Option<Raster>, TransportError> {
        let mut response = self.transport.get(url)?;

        if !response.is_image() {
            debug!(
                content_type = ?response.content_type,
                "Image service did not return an image"
            );
            return Ok(None);
        }

        let mut data = Vec::new();
        response
            .body
            .read_to_end(&mut data)
            .map_err(|e| TransportError::Other(Box::new(e)))?;

        debug!(bytes = data.len(), "Received image");
        Ok(Some(Raster::new(data, extent)))
    }

    fn handle_error(&self, err: TransportError) -> RenderResult<Option<Raster>> {
        let err = match err {
            TransportError::Network(cause) => RenderError::Connection(cause),
            TransportError::Other(cause) => RenderError::Request(cause),
        };

        if !self.continue_on_error {
            return Err(err);
        }

        let cause = std::error::Error::source(&err)
            .map(ToString::to_string)
            .unwrap_or_default();
        warn!(%cause, "{err}");
        Ok(None)
    }
}

impl<T: ImageTransport> Provider for ImageServiceProvider<T> {
    fn features_in_view(&self, extent: &BoundingBox, resolution: f64) -> RenderResult<Vec<Feature>> {
        let viewport = Viewport::from_extent(extent, resolution);
        let features = self
            .try_get_map(&viewport)?
            .map(Feature::new)
            .into_iter()
            .collect();
        Ok(features)
    }

    /// Image services do not report their coverage here.
    fn extent(&self) -> Option<BoundingBox> {
        None
    }

    fn srid(&self) -> i32 {
        self.srid
    }
}

/// Round to the nearest pixel count, ties to even.
///
/// `None` if the value is NaN or outside the `i32` range.
fn to_pixels(value: f64) -> Option<i32> {
    let rounded = value.round_ties_even();
    if rounded >= i32::MIN as f64 && rounded <= i32::MAX as f64 {
        Some(rounded as i32)
    } else {
        None
    }
}
