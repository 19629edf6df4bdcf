//! Endpoint configuration for an image service.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Resampling used by the service when it renders the requested size.
///
/// The names are sent verbatim with an `RSP_` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InterpolationType {
    #[default]
    BilinearInterpolation,
    CubicConvolution,
    Majority,
    NearestNeighbor,
}

impl fmt::Display for InterpolationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InterpolationType::BilinearInterpolation => "BilinearInterpolation",
            InterpolationType::CubicConvolution => "CubicConvolution",
            InterpolationType::Majority => "Majority",
            InterpolationType::NearestNeighbor => "NearestNeighbor",
        };
        f.write_str(name)
    }
}

/// Connection and request parameters of an image service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageServiceInfo {
    /// Export endpoint, e.g. `https://host/arcgis/rest/services/x/ImageServer/exportImage`
    pub url: String,

    #[serde(default)]
    pub interpolation: InterpolationType,

    /// Image format requested from the service
    #[serde(default = "default_format")]
    pub format: String,

    /// Response format; `image` returns the raw image
    #[serde(default = "default_f")]
    pub f: String,

    /// Spatial reference of the returned image
    #[serde(default)]
    pub image_sr: String,

    /// Spatial reference of the bbox values
    #[serde(default)]
    pub bbox_sr: String,

    #[serde(default)]
    pub time: String,
}

fn default_format() -> String {
    "jpgpng".to_string()
}

fn default_f() -> String {
    "image".to_string()
}

impl ImageServiceInfo {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            interpolation: InterpolationType::default(),
            format: default_format(),
            f: default_f(),
            image_sr: String::new(),
            bbox_sr: String::new(),
            time: String::new(),
        }
    }
}
