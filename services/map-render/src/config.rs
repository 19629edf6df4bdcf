//! Map description loaded from YAML.
//!
//! ```yaml
//! service:
//!   url: https://host/arcgis/rest/services/Elevation/ImageServer/exportImage
//!   interpolation: NearestNeighbor
//! background: white
//! overlays:
//!   - vertices: [[-120, 35], [-110, 40], [-100, 38]]
//!     attributes: { name: Route 9 }
//!     styles:
//!       - { type: vector, line: { width: 3, color: "#d03020", pen_stroke_cap: round } }
//!       - { type: label, label_column: name, back_color: white }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image_service::ImageServiceInfo;
use map_common::{Color, Feature, LineString, Style};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MapConfig {
    /// Image service drawn as the background layer
    #[serde(default)]
    pub service: Option<ImageServiceInfo>,

    /// Canvas fill drawn before anything else
    #[serde(default)]
    pub background: Option<Color>,

    #[serde(default)]
    pub overlays: Vec<OverlayConfig>,
}

/// A line drawn on top of the background, once per style.
#[derive(Debug, Clone, Deserialize)]
pub struct OverlayConfig {
    pub vertices: LineString,

    #[serde(default)]
    pub attributes: HashMap<String, String>,

    #[serde(default)]
    pub styles: Vec<Style>,
}

impl OverlayConfig {
    pub fn to_feature(&self) -> Feature {
        Feature::new(self.vertices.clone()).with_attributes(self.attributes.clone())
    }
}

impl MapConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: MapConfig =
            serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        for (index, overlay) in config.overlays.iter().enumerate() {
            if overlay.styles.is_empty() {
                warn!(index, "Overlay has no styles and will not be drawn");
            }
        }

        debug!(
            path = %path.display(),
            service = config.service.is_some(),
            overlays = config.overlays.len(),
            "Loaded map config"
        );
        Ok(config)
    }
}
