//! Common types shared by the map providers, renderers and the CLI.

pub mod bbox;
pub mod error;
pub mod feature;
pub mod geometry;
pub mod provider;
pub mod raster;
pub mod style;
pub mod viewport;

pub use bbox::BoundingBox;
pub use error::{BoxError, RenderError, RenderResult};
pub use feature::Feature;
pub use geometry::{Geometry, LineString, Point};
pub use provider::Provider;
pub use raster::Raster;
pub use style::{Color, LabelStyle, Pen, PenStrokeCap, Style, VectorStyle};
pub use viewport::Viewport;
