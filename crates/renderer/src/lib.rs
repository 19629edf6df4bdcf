//! Drawing of map features onto a 2D canvas.
//!
//! Renderers project world geometries through a [`Viewport`](map_common::Viewport)
//! and issue drawing calls against the [`Canvas`] trait:
//! - Line strings (stroked polylines, or labels for label styles)
//! - Point labels
//! - Raster images returned by image services
//!
//! [`PixmapCanvas`] is the tiny-skia backed implementation used to produce
//! PNG output.

pub mod canvas;
pub mod feature;
pub mod label;
pub mod line_string;
pub mod paint;
pub mod path;
pub mod raster;

pub use canvas::{Canvas, PixmapCanvas};
pub use feature::render;
pub use path::{LineJoin, PathCommand, ScreenPath, ScreenRect, StrokeStyle};
