//! Common test fixtures for the map rendering tests.
//!
//! This module provides pre-defined extents, viewports, geometries and
//! styles that represent common map scenarios.

use map_common::{
    BoundingBox, Color, Feature, LabelStyle, LineString, Pen, PenStrokeCap, Point, Style,
    VectorStyle, Viewport,
};

/// Common bounding box definitions for testing.
pub mod bbox {
    /// Global geographic extent (-180 to 180, -90 to 90)
    pub const GLOBAL: (f64, f64, f64, f64) = (-180.0, -90.0, 180.0, 90.0);

    /// Full Web Mercator square
    pub const WEB_MERCATOR: (f64, f64, f64, f64) = (
        -20037508.342789244,
        -20037508.342789244,
        20037508.342789244,
        20037508.342789244,
    );

    /// Continental United States bounding box
    pub const CONUS: (f64, f64, f64, f64) = (-130.0, 20.0, -60.0, 55.0);

    /// A small extent with fractional corners
    pub const SMALL_TILE: (f64, f64, f64, f64) = (-100.25, 40.5, -99.75, 41.0);

    /// Single point (degenerate bbox)
    pub const POINT: (f64, f64, f64, f64) = (0.0, 0.0, 0.0, 0.0);
}

/// Common endpoint URLs for image service tests.
pub mod urls {
    /// Export endpoint without a query string
    pub const EXPORT: &str = "http://gis.example.com/arcgis/rest/services/Elevation/ImageServer/exportImage";

    /// Export endpoint carrying a token
    pub const EXPORT_WITH_TOKEN: &str =
        "http://gis.example.com/arcgis/rest/services/Elevation/ImageServer/exportImage?token=secret";

    /// Export endpoint whose query already ends with a separator
    pub const EXPORT_TRAILING_AMPERSAND: &str =
        "http://gis.example.com/arcgis/rest/services/Elevation/ImageServer/exportImage?token=secret&";
}

/// Build a [`BoundingBox`] from one of the tuples in [`bbox`].
pub fn to_bbox((min_x, min_y, max_x, max_y): (f64, f64, f64, f64)) -> BoundingBox {
    BoundingBox::new(min_x, min_y, max_x, max_y)
}

/// A 256x256 viewport centred on the origin, 1 world unit per pixel.
pub fn viewport_256() -> Viewport {
    Viewport::new(Point::new(0.0, 0.0), 1.0, 256.0, 256.0)
}

/// Three-vertex line that bends once, inside [`viewport_256`].
pub fn three_vertex_line() -> LineString {
    LineString::new(vec![
        Point::new(-100.0, -50.0),
        Point::new(0.0, 80.0),
        Point::new(90.0, 10.0),
    ])
}

/// Feature with a `name` attribute, useful for label tests.
pub fn named_feature(line: LineString, name: &str) -> Feature {
    Feature::new(line).with_attribute("name", name)
}

/// Vector style with the given stroke.
pub fn vector_style(width: f64, color: Color, cap: PenStrokeCap) -> Style {
    Style::Vector(VectorStyle {
        line: Pen::new(width, color).with_cap(cap),
    })
}

/// Label style reading the `name` attribute.
pub fn name_label_style() -> Style {
    Style::Label(LabelStyle::with_column("name"))
}
