//! Feature dispatch by geometry type.

use map_common::{Feature, Geometry, RenderResult, Style, Viewport};
use tracing::trace;

use crate::canvas::Canvas;
use crate::{label, line_string, raster};

/// Draw a feature with one style.
///
/// Rasters are drawn regardless of the style. Points are only drawn by
/// label styles.
pub fn render(
    canvas: &mut dyn Canvas,
    viewport: &Viewport,
    style: &Style,
    feature: &Feature,
) -> RenderResult<()> {
    match (&feature.geometry, style) {
        (Geometry::LineString(line), _) => line_string::draw(canvas, viewport, style, feature, line),
        (Geometry::Raster(image), _) => raster::draw(canvas, viewport, image),
        (Geometry::Point(point), Style::Label(label_style)) => {
            label::draw(canvas, viewport, label_style, feature, *point)
        }
        (Geometry::Point(_), _) => {
            trace!(?style, "Point features are only drawn with label styles");
            Ok(())
        }
    }
}
