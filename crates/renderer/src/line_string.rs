//! Line string rendering.

use map_common::{Feature, LineString, RenderResult, Style, Viewport};
use tracing::trace;

use crate::canvas::Canvas;
use crate::label;
use crate::path::{ScreenPath, StrokeStyle};

/// Draw `line` with `style`.
///
/// Label styles place a single label at the centre of the line's bounding
/// box. Every other style strokes the projected polyline; vector styles
/// supply the pen, anything else gets a one pixel transparent butt-capped
/// stroke. Joins are always round.
pub fn draw(
    canvas: &mut dyn Canvas,
    viewport: &Viewport,
    style: &Style,
    feature: &Feature,
    line: &LineString,
) -> RenderResult<()> {
    match style {
        Style::Label(label_style) => {
            let Some(bbox) = line.bounding_box() else {
                trace!("Empty line string has no label position");
                return Ok(());
            };
            label::draw(canvas, viewport, label_style, feature, bbox.centroid())
        }
        _ => {
            let path = project(viewport, line);
            canvas.stroke_path(&path, &stroke_style(style))
        }
    }
}

/// Stroke parameters for a non-label style.
pub fn stroke_style(style: &Style) -> StrokeStyle {
    match style {
        Style::Vector(vector) => StrokeStyle::from_pen(&vector.line),
        _ => StrokeStyle::default(),
    }
}

/// Screen-space polyline through the line's vertices, in order.
pub fn project(viewport: &Viewport, line: &LineString) -> ScreenPath {
    ScreenPath::from_points(
        line.vertices()
            .iter()
            .map(|p| viewport.world_to_screen(p.x, p.y)),
    )
}
