//! Label placement.

use map_common::{Feature, LabelStyle, Point, RenderResult, Viewport};
use tracing::trace;

use crate::canvas::Canvas;

/// Draw the feature's label at the world position `at`.
///
/// The position is projected to the screen and shifted by the style offset.
/// Features without label text are skipped.
pub fn draw(
    canvas: &mut dyn Canvas,
    viewport: &Viewport,
    style: &LabelStyle,
    feature: &Feature,
    at: Point,
) -> RenderResult<()> {
    let Some(text) = style.label_text(feature) else {
        trace!(column = ?style.label_column, "No label text for feature");
        return Ok(());
    };

    let screen = viewport.world_to_screen(at.x, at.y);
    let position = Point::new(
        screen.x + f64::from(style.offset[0]),
        screen.y + f64::from(style.offset[1]),
    );

    canvas.draw_label(text, position, style)
}
