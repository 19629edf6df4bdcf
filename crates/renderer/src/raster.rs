//! Raster image rendering.

use map_common::{Raster, RenderResult, Viewport};
use tracing::trace;

use crate::canvas::Canvas;
use crate::path::ScreenRect;

/// Draw the raster stretched over the screen area of its extent.
///
/// Rasters whose extent lies outside the viewport are not decoded.
pub fn draw(canvas: &mut dyn Canvas, viewport: &Viewport, raster: &Raster) -> RenderResult<()> {
    let extent = &raster.extent;
    if !extent.intersects(&viewport.extent()) {
        trace!(?extent, "Skipping raster outside the viewport");
        return Ok(());
    }

    let top_left = viewport.world_to_screen(extent.min_x, extent.max_y);
    let bottom_right = viewport.world_to_screen(extent.max_x, extent.min_y);

    canvas.draw_image(&raster.data, ScreenRect::from_corners(top_left, bottom_right))
}
