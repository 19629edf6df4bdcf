//! Composes a background provider and vector overlays onto one canvas.

use anyhow::{bail, Context, Result};
use map_common::{BoundingBox, Provider, Style, Viewport};
use renderer::{render, PixmapCanvas};
use tracing::{debug, info, instrument};

use crate::config::MapConfig;

/// Pixel size of the canvas showing `viewport`.
pub fn canvas_size(viewport: &Viewport) -> Result<(u32, u32)> {
    let to_pixels = |value: f64, name: &str| -> Result<u32> {
        let rounded = value.round_ties_even();
        if !rounded.is_finite() || rounded < 1.0 || rounded > u32::MAX as f64 {
            bail!("Canvas {name} of {value} pixels is not drawable");
        }
        Ok(rounded as u32)
    };
    Ok((
        to_pixels(viewport.width, "width")?,
        to_pixels(viewport.height, "height")?,
    ))
}

/// Draw the map for `extent` at `resolution`.
///
/// The background provider, if any, is drawn first, followed by every
/// overlay once per style in configuration order.
#[instrument(skip(canvas, config, background))]
pub fn render_map(
    canvas: &mut PixmapCanvas,
    config: &MapConfig,
    background: Option<&dyn Provider>,
    extent: &BoundingBox,
    resolution: f64,
) -> Result<()> {
    let viewport = Viewport::from_extent(extent, resolution);

    if let Some(color) = config.background {
        canvas.fill(color);
    }

    if let Some(provider) = background {
        let features = provider
            .features_in_view(extent, resolution)
            .context("Failed to fetch background image")?;
        if features.is_empty() {
            info!("Image service returned no image, drawing overlays only");
        }
        for feature in &features {
            render(canvas, &viewport, &Style::Other, feature)
                .context("Failed to draw background image")?;
        }
    }

    for (index, overlay) in config.overlays.iter().enumerate() {
        let feature = overlay.to_feature();
        for style in &overlay.styles {
            render(canvas, &viewport, style, &feature)
                .with_context(|| format!("Failed to draw overlay {index}"))?;
        }
        debug!(index, styles = overlay.styles.len(), "Drew overlay");
    }

    Ok(())
}
