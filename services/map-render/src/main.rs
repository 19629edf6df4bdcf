//! Map rendering command.
//!
//! Draws a single map image:
//! - Background fetched from an ArcGIS image service (optional)
//! - Vector line overlays with stroke and label styles
//! - PNG output

mod config;
mod pipeline;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use image_service::ImageServiceProvider;
use map_common::{BoundingBox, Provider, Viewport};
use renderer::PixmapCanvas;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use config::MapConfig;

#[derive(Parser, Debug)]
#[command(name = "map-render")]
#[command(about = "Render an image service background and vector overlays to PNG")]
struct Args {
    /// Map description (YAML)
    #[arg(short, long, env = "MAP_RENDER_CONFIG")]
    config: PathBuf,

    /// Extent to render: minx,miny,maxx,maxy
    #[arg(long, allow_hyphen_values = true)]
    bbox: String,

    /// World units per pixel
    #[arg(long)]
    resolution: f64,

    /// Output PNG file
    #[arg(short, long, env = "MAP_RENDER_OUTPUT", default_value = "map.png")]
    output: PathBuf,

    /// Log image service failures and render without the background
    #[arg(long)]
    continue_on_error: bool,

    /// Font used for label text
    #[arg(long, env = "MAP_RENDER_FONT")]
    font: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    fmt().with_env_filter(filter).with_target(true).init();

    let config = MapConfig::load(&args.config)?;

    let extent = BoundingBox::from_wms_string(&args.bbox).context("Invalid --bbox")?;
    if !(args.resolution.is_finite() && args.resolution > 0.0) {
        bail!("--resolution must be a positive number, got {}", args.resolution);
    }

    let viewport = Viewport::from_extent(&extent, args.resolution);
    let (width, height) = pipeline::canvas_size(&viewport)?;
    info!(width, height, bbox = %args.bbox, "Rendering map");

    let mut canvas = PixmapCanvas::new(width, height)?;
    if let Some(font) = &args.font {
        canvas = canvas.with_font_file(font)?;
    }

    let provider = match &config.service {
        Some(info) => Some(
            ImageServiceProvider::new(info.clone(), args.continue_on_error)
                .context("Failed to create HTTP client")?,
        ),
        None => None,
    };
    let background = provider.as_ref().map(|p| p as &dyn Provider);

    pipeline::render_map(&mut canvas, &config, background, &extent, args.resolution)?;

    canvas
        .save_png(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    info!(output = %args.output.display(), "Map written");

    Ok(())
}
