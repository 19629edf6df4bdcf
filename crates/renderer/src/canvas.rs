//! Drawing surfaces.

use std::path::Path;

use image::{GenericImageView, Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use map_common::{Color, LabelStyle, Point, RenderError, RenderResult};
use rusttype::{point, Font, Scale};
use tiny_skia::{
    ColorU8, FilterQuality, IntSize, PathBuilder, Pixmap, PixmapPaint, Rect, Transform,
};
use tracing::{debug, trace, warn};

use crate::paint::{solid_paint, to_skia_color, to_stroke};
use crate::path::{PathCommand, ScreenPath, ScreenRect, StrokeStyle};

/// Largest font size, in pixels, whose glyphs are rasterised.
const MAX_GLYPH_SIZE: f32 = 2048.0;

/// A 2D surface the renderers draw on.
///
/// All coordinates are screen pixels with the origin in the top-left corner.
pub trait Canvas {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Stroke an open path. Paths are never filled.
    fn stroke_path(&mut self, path: &ScreenPath, stroke: &StrokeStyle) -> RenderResult<()>;

    /// Draw `text` centred on `position`.
    fn draw_label(&mut self, text: &str, position: Point, style: &LabelStyle) -> RenderResult<()>;

    /// Decode an encoded image and draw it scaled into `dest`.
    fn draw_image(&mut self, data: &[u8], dest: ScreenRect) -> RenderResult<()>;
}

/// Canvas backed by a tiny-skia pixmap.
///
/// Paints, strokes and paths are built per call and dropped before the call
/// returns; the canvas only owns its pixels and an optional font.
pub struct PixmapCanvas {
    pixmap: Pixmap,
    font: Option<Font<'static>>,
    warned_missing_font: bool,
}

impl PixmapCanvas {
    /// Transparent canvas of the given size.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        let pixmap = Pixmap::new(width, height)
            .ok_or_else(|| RenderError::Canvas(format!("invalid canvas size {width}x{height}")))?;

        Ok(Self {
            pixmap,
            font: None,
            warned_missing_font: false,
        })
    }

    /// Use the TrueType/OpenType font in `bytes` for labels.
    pub fn with_font_bytes(mut self, bytes: Vec<u8>) -> RenderResult<Self> {
        let font = Font::try_from_vec(bytes)
            .ok_or_else(|| RenderError::Canvas("font data could not be parsed".to_string()))?;
        self.font = Some(font);
        Ok(self)
    }

    pub fn with_font_file(self, path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            RenderError::Canvas(format!("failed to read font {}: {e}", path.display()))
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "Loaded label font");
        self.with_font_bytes(bytes)
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    pub fn fill(&mut self, color: Color) {
        self.pixmap.fill(to_skia_color(color));
    }

    /// Demultiplied color of a pixel, `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgba(c.red(), c.green(), c.blue(), c.alpha()))
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn encode_png(&self) -> RenderResult<Vec<u8>> {
        self.pixmap
            .encode_png()
            .map_err(|e| RenderError::Canvas(format!("PNG encoding failed: {e}")))
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        let path = path.as_ref();
        self.pixmap.save_png(path).map_err(|e| {
            RenderError::Canvas(format!("failed to write {}: {e}", path.display()))
        })
    }

    /// Width and height of `text` in pixels.
    ///
    /// Without a font the size is estimated from the character count.
    fn measure(&self, text: &str, scale: Scale) -> (f32, f32) {
        match &self.font {
            Some(font) => {
                let v_metrics = font.v_metrics(scale);
                let width = font
                    .layout(text, scale, point(0.0, 0.0))
                    .last()
                    .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
                    .unwrap_or(0.0);
                (width, v_metrics.ascent - v_metrics.descent)
            }
            None => (text.chars().count() as f32 * scale.x * 0.6, scale.y),
        }
    }
}

impl Canvas for PixmapCanvas {
    fn width(&self) -> u32 {
        self.pixmap.width()
    }

    fn height(&self) -> u32 {
        self.pixmap.height()
    }

    fn stroke_path(&mut self, path: &ScreenPath, stroke: &StrokeStyle) -> RenderResult<()> {
        if path.len() < 2 {
            trace!(commands = path.len(), "Skipping path with fewer than two points");
            return Ok(());
        }

        let mut pb = PathBuilder::new();
        for command in path.commands() {
            match *command {
                PathCommand::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
                PathCommand::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
            }
        }

        // Degenerate paths (all points equal, non-finite coordinates) yield None
        if let Some(skia_path) = pb.finish() {
            self.pixmap.stroke_path(
                &skia_path,
                &solid_paint(stroke.color),
                &to_stroke(stroke),
                Transform::identity(),
                None,
            );
        }

        Ok(())
    }

    fn draw_label(&mut self, text: &str, position: Point, style: &LabelStyle) -> RenderResult<()> {
        if text.is_empty() {
            return Ok(());
        }

        let scale = Scale::uniform(style.font_size);
        let (text_width, text_height) = self.measure(text, scale);
        let left = position.x as f32 - text_width / 2.0;
        let top = position.y as f32 - text_height / 2.0;
        let padding = style.font_size * 0.2;

        if let Some(back_color) = style.back_color {
            if let Some(rect) = Rect::from_xywh(
                left - padding,
                top - padding,
                text_width + padding * 2.0,
                text_height + padding * 2.0,
            ) {
                self.pixmap
                    .fill_rect(rect, &solid_paint(back_color), Transform::identity(), None);
            }
        }

        let Some(font) = &self.font else {
            if !self.warned_missing_font {
                warn!("No font loaded, labels are drawn without text");
                self.warned_missing_font = true;
            }
            return Ok(());
        };

        if style.font_size > MAX_GLYPH_SIZE {
            warn!(font_size = style.font_size, "Font size too large, label text skipped");
            return Ok(());
        }

        // Text layer covers the padded label box clipped to the canvas
        let x0 = (left - padding).floor().max(0.0);
        let y0 = (top - padding).floor().max(0.0);
        let x1 = (left + text_width + padding).ceil().min(self.pixmap.width() as f32);
        let y1 = (top + text_height + padding).ceil().min(self.pixmap.height() as f32);
        if !(x1 > x0 && y1 > y0) {
            trace!(text, "Label outside canvas");
            return Ok(());
        }

        let fore = style.fore_color;
        let mut layer = RgbaImage::from_pixel(
            (x1 - x0) as u32,
            (y1 - y0) as u32,
            Rgba([fore.r, fore.g, fore.b, 0]),
        );
        draw_text_mut(
            &mut layer,
            Rgba([fore.r, fore.g, fore.b, fore.a]),
            (left - x0).round() as i32,
            (top - y0).round() as i32,
            scale,
            font,
            text,
        );

        let glyphs = to_pixmap(&layer)?;
        self.pixmap.draw_pixmap(
            x0 as i32,
            y0 as i32,
            glyphs.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );

        Ok(())
    }

    fn draw_image(&mut self, data: &[u8], dest: ScreenRect) -> RenderResult<()> {
        if dest.is_empty() {
            trace!(?dest, "Skipping image with empty destination");
            return Ok(());
        }

        let decoded = image::load_from_memory(data).map_err(|e| RenderError::Image(e.to_string()))?;
        let (width, height) = decoded.dimensions();
        let source = to_pixmap(&decoded.to_rgba8())?;

        let transform = Transform::from_row(
            (dest.width / width as f64) as f32,
            0.0,
            0.0,
            (dest.height / height as f64) as f32,
            dest.x as f32,
            dest.y as f32,
        );
        let paint = PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..PixmapPaint::default()
        };
        self.pixmap
            .draw_pixmap(0, 0, source.as_ref(), &paint, transform, None);

        debug!(width, height, ?dest, "Drew raster image");
        Ok(())
    }
}

/// Copy a straight-alpha RGBA image into a premultiplied pixmap.
fn to_pixmap(image: &RgbaImage) -> RenderResult<Pixmap> {
    let (width, height) = image.dimensions();
    let size = IntSize::from_wh(width, height)
        .ok_or_else(|| RenderError::Image(format!("invalid image size {width}x{height}")))?;

    let premultiplied: Vec<u8> = image
        .pixels()
        .flat_map(|p| {
            let c = ColorU8::from_rgba(p[0], p[1], p[2], p[3]).premultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    Pixmap::from_vec(premultiplied, size)
        .ok_or_else(|| RenderError::Image("image buffer size mismatch".to_string()))
}
