//! Test data generators for images and geometries.
//!
//! These generators create predictable, verifiable data that can be used
//! across the test suite.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use map_common::{LineString, Point};

/// Encodes a solid-color PNG.
///
/// # Arguments
///
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `rgba` - Fill color
///
/// # Returns
///
/// The encoded PNG file as bytes, as an image service would send it.
pub fn create_png_bytes(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba(rgba));
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img)
        .write_to(&mut out, ImageFormat::Png)
        .expect("Failed to encode test PNG");
    out.into_inner()
}

/// Creates a zig-zag line with `count` vertices.
///
/// Vertex `i` is at `(i * step, 0)` for even `i` and `(i * step, step)` for
/// odd `i`, so the order of the vertices can be recovered from their
/// coordinates.
pub fn create_zigzag_line(count: usize, step: f64) -> LineString {
    (0..count)
        .map(|i| {
            let y = if i % 2 == 0 { 0.0 } else { step };
            Point::new(i as f64 * step, y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_bytes_have_png_signature() {
        let bytes = create_png_bytes(4, 4, [255, 0, 0, 255]);
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_zigzag_line() {
        let line = create_zigzag_line(5, 10.0);
        assert_eq!(line.len(), 5);
        assert_eq!(line.vertices()[1], Point::new(10.0, 10.0));
        assert_eq!(line.vertices()[4], Point::new(40.0, 0.0));
    }
}
