//! Mapping between world coordinates and screen pixels.

use crate::bbox::BoundingBox;
use crate::geometry::Point;

/// A view onto the map.
///
/// `resolution` is the number of world units per pixel. Screen coordinates
/// have their origin in the top-left corner with y growing downwards, so the
/// world's north ends up at the top of the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub resolution: f64,
    pub center: Point,
    /// Width in pixels. Kept as a float, it is derived from world sizes.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    pub fn new(center: Point, resolution: f64, width: f64, height: f64) -> Self {
        Self {
            resolution,
            center,
            width,
            height,
        }
    }

    /// Viewport that shows exactly `extent` at the given resolution.
    pub fn from_extent(extent: &BoundingBox, resolution: f64) -> Self {
        Self {
            resolution,
            center: extent.centroid(),
            width: extent.width() / resolution,
            height: extent.height() / resolution,
        }
    }

    /// The world extent covered by the viewport.
    pub fn extent(&self) -> BoundingBox {
        let half_width = self.width * self.resolution / 2.0;
        let half_height = self.height * self.resolution / 2.0;
        BoundingBox::new(
            self.center.x - half_width,
            self.center.y - half_height,
            self.center.x + half_width,
            self.center.y + half_height,
        )
    }

    pub fn world_to_screen(&self, x: f64, y: f64) -> Point {
        Point::new(
            (x - self.center.x) / self.resolution + self.width / 2.0,
            (self.center.y - y) / self.resolution + self.height / 2.0,
        )
    }

    pub fn screen_to_world(&self, x: f64, y: f64) -> Point {
        Point::new(
            (x - self.width / 2.0) * self.resolution + self.center.x,
            self.center.y - (y - self.height / 2.0) * self.resolution,
        )
    }
}
