//! Screen-space drawing primitives.

use map_common::{Color, Pen, PenStrokeCap, Point};

/// A single path instruction in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
}

impl PathCommand {
    pub fn point(&self) -> Point {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
        }
    }
}

/// An open polyline in screen coordinates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScreenPath {
    commands: Vec<PathCommand>,
}

impl ScreenPath {
    /// Polyline through `points` in order: a `MoveTo` to the first point
    /// followed by a `LineTo` for every later one.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        let commands = points
            .into_iter()
            .enumerate()
            .map(|(i, p)| {
                if i == 0 {
                    PathCommand::MoveTo(p)
                } else {
                    PathCommand::LineTo(p)
                }
            })
            .collect();
        Self { commands }
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// How segments of a stroked path are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    Miter,
    #[default]
    Round,
    Bevel,
}

/// Stroke parameters in screen units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub width: f64,
    pub color: Color,
    pub cap: PenStrokeCap,
    pub join: LineJoin,
}

impl StrokeStyle {
    /// Stroke for a pen, always with round joins.
    pub fn from_pen(pen: &Pen) -> Self {
        Self {
            width: pen.width,
            color: pen.color,
            cap: pen.pen_stroke_cap,
            join: LineJoin::Round,
        }
    }
}

impl Default for StrokeStyle {
    /// One pixel, transparent black, butt caps.
    fn default() -> Self {
        Self::from_pen(&Pen::default())
    }
}

/// Axis-aligned rectangle in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle spanning two opposite corners, in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}
