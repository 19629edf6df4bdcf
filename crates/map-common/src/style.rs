//! Style descriptors for drawing features.
//!
//! Styles are loaded from configuration files, so every type here is
//! deserialisable. A [`Style`] is tagged by its `type` field:
//!
//! ```yaml
//! type: vector
//! line: { width: 3, color: "#ff0000", pen_stroke_cap: round }
//! ```

use serde::{Deserialize, Serialize};

use crate::feature::Feature;

/// Style applied to a feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Style {
    /// Text placed on the feature
    Label(LabelStyle),

    /// Stroke (and, for areas, fill) style
    Vector(VectorStyle),

    /// Any style the line renderer has no dedicated handling for
    Other,
}

/// Vector style for line geometries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VectorStyle {
    #[serde(default)]
    pub line: Pen,
}

/// Stroke description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pen {
    #[serde(default = "default_pen_width")]
    pub width: f64,

    #[serde(default)]
    pub color: Color,

    #[serde(default)]
    pub pen_stroke_cap: PenStrokeCap,
}

fn default_pen_width() -> f64 {
    1.0
}

impl Pen {
    pub fn new(width: f64, color: Color) -> Self {
        Self {
            width,
            color,
            pen_stroke_cap: PenStrokeCap::default(),
        }
    }

    pub fn with_cap(mut self, cap: PenStrokeCap) -> Self {
        self.pen_stroke_cap = cap;
        self
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self::new(default_pen_width(), Color::default())
    }
}

/// Shape of the ends of a stroked line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PenStrokeCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// Text label style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelStyle {
    /// Fixed label text, used when `label_column` is unset or missing
    #[serde(default)]
    pub text: Option<String>,

    /// Feature attribute holding the label text
    #[serde(default)]
    pub label_column: Option<String>,

    #[serde(default = "default_font_size")]
    pub font_size: f32,

    #[serde(default = "Color::black")]
    pub fore_color: Color,

    /// Background box color, none for no box
    #[serde(default)]
    pub back_color: Option<Color>,

    /// Screen offset in pixels applied after projection
    #[serde(default)]
    pub offset: [f32; 2],
}

fn default_font_size() -> f32 {
    12.0
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            text: None,
            label_column: None,
            font_size: default_font_size(),
            fore_color: Color::black(),
            back_color: None,
            offset: [0.0, 0.0],
        }
    }
}

impl LabelStyle {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn with_column(column: impl Into<String>) -> Self {
        Self {
            label_column: Some(column.into()),
            ..Default::default()
        }
    }

    /// Text to show for the feature.
    pub fn label_text<'a>(&'a self, feature: &'a Feature) -> Option<&'a str> {
        self.label_column
            .as_deref()
            .and_then(|column| feature.get(column))
            .or(self.text.as_deref())
    }
}

/// RGBA color with 8 bits per channel.
///
/// The default is transparent black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "ColorSpec")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const fn transparent() -> Self {
        Self::rgba(0, 0, 0, 0)
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    /// Parse "#RRGGBB" or "#RRGGBBAA".
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.trim_start_matches('#');
        let channel = |i: usize| u8::from_str_radix(s.get(i..i + 2)?, 16).ok();

        match s.len() {
            6 => Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    pub fn named(name: &str) -> Option<Self> {
        let color = match name.to_lowercase().as_str() {
            "transparent" => Self::transparent(),
            "black" => Self::black(),
            "white" => Self::white(),
            "red" => Self::rgb(255, 0, 0),
            "green" => Self::rgb(0, 255, 0),
            "blue" => Self::rgb(0, 0, 255),
            "yellow" => Self::rgb(255, 255, 0),
            "cyan" => Self::rgb(0, 255, 255),
            "magenta" => Self::rgb(255, 0, 255),
            "orange" => Self::rgb(255, 165, 0),
            "purple" => Self::rgb(128, 0, 128),
            "gray" | "grey" => Self::rgb(128, 128, 128),
            _ => return None,
        };
        Some(color)
    }
}

/// Color representations accepted in configuration files.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ColorSpec {
    /// Explicit RGBA
    Rgba {
        r: u8,
        g: u8,
        b: u8,
        #[serde(default = "opaque")]
        a: u8,
    },

    /// RGB array: [r, g, b] or [r, g, b, a]
    Array(Vec<u8>),

    /// Hex string "#RRGGBB" / "#RRGGBBAA" or a color name
    Text(String),
}

fn opaque() -> u8 {
    255
}

impl TryFrom<ColorSpec> for Color {
    type Error = String;

    fn try_from(spec: ColorSpec) -> Result<Self, Self::Error> {
        match spec {
            ColorSpec::Rgba { r, g, b, a } => Ok(Color::rgba(r, g, b, a)),
            ColorSpec::Array(arr) => match arr.as_slice() {
                [r, g, b] => Ok(Color::rgb(*r, *g, *b)),
                [r, g, b, a] => Ok(Color::rgba(*r, *g, *b, *a)),
                _ => Err(format!("color array must have 3 or 4 entries, got {}", arr.len())),
            },
            ColorSpec::Text(s) if s.starts_with('#') => {
                Color::from_hex(&s).ok_or_else(|| format!("invalid hex color: {s}"))
            }
            ColorSpec::Text(s) => Color::named(&s).ok_or_else(|| format!("unknown color name: {s}")),
        }
    }
}
