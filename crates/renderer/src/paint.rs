//! Conversion of style values to tiny-skia types.

use map_common::{Color, PenStrokeCap};
use tiny_skia::{Paint, Stroke};

use crate::path::{LineJoin, StrokeStyle};

pub fn to_skia_color(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

pub fn to_line_cap(cap: PenStrokeCap) -> tiny_skia::LineCap {
    match cap {
        PenStrokeCap::Butt => tiny_skia::LineCap::Butt,
        PenStrokeCap::Round => tiny_skia::LineCap::Round,
        PenStrokeCap::Square => tiny_skia::LineCap::Square,
    }
}

pub fn to_line_join(join: LineJoin) -> tiny_skia::LineJoin {
    match join {
        LineJoin::Miter => tiny_skia::LineJoin::Miter,
        LineJoin::Round => tiny_skia::LineJoin::Round,
        LineJoin::Bevel => tiny_skia::LineJoin::Bevel,
    }
}

/// Anti-aliased solid paint.
pub fn solid_paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(to_skia_color(color));
    paint.anti_alias = true;
    paint
}

pub fn to_stroke(style: &StrokeStyle) -> Stroke {
    Stroke {
        width: style.width as f32,
        line_cap: to_line_cap(style.cap),
        line_join: to_line_join(style.join),
        ..Stroke::default()
    }
}
