//! Canvas that records drawing calls instead of producing pixels.

#![allow(dead_code)]

use map_common::{LabelStyle, Point, RenderError, RenderResult};
use renderer::{Canvas, ScreenPath, ScreenRect, StrokeStyle};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Stroke(ScreenPath, StrokeStyle),
    Label(String, Point, LabelStyle),
    Image(usize, ScreenRect),
}

#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
    /// When set, every call fails with this message
    pub fail_with: Option<String>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self {
            calls: Vec::new(),
            fail_with: Some(message.to_string()),
        }
    }

    pub fn strokes(&self) -> Vec<&DrawCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Stroke(..)))
            .collect()
    }

    pub fn labels(&self) -> Vec<&DrawCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Label(..)))
            .collect()
    }

    fn record(&mut self, call: DrawCall) -> RenderResult<()> {
        if let Some(message) = &self.fail_with {
            return Err(RenderError::Canvas(message.clone()));
        }
        self.calls.push(call);
        Ok(())
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> u32 {
        256
    }

    fn height(&self) -> u32 {
        256
    }

    fn stroke_path(&mut self, path: &ScreenPath, stroke: &StrokeStyle) -> RenderResult<()> {
        self.record(DrawCall::Stroke(path.clone(), *stroke))
    }

    fn draw_label(&mut self, text: &str, position: Point, style: &LabelStyle) -> RenderResult<()> {
        self.record(DrawCall::Label(text.to_string(), position, style.clone()))
    }

    fn draw_image(&mut self, data: &[u8], dest: ScreenRect) -> RenderResult<()> {
        self.record(DrawCall::Image(data.len(), dest))
    }
}
