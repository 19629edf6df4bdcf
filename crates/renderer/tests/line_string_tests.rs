//! Tests for drawing line strings through the canvas abstraction.

mod common;

use common::{DrawCall, RecordingCanvas};
use map_common::{
    Color, Feature, LabelStyle, LineString, PenStrokeCap, Point, RenderError, Style, Viewport,
};
use renderer::line_string;
use renderer::{LineJoin, PathCommand, StrokeStyle};
use test_utils::{
    assert_points_approx_eq, create_zigzag_line, name_label_style, named_feature,
    three_vertex_line, vector_style, viewport_256,
};

fn draw(canvas: &mut RecordingCanvas, viewport: &Viewport, style: &Style, line: &LineString) {
    let feature = Feature::new(line.clone());
    line_string::draw(canvas, viewport, style, &feature, line).unwrap();
}

// ============================================================================
// Stroke tests
// ============================================================================

#[test]
fn test_three_vertex_line_is_one_stroke() {
    let mut canvas = RecordingCanvas::new();
    let viewport = viewport_256();
    let line = three_vertex_line();
    let color = Color::rgb(200, 30, 30);

    draw(&mut canvas, &viewport, &vector_style(3.0, color, PenStrokeCap::Round), &line);

    assert_eq!(canvas.calls.len(), 1);
    let DrawCall::Stroke(path, stroke) = &canvas.calls[0] else {
        panic!("expected a stroke, got {:?}", canvas.calls[0]);
    };

    assert_eq!(
        *stroke,
        StrokeStyle {
            width: 3.0,
            color,
            cap: PenStrokeCap::Round,
            join: LineJoin::Round,
        }
    );

    let commands = path.commands();
    assert_eq!(commands.len(), 3);
    assert!(matches!(commands[0], PathCommand::MoveTo(_)));
    assert!(matches!(commands[1], PathCommand::LineTo(_)));
    assert!(matches!(commands[2], PathCommand::LineTo(_)));

    for (command, vertex) in commands.iter().zip(line.vertices()) {
        assert_points_approx_eq!(
            command.point(),
            viewport.world_to_screen(vertex.x, vertex.y),
            1e-9
        );
    }
}

#[test]
fn test_projected_points_flip_y() {
    let mut canvas = RecordingCanvas::new();
    let line = three_vertex_line();

    draw(
        &mut canvas,
        &viewport_256(),
        &vector_style(1.0, Color::black(), PenStrokeCap::Butt),
        &line,
    );

    let DrawCall::Stroke(path, _) = &canvas.calls[0] else {
        panic!("expected a stroke");
    };
    // (-100, -50) sits left of and below the centre
    assert_points_approx_eq!(path.commands()[0].point(), Point::new(28.0, 178.0), 1e-9);
    assert_points_approx_eq!(path.commands()[1].point(), Point::new(128.0, 48.0), 1e-9);
    assert_points_approx_eq!(path.commands()[2].point(), Point::new(218.0, 118.0), 1e-9);
}

#[test]
fn test_vertex_order_is_preserved() {
    let mut canvas = RecordingCanvas::new();
    let viewport = Viewport::new(Point::new(50.0, 5.0), 1.0, 200.0, 200.0);
    let line = create_zigzag_line(7, 10.0);

    draw(&mut canvas, &viewport, &vector_style(2.0, Color::white(), PenStrokeCap::Square), &line);

    let DrawCall::Stroke(path, _) = &canvas.calls[0] else {
        panic!("expected a stroke");
    };
    let xs: Vec<f64> = path.commands().iter().map(|c| c.point().x).collect();
    assert_eq!(xs, vec![50.0, 60.0, 70.0, 80.0, 90.0, 100.0, 110.0]);
}

#[test]
fn test_other_style_strokes_with_defaults() {
    let mut canvas = RecordingCanvas::new();

    draw(&mut canvas, &viewport_256(), &Style::Other, &three_vertex_line());

    let DrawCall::Stroke(path, stroke) = &canvas.calls[0] else {
        panic!("expected a stroke");
    };
    assert_eq!(path.len(), 3);
    assert_eq!(stroke.width, 1.0);
    assert_eq!(stroke.color, Color::transparent());
    assert_eq!(stroke.cap, PenStrokeCap::Butt);
    assert_eq!(stroke.join, LineJoin::Round);
}

#[test]
fn test_single_vertex_line_is_still_submitted() {
    let mut canvas = RecordingCanvas::new();
    let line = LineString::new(vec![Point::new(0.0, 0.0)]);

    draw(&mut canvas, &viewport_256(), &Style::Other, &line);

    let DrawCall::Stroke(path, _) = &canvas.calls[0] else {
        panic!("expected a stroke");
    };
    assert_eq!(path.commands(), &[PathCommand::MoveTo(Point::new(128.0, 128.0))]);
}

#[test]
fn test_empty_line_is_submitted_as_empty_path() {
    let mut canvas = RecordingCanvas::new();

    draw(&mut canvas, &viewport_256(), &Style::Other, &LineString::default());

    assert_eq!(canvas.strokes().len(), 1);
}

// ============================================================================
// Label style tests
// ============================================================================

#[test]
fn test_label_style_draws_label_at_centroid() {
    let mut canvas = RecordingCanvas::new();
    let viewport = viewport_256();
    let line = three_vertex_line();
    let feature = named_feature(line.clone(), "Ridge Road");

    line_string::draw(&mut canvas, &viewport, &name_label_style(), &feature, &line).unwrap();

    assert!(canvas.strokes().is_empty());
    assert_eq!(canvas.calls.len(), 1);
    let DrawCall::Label(text, position, _) = &canvas.calls[0] else {
        panic!("expected a label");
    };
    assert_eq!(text, "Ridge Road");
    // bbox (-100, -50, 90, 80) has its centre at (-5, 15)
    assert_points_approx_eq!(*position, viewport.world_to_screen(-5.0, 15.0), 1e-9);
}

#[test]
fn test_label_offset_is_applied_on_screen() {
    let mut canvas = RecordingCanvas::new();
    let line = three_vertex_line();
    let feature = Feature::new(line.clone());
    let style = Style::Label(LabelStyle {
        offset: [4.0, -6.0],
        ..LabelStyle::with_text("fixed")
    });

    line_string::draw(&mut canvas, &viewport_256(), &style, &feature, &line).unwrap();

    let DrawCall::Label(text, position, _) = &canvas.calls[0] else {
        panic!("expected a label");
    };
    assert_eq!(text, "fixed");
    assert_points_approx_eq!(*position, Point::new(123.0 + 4.0, 113.0 - 6.0), 1e-9);
}

#[test]
fn test_label_without_text_draws_nothing() {
    let mut canvas = RecordingCanvas::new();
    let line = three_vertex_line();
    let feature = Feature::new(line.clone());

    line_string::draw(&mut canvas, &viewport_256(), &name_label_style(), &feature, &line).unwrap();

    assert!(canvas.calls.is_empty());
}

#[test]
fn test_label_on_empty_line_draws_nothing() {
    let mut canvas = RecordingCanvas::new();
    let line = LineString::default();
    let feature = named_feature(line.clone(), "nowhere");

    line_string::draw(&mut canvas, &viewport_256(), &name_label_style(), &feature, &line).unwrap();

    assert!(canvas.calls.is_empty());
}

// ============================================================================
// Error propagation tests
// ============================================================================

#[test]
fn test_canvas_errors_propagate() {
    let mut canvas = RecordingCanvas::failing("surface lost");
    let line = three_vertex_line();
    let feature = Feature::new(line.clone());

    let err = line_string::draw(
        &mut canvas,
        &viewport_256(),
        &vector_style(1.0, Color::black(), PenStrokeCap::Butt),
        &feature,
        &line,
    )
    .unwrap_err();

    assert!(matches!(err, RenderError::Canvas(msg) if msg == "surface lost"));
}
