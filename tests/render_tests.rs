//! Renderer tests against a canvas that records every draw call.

use cursor_circle::error::{OverlayError, Result};
use cursor_circle::model::{OverlayConfig, Rgba};
use cursor_circle::render::{Canvas, PixmapCanvas, Point, Renderer};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Clear,
    Fill {
        center: Point,
        radius: f64,
        color: Rgba,
    },
    Stroke {
        center: Point,
        radius: f64,
        width: f64,
        color: Rgba,
    },
    Line {
        from: Point,
        to: Point,
        width: f64,
        color: Rgba,
    },
}

#[derive(Default)]
struct RecordingCanvas {
    calls: Vec<Call>,
}

impl RecordingCanvas {
    fn strokes(&self) -> Vec<(f64, f64, Rgba)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Stroke {
                    radius,
                    width,
                    color,
                    ..
                } => Some((*radius, *width, *color)),
                _ => None,
            })
            .collect()
    }

    fn lines(&self) -> Vec<(Point, Point)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self) -> Result<()> {
        self.calls.push(Call::Clear);
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) -> Result<()> {
        self.calls.push(Call::Fill {
            center,
            radius,
            color,
        });
        Ok(())
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, width: f64, color: Rgba) -> Result<()> {
        self.calls.push(Call::Stroke {
            center,
            radius,
            width,
            color,
        });
        Ok(())
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Rgba) -> Result<()> {
        self.calls.push(Call::Line {
            from,
            to,
            width,
            color,
        });
        Ok(())
    }
}

/// Fails every stroke, succeeds at everything else.
struct BrokenStrokes;

impl Canvas for BrokenStrokes {
    fn clear(&mut self) -> Result<()> {
        Ok(())
    }

    fn fill_circle(&mut self, _: Point, _: f64, _: Rgba) -> Result<()> {
        Ok(())
    }

    fn stroke_circle(&mut self, _: Point, _: f64, _: f64, _: Rgba) -> Result<()> {
        Err(OverlayError::Draw("no strokes today".into()))
    }

    fn stroke_line(&mut self, _: Point, _: Point, _: f64, _: Rgba) -> Result<()> {
        Ok(())
    }
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn render_once(config: OverlayConfig) -> RecordingCanvas {
    let mut renderer = Renderer::new(config);
    let mut canvas = RecordingCanvas::default();
    renderer.render(&mut canvas).unwrap();
    canvas
}

#[test]
fn default_frame_is_glow_circle_dot() {
    let config = OverlayConfig::default();
    let center = Point::new(60.0, 60.0);
    let canvas = render_once(config.clone());

    assert_eq!(
        canvas.calls,
        vec![
            Call::Clear,
            Call::Fill {
                center,
                radius: 55.0,
                color: config.glow_color,
            },
            Call::Stroke {
                center,
                radius: 50.0,
                width: 3.0,
                color: config.circle_color,
            },
            Call::Fill {
                center,
                radius: 3.0,
                color: config.center_dot_color,
            },
        ]
    );
}

#[test]
fn default_frame_does_not_ask_for_repaint() {
    let mut renderer = Renderer::new(OverlayConfig::default());
    let frame = renderer.render(&mut RecordingCanvas::default()).unwrap();
    assert!(!frame.wants_repaint);
    assert!(approx_eq(frame.radius, 50.0));
}

#[test]
fn dense_rings_drop_the_innermost() {
    let config = OverlayConfig {
        circle_size: 90,
        show_multiple_rings: true,
        ring_count: 5,
        ring_spacing: 10,
        ..OverlayConfig::default()
    };
    let canvas = render_once(config);
    let strokes = canvas.strokes();

    let radii: Vec<f64> = strokes.iter().map(|s| s.0).collect();
    let widths: Vec<f64> = strokes.iter().map(|s| s.1).collect();
    assert_eq!(radii, vec![45.0, 35.0, 25.0, 15.0]);
    assert_eq!(widths, vec![3.0, 2.0, 1.0, 1.0]);

    let alphas: Vec<f64> = strokes.iter().map(|s| s.2.a).collect();
    for (got, want) in alphas.iter().zip([0.5, 0.35, 0.2, 0.1]) {
        assert!(approx_eq(*got, want), "alpha {got} != {want}");
    }
}

#[test]
fn ring_at_min_radius_is_not_drawn() {
    // main radius 40, rings at 40, 25 and 10
    let config = OverlayConfig {
        circle_size: 80,
        show_multiple_rings: true,
        ring_count: 3,
        ring_spacing: 15,
        ..OverlayConfig::default()
    };
    let radii: Vec<f64> = render_once(config).strokes().iter().map(|s| s.0).collect();
    assert_eq!(radii, vec![40.0, 25.0]);
}

#[test]
fn crosshair_spans_main_radius() {
    let config = OverlayConfig {
        show_crosshair: true,
        ..OverlayConfig::default()
    };
    let canvas = render_once(config);
    assert_eq!(
        canvas.lines(),
        vec![
            (Point::new(10.0, 60.0), Point::new(110.0, 60.0)),
            (Point::new(60.0, 10.0), Point::new(60.0, 110.0)),
        ]
    );
    // Crosshair comes before the dot
    assert!(matches!(canvas.calls.last(), Some(Call::Fill { radius, .. }) if *radius == 3.0));
}

#[test]
fn hidden_parts_are_skipped() {
    let config = OverlayConfig {
        show_glow: false,
        show_center_dot: false,
        ..OverlayConfig::default()
    };
    let canvas = render_once(config);
    assert_eq!(canvas.calls.len(), 2);
    assert_eq!(canvas.calls[0], Call::Clear);
    assert!(matches!(canvas.calls[1], Call::Stroke { .. }));
}

#[test]
fn pulse_moves_circle_glow_and_crosshair_together() {
    let config = OverlayConfig {
        show_pulse: true,
        show_crosshair: true,
        ..OverlayConfig::default()
    };
    let mut renderer = Renderer::new(config);

    let mut canvas = RecordingCanvas::default();
    let frame = renderer.render(&mut canvas).unwrap();
    assert!(frame.wants_repaint);
    assert!(approx_eq(frame.radius, 50.5));

    match &canvas.calls[1] {
        Call::Fill { radius, .. } => assert!(approx_eq(*radius, 55.5)),
        other => panic!("expected glow, got {other:?}"),
    }
    assert!(approx_eq(canvas.strokes()[0].0, 50.5));
    let (from, to) = canvas.lines()[0];
    assert!(approx_eq(to.x - from.x, 101.0));
}

#[test]
fn pulse_stays_in_band_across_frames() {
    let config = OverlayConfig {
        show_pulse: true,
        ..OverlayConfig::default()
    };
    let mut renderer = Renderer::new(config);
    for _ in 0..500 {
        let frame = renderer.render(&mut RecordingCanvas::default()).unwrap();
        assert!((45.0..=55.0).contains(&frame.radius));
    }
}

#[test]
fn canvas_error_aborts_the_frame() {
    let mut renderer = Renderer::new(OverlayConfig::default());
    let err = renderer.render(&mut BrokenStrokes).unwrap_err();
    assert!(matches!(err, OverlayError::Draw(_)));

    // The next frame is attempted normally
    assert!(renderer.render(&mut RecordingCanvas::default()).is_ok());
}

#[test]
fn default_frame_rasterizes() {
    let mut renderer = Renderer::new(OverlayConfig::default());
    let mut canvas = PixmapCanvas::new(120, 120).unwrap();
    renderer.render(&mut canvas).unwrap();

    // Corner outside the glow stays transparent
    assert_eq!(canvas.pixel(0, 0).unwrap().alpha(), 0);
    // On the circle line, right of center
    assert!(canvas.pixel(110, 60).unwrap().alpha() > 0);
    // Dot over glow is brighter than glow alone
    let dot = canvas.pixel(60, 60).unwrap().alpha();
    let glow = canvas.pixel(60, 30).unwrap().alpha();
    assert!(dot > glow);
    assert!(glow > 0);
}

#[test]
fn unvalidated_nan_pulse_speed_still_renders() {
    let config = OverlayConfig {
        show_pulse: true,
        pulse_speed: f64::NAN,
        ..OverlayConfig::default()
    };
    let mut renderer = Renderer::new(config);
    assert!(approx_eq(renderer.config().pulse_speed, 0.0));
    for _ in 0..3 {
        let frame = renderer.render(&mut RecordingCanvas::default()).unwrap();
        assert!(approx_eq(frame.radius, 50.0));
    }
}
