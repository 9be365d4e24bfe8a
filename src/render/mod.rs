//! Overlay drawing.
//!
//! The renderer decides *what* to draw each frame and issues the calls
//! through the [`Canvas`] trait; each platform provides the *how*
//! (tiny-skia pixmap, NSBezierPath, Direct2D).
//!
//! ```text
//! timer tick ──► Renderer::render(&mut canvas) ──► backend presents pixels
//!                    │
//!                    └─► Frame { wants_repaint } ──► AppEvent::Repaint
//! ```

pub mod raster;
pub mod renderer;

pub use raster::PixmapCanvas;
pub use renderer::{ring_strokes, Frame, Renderer, RingStroke};

use crate::error::Result;
use crate::model::Rgba;

/// A point in window coordinates (pixels, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Immediate-mode drawing surface.
///
/// Any error aborts the current frame; the caller logs it and waits for the
/// next repaint instead of crashing.
pub trait Canvas {
    /// Reset every pixel to fully transparent.
    fn clear(&mut self) -> Result<()>;

    /// Fill a disc.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) -> Result<()>;

    /// Stroke a circle outline of the given line width.
    fn stroke_circle(&mut self, center: Point, radius: f64, width: f64, color: Rgba)
        -> Result<()>;

    /// Stroke a straight segment.
    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Rgba) -> Result<()>;
}
