#![allow(unexpected_cfgs)] // Silence cfg warnings from objc macros

//! A click-through highlight that follows the mouse cursor.
//!
//! Everything outside `platform` is pure Rust and runs as ordinary tests.

pub mod error;
pub mod events;
pub mod handlers;
pub mod lifecycle;
pub mod model;
pub mod platform;
pub mod render;
pub mod tracker;

pub use error::{OverlayError, Result};
pub use events::AppEvent;
pub use model::{Geometry, OverlayConfig, Pulse, Rgba};
pub use render::{Canvas, Frame, PixmapCanvas, Point, Renderer};
pub use tracker::{PointerSource, Tracker, WindowMover};

/// Clamp a value to [lo, hi]
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

/// Convert RGBA floats [0..1] to #RRGGBB or #RRGGBBAA (if alpha < 1).
pub fn color_to_hex(r: f64, g: f64, b: f64, a: f64) -> String {
    let ri = (clamp(r, 0.0, 1.0) * 255.0).round() as u8;
    let gi = (clamp(g, 0.0, 1.0) * 255.0).round() as u8;
    let bi = (clamp(b, 0.0, 1.0) * 255.0).round() as u8;
    let ai = (clamp(a, 0.0, 1.0) * 255.0).round() as u8;
    if ai == 255 {
        format!("#{:02X}{:02X}{:02X}", ri, gi, bi)
    } else {
        format!("#{:02X}{:02X}{:02X}{:02X}", ri, gi, bi, ai)
    }
}
