//! Configuration constants and default values.
//!
//! Everything the overlay draws is decided here at compile time. Edit these
//! values and rebuild to customise the highlight; nothing is read from disk,
//! the command line or the environment.

use super::config::{ColorPreset, Rgba};

// === Size ===

/// Circle diameter in pixels (60 = tiny, 100 = normal, 200 = huge, 300 = massive).
pub const CIRCLE_SIZE: u32 = 100;

// === Colors ===

/// Color preset for glow, circle and center dot.
pub const COLOR_PRESET: ColorPreset = ColorPreset::Yellow;

/// Crosshair color: white with 30% opacity.
pub const CROSSHAIR_COLOR: Rgba = Rgba::new(1.0, 1.0, 1.0, 0.3);

// === Style ===

/// Thickness of the circle line (1 = thin, 3 = normal, 5 = thick).
pub const LINE_WIDTH: u32 = 3;

/// Enable the soft outer glow.
pub const SHOW_GLOW: bool = true;

/// Enable the center dot.
pub const SHOW_CENTER_DOT: bool = true;

/// Radius of the center dot in pixels.
pub const CENTER_DOT_SIZE: u32 = 3;

/// Enable the crosshair inside the circle.
pub const SHOW_CROSSHAIR: bool = false;

/// Crosshair line thickness in pixels.
pub const CROSSHAIR_WIDTH: u32 = 1;

// === Effects ===

/// Draw concentric rings instead of a single circle (radar effect).
pub const SHOW_MULTIPLE_RINGS: bool = false;

/// Number of rings when the radar effect is on.
pub const RING_COUNT: u32 = 3;

/// Pixels between rings.
pub const RING_SPACING: u32 = 15;

/// Enable the pulsing animation.
pub const SHOW_PULSE_EFFECT: bool = false;

/// Pixels the pulse radius moves per repaint (0.1 = slow, 0.5 = normal, 1.0 = fast).
pub const PULSE_SPEED: f64 = 0.5;

/// Maximum pixels the pulse expands or contracts around the main radius.
pub const PULSE_RANGE: u32 = 5;

// === Performance ===

/// Milliseconds between position updates (10 = smooth, 20 = balanced, 30 = power-saving).
pub const UPDATE_INTERVAL_MS: u64 = 10;

// === Geometry ===

/// Padding added to the diameter to get the window side length.
pub const WINDOW_PADDING: u32 = 20;

/// Inset from the window center to the glow edge.
pub const OUTER_RADIUS_INSET: u32 = 5;

/// Inset from the window center to the main circle.
pub const MAIN_RADIUS_INSET: u32 = 10;

/// Diameter from which line widths scale with the circle.
pub const LINE_SCALE_THRESHOLD: u32 = 150;

/// Divisor for the scaled line width on large circles.
pub const LINE_SCALE_DIVISOR: u32 = 50;

/// Rings at or below this radius are not drawn.
pub const RING_MIN_RADIUS: f64 = 10.0;

/// Alpha lost per ring index.
pub const RING_ALPHA_STEP: f64 = 0.15;

/// Rings never fade below this alpha.
pub const RING_MIN_ALPHA: f64 = 0.1;

/// Floor for any animated radius (pulse, glow).
pub const MIN_RADIUS: f64 = 1.0;

// === Lifecycle ===

/// Printed once, on a line of its own, when the overlay is stopped with Ctrl+C.
pub const FAREWELL_MESSAGE: &str = "Cursor circle stopped.";

/// Diagnostics verbosity (`RUST_LOG` is not read).
pub const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

/// Window title (visible to window lists and debugging tools only).
pub const WINDOW_TITLE: &str = "Cursor Circle";
