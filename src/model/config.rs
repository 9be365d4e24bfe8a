//! Overlay configuration (pure Rust, no FFI).
//!
//! `OverlayConfig` is built once from the compiled-in constants and handed to
//! the renderer, tracker and platform window. Nothing mutates it afterwards.

use super::constants::*;
use crate::{clamp, color_to_hex};

/// An RGBA color with channels in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    /// Same RGB, different alpha.
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Returns a copy with every channel clamped to [0, 1].
    pub fn clamped(self) -> Self {
        Self {
            r: clamp(self.r, 0.0, 1.0),
            g: clamp(self.g, 0.0, 1.0),
            b: clamp(self.b, 0.0, 1.0),
            a: clamp(self.a, 0.0, 1.0),
        }
    }

    /// `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(self) -> String {
        color_to_hex(self.r, self.g, self.b, self.a)
    }
}

/// Glow / circle / center dot palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorPreset {
    Yellow,
    Red,
    Green,
    Blue,
    Purple,
    Cyan,
    White,
    Orange,
    Pink,
}

impl ColorPreset {
    /// Returns `(glow, circle, center_dot)`.
    pub const fn palette(self) -> (Rgba, Rgba, Rgba) {
        match self {
            ColorPreset::Yellow => (
                Rgba::new(1.0, 1.0, 0.0, 0.2),
                Rgba::new(1.0, 1.0, 0.0, 0.5),
                Rgba::new(1.0, 1.0, 1.0, 0.8),
            ),
            ColorPreset::Red => (
                Rgba::new(1.0, 0.0, 0.0, 0.2),
                Rgba::new(1.0, 0.0, 0.0, 0.5),
                Rgba::new(1.0, 0.5, 0.5, 0.8),
            ),
            ColorPreset::Green => (
                Rgba::new(0.0, 1.0, 0.0, 0.2),
                Rgba::new(0.0, 1.0, 0.0, 0.5),
                Rgba::new(0.8, 1.0, 0.8, 0.8),
            ),
            ColorPreset::Blue => (
                Rgba::new(0.0, 0.0, 1.0, 0.2),
                Rgba::new(0.0, 0.0, 1.0, 0.5),
                Rgba::new(0.7, 0.9, 1.0, 0.8),
            ),
            ColorPreset::Purple => (
                Rgba::new(1.0, 0.0, 1.0, 0.2),
                Rgba::new(1.0, 0.0, 1.0, 0.5),
                Rgba::new(0.9, 0.7, 1.0, 0.8),
            ),
            ColorPreset::Cyan => (
                Rgba::new(0.0, 1.0, 1.0, 0.2),
                Rgba::new(0.0, 1.0, 1.0, 0.5),
                Rgba::new(0.8, 1.0, 1.0, 0.8),
            ),
            ColorPreset::White => (
                Rgba::new(1.0, 1.0, 1.0, 0.1),
                Rgba::new(1.0, 1.0, 1.0, 0.3),
                Rgba::new(1.0, 1.0, 1.0, 0.6),
            ),
            ColorPreset::Orange => (
                Rgba::new(1.0, 0.5, 0.0, 0.2),
                Rgba::new(1.0, 0.5, 0.0, 0.5),
                Rgba::new(1.0, 0.8, 0.5, 0.8),
            ),
            ColorPreset::Pink => (
                Rgba::new(1.0, 0.0, 0.5, 0.2),
                Rgba::new(1.0, 0.0, 0.5, 0.5),
                Rgba::new(1.0, 0.8, 0.9, 0.8),
            ),
        }
    }
}

/// Crosshair color presets. Applying one also turns the crosshair on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrosshairPreset {
    Red,
    Green,
    Yellow,
    Cyan,
}

impl CrosshairPreset {
    pub const fn color(self) -> Rgba {
        match self {
            CrosshairPreset::Red => Rgba::new(1.0, 0.0, 0.0, 0.7),
            CrosshairPreset::Green => Rgba::new(0.0, 1.0, 0.0, 0.7),
            CrosshairPreset::Yellow => Rgba::new(1.0, 1.0, 0.0, 0.5),
            CrosshairPreset::Cyan => Rgba::new(0.0, 1.0, 1.0, 0.6),
        }
    }
}

/// Ring and pulse presets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EffectPreset {
    /// 3 rings, 20 px apart.
    SimpleRadar,
    /// 5 rings, 10 px apart.
    DenseRadar,
    /// Pulse at 0.2 px/tick over 10 px.
    SlowBreathing,
    /// Pulse at 1.0 px/tick over 3 px.
    FastSubtlePulse,
}

/// Complete overlay configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayConfig {
    /// Circle diameter in pixels.
    pub circle_size: u32,
    pub glow_color: Rgba,
    pub circle_color: Rgba,
    pub crosshair_color: Rgba,
    pub center_dot_color: Rgba,
    /// Base stroke width for the circle/rings.
    pub line_width: u32,
    pub show_glow: bool,
    pub show_center_dot: bool,
    pub show_crosshair: bool,
    pub show_multiple_rings: bool,
    pub show_pulse: bool,
    /// Center dot radius in pixels.
    pub center_dot_size: u32,
    pub crosshair_width: u32,
    pub ring_count: u32,
    pub ring_spacing: u32,
    /// Pixels per repaint.
    pub pulse_speed: f64,
    pub pulse_range: u32,
    /// Tracking timer period.
    pub update_interval_ms: u64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        let (glow, circle, dot) = COLOR_PRESET.palette();
        Self {
            circle_size: CIRCLE_SIZE,
            glow_color: glow,
            circle_color: circle,
            crosshair_color: CROSSHAIR_COLOR,
            center_dot_color: dot,
            line_width: LINE_WIDTH,
            show_glow: SHOW_GLOW,
            show_center_dot: SHOW_CENTER_DOT,
            show_crosshair: SHOW_CROSSHAIR,
            show_multiple_rings: SHOW_MULTIPLE_RINGS,
            show_pulse: SHOW_PULSE_EFFECT,
            center_dot_size: CENTER_DOT_SIZE,
            crosshair_width: CROSSHAIR_WIDTH,
            ring_count: RING_COUNT,
            ring_spacing: RING_SPACING,
            pulse_speed: PULSE_SPEED,
            pulse_range: PULSE_RANGE,
            update_interval_ms: UPDATE_INTERVAL_MS,
        }
    }
}

impl OverlayConfig {
    /// Clamps values that would otherwise break drawing or the timer.
    pub fn validate(mut self) -> Self {
        self.glow_color = self.glow_color.clamped();
        self.circle_color = self.circle_color.clamped();
        self.crosshair_color = self.crosshair_color.clamped();
        self.center_dot_color = self.center_dot_color.clamped();
        self.line_width = self.line_width.max(1);
        self.crosshair_width = self.crosshair_width.max(1);
        self.update_interval_ms = self.update_interval_ms.max(1);
        if !self.pulse_speed.is_finite() || self.pulse_speed < 0.0 {
            self.pulse_speed = 0.0;
        }
        self
    }

    pub fn with_colors(mut self, preset: ColorPreset) -> Self {
        let (glow, circle, dot) = preset.palette();
        self.glow_color = glow;
        self.circle_color = circle;
        self.center_dot_color = dot;
        self
    }

    pub fn with_crosshair(mut self, preset: CrosshairPreset) -> Self {
        self.show_crosshair = true;
        self.crosshair_color = preset.color();
        self
    }

    pub fn with_effect(mut self, preset: EffectPreset) -> Self {
        match preset {
            EffectPreset::SimpleRadar => {
                self.show_multiple_rings = true;
                self.ring_count = 3;
                self.ring_spacing = 20;
            }
            EffectPreset::DenseRadar => {
                self.show_multiple_rings = true;
                self.ring_count = 5;
                self.ring_spacing = 10;
            }
            EffectPreset::SlowBreathing => {
                self.show_pulse = true;
                self.pulse_speed = 0.2;
                self.pulse_range = 10;
            }
            EffectPreset::FastSubtlePulse => {
                self.show_pulse = true;
                self.pulse_speed = 1.0;
                self.pulse_range = 3;
            }
        }
        self
    }

    /// Tracking timer period as a `Duration`.
    pub fn update_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.update_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_constants() {
        let config = OverlayConfig::default();
        assert_eq!(config.circle_size, CIRCLE_SIZE);
        assert_eq!(config.line_width, LINE_WIDTH);
        assert_eq!(config.update_interval_ms, UPDATE_INTERVAL_MS);
        assert_eq!(config.circle_color, COLOR_PRESET.palette().1);
    }

    #[test]
    fn validate_clamps_colors_and_widths() {
        let mut config = OverlayConfig::default();
        config.circle_color = Rgba::new(1.5, -0.2, 0.5, 2.0);
        config.line_width = 0;
        config.update_interval_ms = 0;
        config.pulse_speed = f64::NAN;
        let config = config.validate();
        assert_eq!(config.circle_color, Rgba::new(1.0, 0.0, 0.5, 1.0));
        assert_eq!(config.line_width, 1);
        assert_eq!(config.update_interval_ms, 1);
        assert_eq!(config.pulse_speed, 0.0);
    }

    #[test]
    fn crosshair_preset_enables_crosshair() {
        let config = OverlayConfig::default().with_crosshair(CrosshairPreset::Red);
        assert!(config.show_crosshair);
        assert_eq!(config.crosshair_color, Rgba::new(1.0, 0.0, 0.0, 0.7));
    }

    #[test]
    fn dense_radar_preset() {
        let config = OverlayConfig::default().with_effect(EffectPreset::DenseRadar);
        assert!(config.show_multiple_rings);
        assert_eq!((config.ring_count, config.ring_spacing), (5, 10));
        assert!(!config.show_pulse);
    }

    #[test]
    fn rgba_hex() {
        assert_eq!(Rgba::new(1.0, 1.0, 0.0, 1.0).to_hex(), "#FFFF00");
        assert_eq!(Rgba::new(1.0, 1.0, 0.0, 0.5).to_hex(), "#FFFF0080");
    }
}
