//! Window geometry derived from the configuration.

use super::config::OverlayConfig;
use super::constants::*;

/// Sizes derived once from `OverlayConfig`. All values are in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Side length of the square overlay window.
    pub window_size: u32,
    /// Window center on both axes (`window_size / 2`, floored).
    pub center: u32,
    /// Glow radius before any pulse offset.
    pub outer_radius: u32,
    /// Main circle radius before any pulse offset.
    pub main_radius: u32,
    /// Base stroke width after large-circle scaling.
    pub line_width: u32,
}

impl Geometry {
    pub fn from_config(config: &OverlayConfig) -> Self {
        let window_size = config.circle_size + WINDOW_PADDING;
        let center = window_size / 2;
        Self {
            window_size,
            center,
            outer_radius: center.saturating_sub(OUTER_RADIUS_INSET),
            main_radius: center.saturating_sub(MAIN_RADIUS_INSET),
            line_width: scaled_line_width(config.circle_size, config.line_width),
        }
    }

    /// Center point in window coordinates.
    pub fn center_point(&self) -> (f64, f64) {
        (self.center as f64, self.center as f64)
    }
}

/// Large circles get thicker strokes so they stay visible.
pub fn scaled_line_width(circle_size: u32, line_width: u32) -> u32 {
    if circle_size < LINE_SCALE_THRESHOLD {
        line_width
    } else {
        line_width.max(circle_size / LINE_SCALE_DIVISOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_size(circle_size: u32) -> OverlayConfig {
        OverlayConfig {
            circle_size,
            ..OverlayConfig::default()
        }
    }

    #[test]
    fn default_geometry() {
        let g = Geometry::from_config(&config_with_size(100));
        assert_eq!(g.window_size, 120);
        assert_eq!(g.center, 60);
        assert_eq!(g.outer_radius, 55);
        assert_eq!(g.main_radius, 50);
    }

    #[test]
    fn odd_size_floors_center() {
        let g = Geometry::from_config(&config_with_size(61));
        assert_eq!(g.window_size, 81);
        assert_eq!(g.center, 40);
    }

    #[test]
    fn line_width_scaling() {
        assert_eq!(scaled_line_width(100, 3), 3);
        assert_eq!(scaled_line_width(300, 3), 6);
        assert_eq!(scaled_line_width(150, 3), 3);
        assert_eq!(scaled_line_width(300, 8), 8);
    }

    #[test]
    fn zero_diameter_does_not_underflow() {
        let g = Geometry::from_config(&config_with_size(0));
        assert_eq!(g.window_size, 20);
        assert_eq!(g.outer_radius, 5);
        assert_eq!(g.main_radius, 0);
    }
}
