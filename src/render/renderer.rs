//! Per-frame drawing logic.
//!
//! Order is fixed: clear, advance the pulse, glow, rings or circle,
//! crosshair, center dot.

use log::trace;

use super::{Canvas, Point};
use crate::error::Result;
use crate::model::constants::*;
use crate::model::{Geometry, OverlayConfig, Pulse, Rgba};

/// Outcome of one `Renderer::render` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Radius used for the circle/rings this frame.
    pub radius: f64,
    /// True when the pulse is running and another frame should follow.
    pub wants_repaint: bool,
}

/// One ring of the radar effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingStroke {
    pub index: u32,
    pub radius: f64,
    pub width: f64,
    pub color: Rgba,
}

/// Rings that survive the minimum-radius cut, innermost last.
///
/// Ring `i` sits at `radius - i * spacing`, is `i` pixels thinner than the
/// base line (never below 1) and fades by `RING_ALPHA_STEP` per index
/// (never below `RING_MIN_ALPHA`).
pub fn ring_strokes(
    radius: f64,
    line_width: u32,
    color: Rgba,
    ring_count: u32,
    ring_spacing: u32,
) -> Vec<RingStroke> {
    (0..ring_count)
        .filter_map(|i| {
            let ring_radius = radius - (i as f64 * ring_spacing as f64);
            if ring_radius <= RING_MIN_RADIUS {
                return None;
            }
            let alpha = (color.a - i as f64 * RING_ALPHA_STEP).max(RING_MIN_ALPHA);
            Some(RingStroke {
                index: i,
                radius: ring_radius,
                width: line_width.saturating_sub(i).max(1) as f64,
                color: color.with_alpha(alpha),
            })
        })
        .collect()
}

/// Owns the configuration, the derived geometry and the animation state.
#[derive(Debug, Clone)]
pub struct Renderer {
    config: OverlayConfig,
    geometry: Geometry,
    pulse: Option<Pulse>,
}

impl Renderer {
    /// The configuration is validated before anything is derived from it.
    pub fn new(config: OverlayConfig) -> Self {
        let config = config.validate();
        let geometry = Geometry::from_config(&config);
        let pulse = config.show_pulse.then(|| {
            Pulse::new(
                geometry.main_radius as f64,
                config.pulse_speed,
                config.pulse_range as f64,
            )
        });
        Self {
            config,
            geometry,
            pulse,
        }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn pulse(&self) -> Option<&Pulse> {
        self.pulse.as_ref()
    }

    /// Paint one frame onto `canvas`.
    pub fn render<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> Result<Frame> {
        canvas.clear()?;

        let main_radius = self.geometry.main_radius as f64;
        let (radius, wants_repaint) = match self.pulse.as_mut() {
            Some(pulse) => (pulse.advance(), true),
            None => (main_radius, false),
        };
        let (cx, cy) = self.geometry.center_point();
        let center = Point::new(cx, cy);
        let config = &self.config;

        if config.show_glow {
            let delta = self.pulse.as_ref().map_or(0.0, Pulse::delta);
            let glow_radius = (self.geometry.outer_radius as f64 + delta).max(MIN_RADIUS);
            canvas.fill_circle(center, glow_radius, config.glow_color)?;
        }

        if config.show_multiple_rings {
            for ring in ring_strokes(
                radius,
                self.geometry.line_width,
                config.circle_color,
                config.ring_count,
                config.ring_spacing,
            ) {
                canvas.stroke_circle(center, ring.radius, ring.width, ring.color)?;
            }
        } else {
            canvas.stroke_circle(
                center,
                radius,
                self.geometry.line_width as f64,
                config.circle_color,
            )?;
        }

        if config.show_crosshair {
            let r = if self.pulse.is_some() { radius } else { main_radius };
            let width = config.crosshair_width as f64;
            canvas.stroke_line(
                Point::new(cx - r, cy),
                Point::new(cx + r, cy),
                width,
                config.crosshair_color,
            )?;
            canvas.stroke_line(
                Point::new(cx, cy - r),
                Point::new(cx, cy + r),
                width,
                config.crosshair_color,
            )?;
        }

        if config.show_center_dot {
            canvas.fill_circle(
                center,
                config.center_dot_size as f64,
                config.center_dot_color,
            )?;
        }

        trace!("frame painted at radius {radius:.1}");
        Ok(Frame {
            radius,
            wants_repaint,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: Rgba = Rgba::new(1.0, 1.0, 0.0, 0.5);

    #[test]
    fn ring_at_exactly_min_radius_is_skipped() {
        let rings = ring_strokes(40.0, 3, BASE, 3, 15);
        let radii: Vec<f64> = rings.iter().map(|r| r.radius).collect();
        assert_eq!(radii, vec![40.0, 25.0]);
    }

    #[test]
    fn ring_alpha_is_floored() {
        let rings = ring_strokes(200.0, 3, BASE, 5, 10);
        assert_eq!(rings.len(), 5);
        assert!((rings[4].color.a - RING_MIN_ALPHA).abs() < 1e-9);
        assert!((rings[1].color.a - 0.35).abs() < 1e-9);
    }

    #[test]
    fn ring_width_thins_to_one() {
        let rings = ring_strokes(200.0, 3, BASE, 5, 10);
        let widths: Vec<f64> = rings.iter().map(|r| r.width).collect();
        assert_eq!(widths, vec![3.0, 2.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn pulse_only_exists_when_enabled() {
        let still = Renderer::new(OverlayConfig::default());
        assert!(still.pulse().is_none());

        let pulsing = Renderer::new(OverlayConfig {
            show_pulse: true,
            ..OverlayConfig::default()
        });
        assert_eq!(pulsing.pulse().map(Pulse::radius), Some(50.0));
    }
}
