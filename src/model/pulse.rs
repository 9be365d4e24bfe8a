//! Pulse animation state.
//!
//! The radius walks back and forth between `main_radius - range` and
//! `main_radius + range`, one step of `speed` per repaint. A step that
//! reaches or crosses an edge stops on the edge and flips the direction, so
//! the value never escapes the band and no edge frame is painted twice.

use super::constants::MIN_RADIUS;

#[derive(Debug, Clone, PartialEq)]
pub struct Pulse {
    radius: f64,
    direction: f64,
    main_radius: f64,
    speed: f64,
    lo: f64,
    hi: f64,
}

impl Pulse {
    /// Starts at `main_radius`, growing. A negative or non-finite speed
    /// holds the radius still.
    pub fn new(main_radius: f64, speed: f64, range: f64) -> Self {
        let speed = if speed.is_finite() { speed.max(0.0) } else { 0.0 };
        let lo = (main_radius - range).max(MIN_RADIUS);
        let hi = (main_radius + range).max(lo);
        Self {
            radius: main_radius.clamp(lo, hi),
            direction: 1.0,
            main_radius,
            speed,
            lo,
            hi,
        }
    }

    /// Advances one step and returns the new radius.
    pub fn advance(&mut self) -> f64 {
        self.radius = (self.radius + self.speed * self.direction).clamp(self.lo, self.hi);
        let at_far_edge = if self.direction > 0.0 {
            self.radius >= self.hi
        } else {
            self.radius <= self.lo
        };
        if at_far_edge {
            self.direction = -self.direction;
        }
        self.radius
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// +1.0 while growing, -1.0 while shrinking.
    pub fn direction(&self) -> f64 {
        self.direction
    }

    /// Offset of the current radius from the main radius.
    pub fn delta(&self) -> f64 {
        self.radius - self.main_radius
    }

    /// Inclusive `(lo, hi)` band the radius stays in.
    pub fn bounds(&self) -> (f64, f64) {
        (self.lo, self.hi)
    }
}
