//! Application domain model.
//!
//! This module contains pure logic (no FFI dependencies): the compiled-in
//! configuration, the geometry derived from it, and the pulse animation.

pub mod config;
pub mod constants;
pub mod geometry;
pub mod pulse;

pub use config::{ColorPreset, CrosshairPreset, EffectPreset, OverlayConfig, Rgba};
pub use constants::*;
pub use geometry::Geometry;
pub use pulse::Pulse;
