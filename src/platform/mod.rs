//! Platform-specific overlay backends.
//!
//! Each backend creates the click-through window, drives the update timer
//! and presents what the shared `Renderer` draws:
//! - Linux: X11 via x11rb, pixels from a tiny-skia pixmap
//! - macOS: AppKit via objc2, drawn with NSBezierPath
//! - Windows: Win32 layered window, drawn with Direct2D

use crate::error::Result;
use crate::model::OverlayConfig;

#[cfg(target_os = "linux")]
pub mod linux;

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "windows")]
pub mod windows;

/// Create the overlay and block until it is interrupted.
pub fn run(config: OverlayConfig) -> Result<()> {
    #[cfg(target_os = "linux")]
    {
        linux::run(config)
    }
    #[cfg(target_os = "macos")]
    {
        macos::run(config)
    }
    #[cfg(target_os = "windows")]
    {
        windows::run(config)
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        let _ = config;
        Err(crate::error::OverlayError::UnsupportedPlatform)
    }
}
