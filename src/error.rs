//! Error types for the overlay.

use thiserror::Error;

/// Everything that can go wrong while setting up or driving the overlay.
///
/// `Display` and `WindowCreation` are fatal. `Draw` skips a frame and
/// `Pointer` skips a tracking tick; neither stops the process.
#[derive(Error, Debug)]
pub enum OverlayError {
    /// No graphical session to connect to
    #[error("Display unavailable: {0}")]
    Display(String),

    /// The overlay surface could not be created
    #[error("Window creation failed: {0}")]
    WindowCreation(String),

    /// The graphics layer rejected a draw call
    #[error("Draw failed: {0}")]
    Draw(String),

    /// Pointer position could not be read
    #[error("Pointer query failed: {0}")]
    Pointer(String),

    /// The interrupt handler could not be installed
    #[error("Signal handler error: {0}")]
    Signal(#[from] ctrlc::Error),

    /// Built for a target with no overlay backend
    #[error("Unsupported platform: no overlay backend for this OS")]
    UnsupportedPlatform,
}

#[cfg(target_os = "linux")]
impl From<x11rb::errors::ConnectError> for OverlayError {
    fn from(e: x11rb::errors::ConnectError) -> Self {
        OverlayError::Display(e.to_string())
    }
}

#[cfg(target_os = "linux")]
impl From<x11rb::errors::ConnectionError> for OverlayError {
    fn from(e: x11rb::errors::ConnectionError) -> Self {
        OverlayError::Display(e.to_string())
    }
}

#[cfg(target_os = "linux")]
impl From<x11rb::errors::ReplyError> for OverlayError {
    fn from(e: x11rb::errors::ReplyError) -> Self {
        OverlayError::WindowCreation(e.to_string())
    }
}

#[cfg(target_os = "linux")]
impl From<x11rb::errors::ReplyOrIdError> for OverlayError {
    fn from(e: x11rb::errors::ReplyOrIdError) -> Self {
        OverlayError::WindowCreation(e.to_string())
    }
}

#[cfg(target_os = "windows")]
impl From<windows::core::Error> for OverlayError {
    fn from(e: windows::core::Error) -> Self {
        OverlayError::WindowCreation(e.to_string())
    }
}

/// Result type for overlay operations.
pub type Result<T> = std::result::Result<T, OverlayError>;
