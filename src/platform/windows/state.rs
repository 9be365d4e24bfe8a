//! Windows runtime state.
//!
//! The window procedure is a plain `extern "system"` callback, so everything
//! it needs lives in a thread-local owned by the UI thread.

use std::cell::RefCell;

use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Direct2D::ID2D1Factory;

use crate::render::Renderer;
use crate::tracker::Tracker;

pub struct WindowsRuntimeState {
    pub hwnd: HWND,
    /// Side of the square window in pixels.
    pub size: i32,
    /// Last top-left corner the tracker moved the window to.
    pub origin: (i32, i32),
    pub factory: ID2D1Factory,
    pub renderer: Renderer,
    pub tracker: Tracker,
}

thread_local! {
    pub static STATE: RefCell<Option<WindowsRuntimeState>> = const { RefCell::new(None) };
}
