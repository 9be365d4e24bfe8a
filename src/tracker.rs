//! Cursor tracking: keep the overlay window centered on the pointer.
//!
//! Stateless poll-and-move. Each tick reads the global pointer position and
//! snaps the window so its center sits on it; nothing is smoothed and no
//! previous position is remembered.

use log::debug;

use crate::error::Result;
use crate::model::Geometry;

/// Reads the global pointer position in screen coordinates.
pub trait PointerSource {
    /// `None` when no pointer device is available right now.
    fn pointer_position(&mut self) -> Option<(i32, i32)>;
}

/// Moves the overlay window's top-left corner in screen coordinates.
pub trait WindowMover {
    fn move_to(&mut self, x: i32, y: i32) -> Result<()>;
}

/// Top-left corner that centers a window of `geometry` on `pointer`.
pub fn window_origin(pointer: (i32, i32), geometry: &Geometry) -> (i32, i32) {
    let c = geometry.center as i32;
    (pointer.0 - c, pointer.1 - c)
}

/// Drives one reposition per timer tick.
#[derive(Debug, Clone)]
pub struct Tracker {
    geometry: Geometry,
    pointer_available: bool,
}

impl Tracker {
    pub fn new(geometry: &Geometry) -> Self {
        Self {
            geometry: *geometry,
            pointer_available: true,
        }
    }

    /// Read the pointer and move the window onto it.
    ///
    /// Returns the origin the window was moved to, or `None` when the
    /// pointer is unavailable this tick (the window stays put).
    pub fn tick<P, M>(&mut self, source: &mut P, mover: &mut M) -> Result<Option<(i32, i32)>>
    where
        P: PointerSource + ?Sized,
        M: WindowMover + ?Sized,
    {
        let Some(pointer) = source.pointer_position() else {
            if self.pointer_available {
                debug!("Pointer unavailable, tracking paused");
                self.pointer_available = false;
            }
            return Ok(None);
        };
        if !self.pointer_available {
            debug!("Pointer available again at {:?}", pointer);
            self.pointer_available = true;
        }

        let (x, y) = window_origin(pointer, &self.geometry);
        mover.move_to(x, y)?;
        Ok(Some((x, y)))
    }
}
