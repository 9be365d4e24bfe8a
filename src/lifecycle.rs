//! Startup and shutdown plumbing shared by every backend.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info};

use crate::error::Result;
use crate::events::{self, AppEvent};
use crate::model::FAREWELL_MESSAGE;

/// Register the Ctrl+C handler.
///
/// The handler runs on a thread owned by `ctrlc` and only publishes
/// `AppEvent::Interrupt`; the backend's timer picks it up on its next tick.
/// Fails if a handler was already installed in this process.
pub fn install_interrupt_handler() -> Result<()> {
    ctrlc::set_handler(|| events::publish(AppEvent::Interrupt))?;
    debug!("Interrupt handler installed");
    Ok(())
}

/// Prints the farewell line exactly once, however many times shutdown is
/// requested.
#[derive(Debug, Default)]
pub struct ShutdownLatch {
    fired: AtomicBool,
}

impl ShutdownLatch {
    pub const fn new() -> Self {
        Self {
            fired: AtomicBool::new(false),
        }
    }

    pub fn is_fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }

    /// Fire the latch, writing the farewell to stdout.
    ///
    /// Returns `true` only for the call that actually fired it.
    pub fn fire(&self) -> bool {
        self.fire_to(&mut io::stdout())
    }

    pub fn fire_to<W: Write>(&self, out: &mut W) -> bool {
        if self.fired.swap(true, Ordering::SeqCst) {
            return false;
        }
        // Own line, after the terminal's ^C echo. A closed stdout is ignored.
        let _ = writeln!(out, "\n{FAREWELL_MESSAGE}");
        let _ = out.flush();
        info!("Overlay shut down");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn farewell_printed_once() {
        let latch = ShutdownLatch::new();
        let mut out = Vec::new();

        assert!(!latch.is_fired());
        assert!(latch.fire_to(&mut out));
        assert!(!latch.fire_to(&mut out));
        assert!(latch.is_fired());

        assert_eq!(String::from_utf8(out).unwrap(), "\nCursor circle stopped.\n");
    }
}
