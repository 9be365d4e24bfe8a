//! Ctrl+C shutdown through the process-wide event bus.
//!
//! The bus lives in a `OnceLock`, so this file holds a single test and runs
//! in its own process.

use cursor_circle::error::Result;
use cursor_circle::events::{self, AppEvent};
use cursor_circle::handlers::{dispatch_pending, PendingWork};
use cursor_circle::lifecycle::{install_interrupt_handler, ShutdownLatch};
use cursor_circle::model::{Geometry, OverlayConfig};
use cursor_circle::tracker::{PointerSource, Tracker, WindowMover};

struct FixedPointer((i32, i32));

impl PointerSource for FixedPointer {
    fn pointer_position(&mut self) -> Option<(i32, i32)> {
        Some(self.0)
    }
}

#[derive(Default)]
struct CountingMover {
    moves: usize,
}

impl WindowMover for CountingMover {
    fn move_to(&mut self, _x: i32, _y: i32) -> Result<()> {
        self.moves += 1;
        Ok(())
    }
}

#[test]
fn interrupt_stops_ticking_and_says_goodbye_once() {
    // Nothing is queued before the bus exists
    events::publish(AppEvent::Interrupt);
    assert!(events::init_event_bus());
    assert_eq!(dispatch_pending(), PendingWork::default());

    install_interrupt_handler().unwrap();

    let latch = ShutdownLatch::new();
    let mut out = Vec::new();
    let mut tracker = Tracker::new(&Geometry::from_config(&OverlayConfig::default()));
    let mut pointer = FixedPointer((50, 50));
    let mut mover = CountingMover::default();

    // Same shape as a backend tick; the interrupt arrives twice after two ticks
    let mut ticks = 0;
    loop {
        if ticks == 2 {
            events::publish(AppEvent::Interrupt);
            events::publish(AppEvent::Interrupt);
        }
        let work = dispatch_pending();
        if work.shutdown {
            latch.fire_to(&mut out);
            break;
        }
        tracker.tick(&mut pointer, &mut mover).unwrap();
        ticks += 1;
    }

    assert_eq!(ticks, 2);
    assert_eq!(mover.moves, 2);
    // Both interrupts were consumed by the tick that stopped the loop
    assert_eq!(dispatch_pending(), PendingWork::default());
    assert!(!latch.fire_to(&mut out));
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\nCursor circle stopped.\n"
    );
}
