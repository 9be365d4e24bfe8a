//! Linux backend: X11 through x11rb, drawn with tiny-skia.

mod window;

use std::thread;
use std::time::Instant;

use log::{info, warn};

pub use window::{rows_per_request, Overlay};

use crate::error::Result;
use crate::events::{self, AppEvent};
use crate::handlers::dispatch_pending;
use crate::lifecycle::{self, ShutdownLatch};
use crate::model::OverlayConfig;
use crate::render::{PixmapCanvas, Renderer};
use crate::tracker::Tracker;

/// Run the overlay until interrupted.
pub fn run(config: OverlayConfig) -> Result<()> {
    let interval = config.update_interval();
    let mut renderer = Renderer::new(config);
    let geometry = *renderer.geometry();

    let overlay = Overlay::create(&geometry)?;
    let mut canvas = PixmapCanvas::new(geometry.window_size, geometry.window_size)?;
    let mut tracker = Tracker::new(&geometry);
    let latch = ShutdownLatch::new();

    events::init_event_bus();
    lifecycle::install_interrupt_handler()?;
    events::publish(AppEvent::Repaint);
    info!("X11 backend running, {}ms per tick", interval.as_millis());

    let mut deadline = Instant::now();
    loop {
        let mut work = dispatch_pending();
        if work.shutdown {
            latch.fire();
            break;
        }
        work.repaint |= overlay.take_exposed()?;

        if let Err(e) = tracker.tick(&mut overlay.pointer(), &mut overlay.mover()) {
            warn!("Tracking tick skipped: {e}");
        }
        if work.repaint {
            paint(&mut renderer, &mut canvas, &overlay);
        }
        overlay.flush()?;

        deadline += interval;
        let now = Instant::now();
        if deadline > now {
            thread::sleep(deadline - now);
        } else {
            deadline = now;
        }
    }
    Ok(())
}

fn paint(renderer: &mut Renderer, canvas: &mut PixmapCanvas, overlay: &Overlay) {
    let again = match renderer.render(canvas) {
        Ok(frame) => {
            if let Err(e) = overlay.present(canvas) {
                warn!("Frame not presented: {e}");
            }
            frame.wants_repaint
        }
        Err(e) => {
            warn!("Frame skipped: {e}");
            renderer.pulse().is_some()
        }
    };
    if again {
        events::publish(AppEvent::Repaint);
    }
}
