//! Global access to the application event bus.
//!
//! The bus is initialized once at startup via `init_event_bus()`; after that
//! the Ctrl+C handler thread and the platform loops publish through
//! `publish()`, and the main thread drains with `drain_events()`.
//!
//! # Design
//!
//! - `Sender` is stored in `OnceLock` (it is `Send + Sync`)
//! - `Receiver` is stored in `Mutex`, locked only by the main thread
//!
//! # Example
//!
//! ```ignore
//! // In main.rs at startup:
//! events::init_event_bus();
//!
//! // From the signal handler thread:
//! events::publish(AppEvent::Interrupt);
//! ```

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Mutex, OnceLock};

use log::warn;

use super::types::AppEvent;

/// Global sender for publishing events.
static SENDER: OnceLock<Sender<AppEvent>> = OnceLock::new();

/// Global receiver for draining events.
///
/// Wrapped in `Mutex` for `Sync` requirement. Only accessed from main thread,
/// so contention is effectively zero.
static RECEIVER: OnceLock<Mutex<Receiver<AppEvent>>> = OnceLock::new();

/// Initialize the global event bus.
///
/// Returns `false` if the bus was already initialized; the existing channel
/// is kept in that case.
pub fn init_event_bus() -> bool {
    let (sender, receiver) = mpsc::channel();
    if SENDER.set(sender).is_err() {
        return false;
    }
    RECEIVER.set(Mutex::new(receiver)).is_ok()
}

/// Publish an event to the global event bus.
///
/// Events published before initialization are dropped with a warning.
pub fn publish(event: AppEvent) {
    match SENDER.get() {
        // Receiver dropped means app is shutting down
        Some(sender) => {
            let _ = sender.send(event);
        }
        None => warn!("Event bus not initialized, dropping {:?}", event),
    }
}

/// Drain all pending events from the global event bus.
///
/// Returns an empty Vec before initialization. A poisoned receiver lock is
/// recovered, since the receiver itself holds no invariant.
pub fn drain_events() -> Vec<AppEvent> {
    let Some(receiver) = RECEIVER.get() else {
        return Vec::new();
    };
    let receiver = receiver
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let mut events = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        events.push(event);
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    // OnceLock can only be set once per process, so everything touching the
    // globals lives in this single test.
    #[test]
    fn test_global_bus_round_trip() {
        init_event_bus();
        assert!(!init_event_bus());

        drain_events();
        publish(AppEvent::Repaint);
        std::thread::spawn(|| publish(AppEvent::Interrupt))
            .join()
            .unwrap();

        assert_eq!(
            drain_events(),
            vec![AppEvent::Repaint, AppEvent::Interrupt]
        );
        assert!(drain_events().is_empty());
    }
}
