//! Event dispatcher for the overlay run loop.
//!
//! Called from every platform's update timer. It drains the event bus and
//! folds the batch into a `PendingWork` the backend acts on: repaint the
//! window, or tear down.
//!
//! # Architecture
//!
//! ```text
//! drain_events() → collect() → PendingWork → platform backend
//! ```

use log::{debug, info};

use crate::events::{drain_events, AppEvent};

/// What the backend must do after this tick's events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingWork {
    pub shutdown: bool,
    pub repaint: bool,
}

/// Fold a batch of events into pending work.
///
/// Any number of repaint requests coalesce into a single repaint.
pub fn collect<I>(events: I) -> PendingWork
where
    I: IntoIterator<Item = AppEvent>,
{
    let mut work = PendingWork::default();
    for event in events {
        debug!("Dispatching: {}", event.description());
        match event {
            AppEvent::Interrupt => {
                info!("Interrupt received, shutting down");
                work.shutdown = true;
            }
            AppEvent::Repaint => work.repaint = true,
        }
    }
    work
}

/// Drain the global event bus and collect its work.
pub fn dispatch_pending() -> PendingWork {
    collect(drain_events())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_events_no_work() {
        assert_eq!(collect(Vec::new()), PendingWork::default());
    }

    #[test]
    fn test_repaints_coalesce() {
        let work = collect(vec![AppEvent::Repaint, AppEvent::Repaint]);
        assert!(work.repaint);
        assert!(!work.shutdown);
    }

    #[test]
    fn test_interrupt_wins_alongside_repaint() {
        let work = collect(vec![AppEvent::Repaint, AppEvent::Interrupt]);
        assert!(work.shutdown);
        assert!(work.repaint);
    }
}
