//! Application events for inter-module communication.
//!
//! These events are published by the signal handler thread and by the
//! platform backends, and drained by the dispatcher on every timer tick.
//! This module is pure Rust with no FFI dependencies, making it fully testable.

/// Application-level events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Interrupt signal received (Ctrl+C)
    Interrupt,

    /// The overlay should be painted again (pulse animation, first frame)
    Repaint,
}

impl AppEvent {
    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::Interrupt => "Interrupt received",
            AppEvent::Repaint => "Repaint requested",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_debug() {
        let event = AppEvent::Repaint;
        assert_eq!(format!("{:?}", event), "Repaint");
    }

    #[test]
    fn test_all_events_have_descriptions() {
        for event in [AppEvent::Interrupt, AppEvent::Repaint] {
            assert!(!event.description().is_empty());
        }
    }
}
