//! Event system for decoupled inter-module communication.
//!
//! A small publish/subscribe layer over `std::sync::mpsc`. The Ctrl+C
//! handler runs on its own thread and must never touch windowing state, so
//! it only publishes; the platform timer drains on the main thread.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐            ┌─────────────┐
//! │   Ctrl+C    │            │  Renderer   │
//! │  (ctrlc)    │            │   (pulse)   │
//! └──────┬──────┘            └──────┬──────┘
//!        │ Interrupt                │ Repaint
//!        ▼                          ▼
//! ┌─────────────────────────────────────────┐
//! │            global event bus             │
//! │             (mpsc channel)              │
//! └────────────────────┬────────────────────┘
//!                      │ drain_events()
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │               Dispatcher                │
//! │        (main loop, update timer)        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Module Structure
//!
//! - [`types`]: Event definitions (`AppEvent` enum)
//! - [`global`]: The process-wide channel and its access functions

pub mod global;
pub mod types;

pub use global::{drain_events, init_event_bus, publish};
pub use types::AppEvent;
