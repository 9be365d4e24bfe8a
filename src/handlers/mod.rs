//! Event handlers and dispatching.

pub mod dispatcher;

pub use dispatcher::{collect, dispatch_pending, PendingWork};
