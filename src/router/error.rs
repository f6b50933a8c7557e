use thiserror::Error;

use crate::router::RouteId;

/// Errors surfaced by the fallible router entry points.
///
/// The infallible variants (`push`, `pop`, `send_event`) log these instead
/// and leave the stack untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// A destination produced the placeholder route.
    #[error("Cannot push the empty route")]
    EmptyRoute,

    /// A destination ignored the id it was given.
    #[error("Destination built route {actual} for allocated id {expected}")]
    RouteIdMismatch { expected: RouteId, actual: RouteId },

    #[error("Router command queue full (capacity {capacity})")]
    CommandQueueFull { capacity: usize },

    #[error("Router event buffer full (capacity {capacity})")]
    EventBufferFull { capacity: usize },

    /// The worker applying commands is no longer running.
    #[error("Router worker stopped")]
    WorkerStopped,
}
