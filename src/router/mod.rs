//! Navigation back stack, alerts and events for the front-end.
//!
//! Directors may call the router from any task. Push and pop are queued and
//! applied by a single [`RouterWorker`] strictly in the order they were
//! accepted, so two concurrent pushes are never interleaved or reordered:
//!
//! ```text
//! director ─┐
//! director ─┼─ push/pop ──→ [bounded queue] ──→ RouterWorker ──→ Path + models
//! director ─┘
//! ```
//!
//! Alerts bypass the queue: they are independent of navigation ordering.

mod error;
mod path;
mod route;
mod state;
mod worker;

use std::sync::Arc;

use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, oneshot};

use crate::alert::AlertData;
use crate::attr::Observer;
use crate::config::RouterConfig;
use crate::event::{EventData, EventSubscription};
use state::{RouterOp, RouterState};

pub use error::RouterError;
pub use path::{Path, PathDiff};
pub use route::{Destination, Route, RouteId};
pub use worker::RouterWorker;

/// Cloneable handle to a router.
pub struct Router<D: Destination> {
    commands: mpsc::Sender<RouterOp<D>>,
    state: Arc<RouterState<D>>,
    command_capacity: usize,
}

impl<D: Destination> Clone for Router<D> {
    fn clone(&self) -> Self {
        Self {
            commands: self.commands.clone(),
            state: Arc::clone(&self.state),
            command_capacity: self.command_capacity,
        }
    }
}

impl<D: Destination> Router<D> {
    /// Create a router and the worker that applies its commands.
    ///
    /// Nothing is applied until the worker runs.
    pub fn new(config: &RouterConfig) -> (Self, RouterWorker<D>) {
        let command_capacity = config.command_capacity.max(1);
        let (commands, receiver) = mpsc::channel(command_capacity);
        let state = Arc::new(RouterState::new(config.event_capacity));
        let worker = RouterWorker::new(receiver, Arc::clone(&state));
        let router = Self {
            commands,
            state,
            command_capacity,
        };
        (router, worker)
    }

    /// Create a router and spawn its worker on the current tokio runtime.
    pub fn spawn(config: &RouterConfig) -> Self {
        let (router, worker) = Self::new(config);
        tokio::spawn(worker.run());
        router
    }

    /// Queue a push and return its route right away, before it is applied.
    ///
    /// Ids strictly increase across calls, even when the push is rejected.
    pub fn try_push(&self, destination: D) -> Result<Route<D::Kind>, RouterError> {
        let id = self.state.next_route_id();
        let route = destination.route(id);
        if route.is_empty() {
            return Err(RouterError::EmptyRoute);
        }
        if route.id() != id {
            return Err(RouterError::RouteIdMismatch {
                expected: id,
                actual: route.id(),
            });
        }

        self.submit(RouterOp::Push { destination, route })?;
        Ok(route)
    }

    /// Like [`try_push`](Self::try_push), but logs failures and returns
    /// [`Route::Empty`] for a push that will never be applied.
    pub fn push(&self, destination: D) -> Route<D::Kind> {
        match self.try_push(destination) {
            Ok(route) => route,
            Err(err @ (RouterError::EmptyRoute | RouterError::RouteIdMismatch { .. })) => {
                tracing::error!(error = %err, "Rejected push");
                Route::Empty
            }
            Err(err) => {
                tracing::warn!(error = %err, "Ignored push");
                Route::Empty
            }
        }
    }

    /// Queue a pop. With a target, pops every route above its last
    /// occurrence; a target missing from the path abandons the pop.
    pub fn try_pop(&self, to: Option<Route<D::Kind>>) -> Result<(), RouterError> {
        self.submit(RouterOp::Pop { to })
    }

    /// Queue a pop of the visible route.
    pub fn pop(&self) {
        self.pop_logged(None);
    }

    /// Queue a pop back to `route`, which stays visible.
    pub fn pop_to(&self, route: Route<D::Kind>) {
        self.pop_logged(Some(route));
    }

    fn pop_logged(&self, to: Option<Route<D::Kind>>) {
        if let Err(err) = self.try_pop(to) {
            tracing::warn!(error = %err, ?to, "Ignored pop");
        }
    }

    /// Wait until every command submitted before this call has been applied.
    pub async fn flush(&self) -> Result<(), RouterError> {
        let (respond_to, receiver) = oneshot::channel();
        self.commands
            .send(RouterOp::Flush { respond_to })
            .await
            .map_err(|_| RouterError::WorkerStopped)?;
        receiver.await.map_err(|_| RouterError::WorkerStopped)
    }

    fn submit(&self, op: RouterOp<D>) -> Result<(), RouterError> {
        self.commands.try_send(op).map_err(|err| match err {
            TrySendError::Full(_) => RouterError::CommandQueueFull {
                capacity: self.command_capacity,
            },
            TrySendError::Closed(_) => RouterError::WorkerStopped,
        })
    }

    /// Latest applied path.
    pub fn path(&self) -> Path<D::Kind> {
        self.state.path.borrow().clone()
    }

    pub fn observe_path(&self) -> Observer<Path<D::Kind>> {
        Observer::new(self.state.path.subscribe())
    }

    /// Model of a live route; `None` once popped or if never pushed.
    pub fn get_model(&self, route: &Route<D::Kind>) -> Option<D::Model> {
        self.state.model(route.id())
    }

    pub fn show_alert(&self, alert: AlertData) {
        self.state.alert.send_replace(Some(alert));
    }

    pub fn hide_alert(&self) {
        self.state.alert.send_replace(None);
    }

    pub fn alert(&self) -> Option<AlertData> {
        self.state.alert.borrow().clone()
    }

    pub fn observe_alert(&self) -> Observer<Option<AlertData>> {
        Observer::new(self.state.alert.subscribe())
    }

    pub fn try_send_event(&self, event: EventData) -> Result<(), RouterError> {
        self.state.events.send(event)
    }

    /// Broadcast an event; dropped with a warning if a subscriber is full.
    pub fn send_event(&self, event: EventData) {
        if let Err(err) = self.try_send_event(event) {
            tracing::warn!(error = %err, "Ignored event");
        }
    }

    /// Subscribe to events, starting with the replay buffer.
    pub fn subscribe_events(&self) -> EventSubscription {
        self.state.events.subscribe()
    }
}
