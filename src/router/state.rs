//! Router state shared between the handle and its worker.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tokio::sync::{oneshot, watch};

use crate::alert::AlertData;
use crate::event::EventChannel;
use crate::router::{Destination, Path, Route, RouteId};

/// Commands applied by the worker, strictly in submission order.
pub(crate) enum RouterOp<D: Destination> {
    Push {
        destination: D,
        route: Route<D::Kind>,
    },
    Pop {
        to: Option<Route<D::Kind>>,
    },
    /// Acknowledged once every earlier command has been applied.
    Flush { respond_to: oneshot::Sender<()> },
}

/// Path and model registry are written only by the worker; everything here
/// is readable from any task.
pub(crate) struct RouterState<D: Destination> {
    last_id: AtomicU64,
    pub(crate) path: watch::Sender<Path<D::Kind>>,
    pub(crate) alert: watch::Sender<Option<AlertData>>,
    pub(crate) events: EventChannel,
    models: RwLock<HashMap<RouteId, D::Model>>,
}

impl<D: Destination> RouterState<D> {
    pub(crate) fn new(event_capacity: usize) -> Self {
        let (path, _) = watch::channel(Path::new());
        let (alert, _) = watch::channel(None);
        Self {
            last_id: AtomicU64::new(0),
            path,
            alert,
            events: EventChannel::new(event_capacity),
            models: RwLock::new(HashMap::new()),
        }
    }

    pub(crate) fn next_route_id(&self) -> RouteId {
        RouteId::new(self.last_id.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub(crate) fn model(&self, id: RouteId) -> Option<D::Model> {
        self.models.read().get(&id).cloned()
    }

    pub(crate) fn apply(&self, op: RouterOp<D>) {
        match op {
            RouterOp::Push { destination, route } => self.apply_push(destination, route),
            RouterOp::Pop { to } => self.apply_pop(to),
            RouterOp::Flush { respond_to } => {
                if respond_to.send(()).is_err() {
                    tracing::trace!("Router: Flush acknowledgement dropped (receiver gone)");
                }
            }
        }
    }

    fn apply_push(&self, destination: D, route: Route<D::Kind>) {
        if route.is_empty() {
            tracing::error!("Router bug? Ignoring push of the empty route");
            return;
        }

        // Built outside the lock: `into_model` may read the registry.
        let model = destination.into_model();
        // Registered before the path is published so observers can resolve
        // the new top immediately.
        self.models.write().insert(route.id(), model);

        let mut path = self.path.borrow().clone();
        path.push(route);
        tracing::debug!(?route, depth = path.len(), "Pushed route");
        self.path.send_replace(path);
    }

    fn apply_pop(&self, to: Option<Route<D::Kind>>) {
        let mut path = self.path.borrow().clone();

        let target_len = match to {
            None => path.len().saturating_sub(1),
            Some(target) => match path.position_from_end(&target) {
                Some(index) => index + 1,
                None => {
                    tracing::warn!(?target, "Route not in path, ignoring pop");
                    return;
                }
            },
        };
        if target_len >= path.len() {
            tracing::debug!(?to, depth = path.len(), "Pop would not shrink path");
            return;
        }

        let popped = path.truncate(target_len);
        tracing::debug!(?to, popped = popped.len(), depth = path.len(), "Popped routes");
        self.path.send_replace(path);

        // Evicted models are dropped after the guard, since a model's `Drop`
        // may read the registry.
        let evicted: Vec<D::Model> = {
            let mut models = self.models.write();
            popped
                .iter()
                .filter_map(|route| {
                    if route.is_empty() {
                        tracing::error!("Router bug? Path contained the empty route");
                    }
                    models.remove(&route.id())
                })
                .collect()
        };
        drop(evicted);
    }
}
