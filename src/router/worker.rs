use std::sync::Arc;

use tokio::sync::mpsc;

use crate::router::state::{RouterOp, RouterState};
use crate::router::Destination;

/// The single consumer of a router's command queue.
///
/// Run it on its own task; it returns once every [`Router`] handle has been
/// dropped.
///
/// [`Router`]: crate::router::Router
pub struct RouterWorker<D: Destination> {
    receiver: mpsc::Receiver<RouterOp<D>>,
    state: Arc<RouterState<D>>,
}

impl<D: Destination> RouterWorker<D> {
    pub(crate) fn new(receiver: mpsc::Receiver<RouterOp<D>>, state: Arc<RouterState<D>>) -> Self {
        Self { receiver, state }
    }

    pub async fn run(mut self) {
        tracing::debug!("Router worker started");
        while let Some(op) = self.receiver.recv().await {
            self.state.apply(op);
        }
        tracing::debug!("Router worker stopped");
    }
}
