//! One-shot events for the front-end to handle on its own.
//!
//! Unlike popping a route or hiding an alert, the back-end cannot undo an
//! event. Delivery is fire-and-forget and at most once per subscriber.

use std::collections::VecDeque;

use parking_lot::Mutex;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};

use crate::router::RouterError;

/// Events sent to the front-end, such as starting another activity or
/// linking the user outside of the app.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EventData {
    /// Share text with another app.
    SendText {
        title: String,
        subject: String,
        text: String,
    },
}

impl EventData {
    pub fn send_text(
        title: impl Into<String>,
        subject: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self::SendText {
            title: title.into(),
            subject: subject.into(),
            text: text.into(),
        }
    }

    /// Hand the event to the platform capability that handles it.
    pub fn dispatch(&self, share: &dyn ShareText) {
        match self {
            EventData::SendText {
                title,
                subject,
                text,
            } => share.share_text(title, subject, text),
        }
    }
}

/// Platform capability for opening a share sheet.
pub trait ShareText: Send + Sync {
    fn share_text(&self, title: &str, subject: &str, text: &str);
}

/// Broadcast channel with a bounded replay buffer for late subscribers.
pub(crate) struct EventChannel {
    sender: broadcast::Sender<EventData>,
    replay: Mutex<VecDeque<EventData>>,
    capacity: usize,
}

impl EventChannel {
    pub(crate) fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            replay: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Fails if some live subscriber still has a full buffer of unread
    /// events; the event is dropped in that case.
    pub(crate) fn send(&self, event: EventData) -> Result<(), RouterError> {
        // Held across the broadcast so a concurrent subscribe sees each event
        // exactly once, either replayed or live.
        let mut replay = self.replay.lock();
        if self.sender.len() >= self.capacity {
            return Err(RouterError::EventBufferFull {
                capacity: self.capacity,
            });
        }

        if replay.len() == self.capacity {
            replay.pop_front();
        }
        replay.push_back(event.clone());

        // Only errors when nobody is subscribed; the replay buffer keeps it.
        let _ = self.sender.send(event);
        Ok(())
    }

    pub(crate) fn subscribe(&self) -> EventSubscription {
        let replay = self.replay.lock();
        EventSubscription {
            backlog: replay.clone(),
            receiver: self.sender.subscribe(),
        }
    }
}

/// A front-end subscription to router events.
///
/// Yields the replayed backlog first, then live events.
pub struct EventSubscription {
    backlog: VecDeque<EventData>,
    receiver: broadcast::Receiver<EventData>,
}

impl EventSubscription {
    /// Returns `None` once the router is gone.
    pub async fn recv(&mut self) -> Option<EventData> {
        if let Some(event) = self.backlog.pop_front() {
            return Some(event);
        }
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Event subscriber lagged, events lost");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Non-blocking variant of [`recv`](Self::recv) for polling front-ends.
    pub fn try_recv(&mut self) -> Option<EventData> {
        if let Some(event) = self.backlog.pop_front() {
            return Some(event);
        }
        loop {
            match self.receiver.try_recv() {
                Ok(event) => return Some(event),
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Event subscriber lagged, events lost");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => return None,
            }
        }
    }

    /// Dispatch every event to `share` until the router is dropped.
    pub async fn forward_to(mut self, share: &dyn ShareText) {
        while let Some(event) = self.recv().await {
            tracing::debug!(?event, "Dispatching event");
            event.dispatch(share);
        }
    }
}
