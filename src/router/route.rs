//! Routes and the destinations that produce them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a live route, unique for the lifetime of its router.
///
/// Ids are handed out in increasing order starting at 1; `0` is reserved for
/// [`Route::Empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(u64);

impl RouteId {
    pub const EMPTY: RouteId = RouteId(0);

    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Uniquely identifies a pushed [`Destination`] and therefore its model.
///
/// `K` is the destination kind, usually a fieldless enum with one variant
/// per screen of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route<K> {
    /// Placeholder used only by the front-end to represent an empty back
    /// stack. No destination produces it.
    Empty,
    Live { id: RouteId, kind: K },
}

impl<K> Route<K> {
    pub fn live(id: RouteId, kind: K) -> Self {
        Route::Live { id, kind }
    }

    pub fn id(&self) -> RouteId {
        match self {
            Route::Empty => RouteId::EMPTY,
            Route::Live { id, .. } => *id,
        }
    }

    pub fn kind(&self) -> Option<&K> {
        match self {
            Route::Empty => None,
            Route::Live { kind, .. } => Some(kind),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Route::Empty)
    }
}

/// A node in the navigation graph. When the back-end pushes it, the
/// front-end displays its model.
///
/// Destinations are usually an enum with one variant per screen, each
/// holding that screen's model. To keep application logic in the back-end,
/// models expose only immutable data, attrs, and methods returning `()`.
pub trait Destination: Send + 'static {
    type Kind: Copy + Eq + fmt::Debug + Send + Sync + 'static;
    type Model: Clone + Send + Sync + 'static;

    /// Build the route for this destination under the allocated `id`.
    ///
    /// Must return a [`Route::Live`] carrying `id`.
    fn route(&self, id: RouteId) -> Route<Self::Kind>;

    fn into_model(self) -> Self::Model;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Kind {
        Home,
    }

    #[test]
    fn empty_route_uses_reserved_id() {
        let route: Route<Kind> = Route::Empty;
        assert_eq!(route.id(), RouteId::EMPTY);
        assert!(route.is_empty());
        assert_eq!(route.kind(), None);
    }

    #[test]
    fn live_route_exposes_id_and_kind() {
        let route = Route::live(RouteId::new(7), Kind::Home);
        assert_eq!(route.id().get(), 7);
        assert_eq!(route.kind(), Some(&Kind::Home));
        assert!(!route.is_empty());
        assert_ne!(route, Route::live(RouteId::new(8), Kind::Home));
    }
}
