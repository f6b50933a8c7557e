//! The navigation back stack as published to the front-end.

use crate::router::Route;

/// Ordered routes, root first. The last route is the visible screen.
///
/// Never contains [`Route::Empty`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<K> {
    routes: Vec<Route<K>>,
}

/// Steps that bring a native navigation stack from one path to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathDiff<K> {
    /// Routes to pop off the previous stack first.
    pub pop: usize,
    /// Routes to push afterwards, bottom-most first.
    pub push: Vec<Route<K>>,
}

impl<K> PathDiff<K> {
    pub fn is_empty(&self) -> bool {
        self.pop == 0 && self.push.is_empty()
    }
}

impl<K> Default for Path<K> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<K: Copy + PartialEq> Path<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> &[Route<K>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// The visible route, or [`Route::Empty`] when the stack is empty.
    pub fn top(&self) -> Route<K> {
        self.routes.last().copied().unwrap_or(Route::Empty)
    }

    pub fn contains(&self, route: &Route<K>) -> bool {
        self.routes.contains(route)
    }

    /// Pops and pushes needed to turn `previous` into `self`, keeping the
    /// longest shared prefix in place.
    pub fn diff(&self, previous: &Path<K>) -> PathDiff<K> {
        let shared = self
            .routes
            .iter()
            .zip(&previous.routes)
            .take_while(|(current, old)| current == old)
            .count();
        PathDiff {
            pop: previous.routes.len() - shared,
            push: self.routes[shared..].to_vec(),
        }
    }

    pub(crate) fn push(&mut self, route: Route<K>) {
        self.routes.push(route);
    }

    pub(crate) fn position_from_end(&self, route: &Route<K>) -> Option<usize> {
        self.routes.iter().rposition(|candidate| candidate == route)
    }

    /// Keeps the first `len` routes and returns the removed tail.
    pub(crate) fn truncate(&mut self, len: usize) -> Vec<Route<K>> {
        self.routes.split_off(len.min(self.routes.len()))
    }
}
