#![allow(dead_code)]

use backstack::config::RouterConfig;
use backstack::router::{Destination, Route, RouteId, Router, RouterWorker};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Screen,
}

/// Destination whose model is just a name.
#[derive(Debug, Clone)]
pub enum TestDest {
    Screen(String),
    /// Misbehaving destination that yields an empty route.
    Empty,
    /// Misbehaving destination that ignores the id it is given.
    WrongId,
}

impl TestDest {
    pub fn screen(name: impl Into<String>) -> Self {
        TestDest::Screen(name.into())
    }
}

impl Destination for TestDest {
    type Kind = Kind;
    type Model = String;

    fn route(&self, id: RouteId) -> Route<Kind> {
        match self {
            TestDest::Screen(_) => Route::live(id, Kind::Screen),
            TestDest::Empty => Route::Empty,
            TestDest::WrongId => Route::live(RouteId::EMPTY, Kind::Screen),
        }
    }

    fn into_model(self) -> String {
        match self {
            TestDest::Screen(name) => name,
            TestDest::Empty | TestDest::WrongId => String::new(),
        }
    }
}

pub fn config(command_capacity: usize, event_capacity: usize) -> RouterConfig {
    RouterConfig {
        command_capacity,
        event_capacity,
    }
}

pub fn spawn_router() -> Router<TestDest> {
    Router::spawn(&RouterConfig::default())
}

pub fn unstarted_router(command_capacity: usize) -> (Router<TestDest>, RouterWorker<TestDest>) {
    Router::new(&config(command_capacity, 16))
}
