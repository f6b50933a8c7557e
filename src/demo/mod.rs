//! A small director exercising the library, used by the `backstack` binary.
//!
//! One screen kind, a menu, which can show an alert, push another menu or
//! share text.

mod console;
mod director;
mod menu;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::router::{Destination, Route, RouteId};

pub use console::{
    AlertChoiceKind, Console, ConsoleCommand, MenuWatch, ParseCommandError, StdoutShare,
};
pub use director::DemoDirector;
pub use menu::Menu;

/// Every destination of the demo app.
#[derive(Clone)]
pub enum Screen {
    Menu(Arc<Menu>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenKind {
    Menu,
}

impl Destination for Screen {
    type Kind = ScreenKind;
    type Model = Screen;

    fn route(&self, id: RouteId) -> Route<ScreenKind> {
        match self {
            Screen::Menu(_) => Route::live(id, ScreenKind::Menu),
        }
    }

    fn into_model(self) -> Screen {
        self
    }
}
