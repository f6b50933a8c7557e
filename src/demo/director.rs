use std::time::Duration;

use tokio::task::JoinHandle;

use crate::alert::{AlertChoice, AlertData};
use crate::config::DemoConfig;
use crate::demo::{Menu, Screen, ScreenKind};
use crate::event::EventData;
use crate::router::{Route, Router};

/// Feature logic for the demo: builds menus and issues router commands.
#[derive(Clone)]
pub struct DemoDirector {
    router: Router<Screen>,
    load_delay: Duration,
}

impl DemoDirector {
    pub fn new(router: Router<Screen>, config: &DemoConfig) -> Self {
        Self {
            router,
            load_delay: Duration::from_millis(config.load_delay_ms),
        }
    }

    /// Push the root menu after the simulated loading delay, so the empty
    /// route is briefly visible.
    pub fn start(&self) -> JoinHandle<Route<ScreenKind>> {
        let director = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(director.load_delay).await;
            let menu = Menu::new(director.clone(), true, director.load_delay);
            director.router.push(Screen::Menu(menu))
        })
    }

    pub(crate) fn more(&self) {
        let menu = Menu::new(self.clone(), false, self.load_delay);
        self.router.push(Screen::Menu(menu));
    }

    pub(crate) fn back(&self) {
        self.router.pop();
    }

    pub(crate) fn some_alert(&self) {
        let hide = self.router.clone();
        let cancel = self.router.clone();
        let alert = AlertData::builder()
            .title("Hello!")
            .body("This is an alert.")
            .cancel(AlertChoice::new("Dismiss", move || cancel.hide_alert()))
            .positive(AlertChoice::new("Nice", move || hide.hide_alert()))
            .build();
        match alert {
            Ok(alert) => self.router.show_alert(alert),
            Err(err) => tracing::error!(error = %err, "Failed to build alert"),
        }
    }

    pub(crate) fn share(&self, is_root: bool) {
        let event = if is_root {
            EventData::send_text("Hello", "Sharing", "What a cool app.")
        } else {
            EventData::send_text("Hey!", "More Sharing", "Hooray.\nWhat fun.")
        };
        self.router.send_event(event);
    }
}
