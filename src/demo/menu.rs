use std::sync::Arc;
use std::time::Duration;

use crate::attr::{Attr, BoolAttr, ListAttr, ListData, PlainData, Rwx};
use crate::demo::DemoDirector;

pub(crate) const OPTIONS: [&str; 3] = ["Alert", "Push", "Share"];

/// Model of the menu screen.
pub struct Menu {
    pub title: Attr<PlainData<String>>,
    /// Writable unless this is the root screen.
    pub back: Attr<PlainData<()>>,
    pub options: ListAttr<String>,
    pub notifications: BoolAttr,
}

impl Menu {
    /// Must be called within a tokio runtime: the options and title are
    /// filled in by a background task to simulate loading.
    pub(crate) fn new(director: DemoDirector, is_root: bool, load_delay: Duration) -> Arc<Self> {
        let title = Attr::new(PlainData::new("Hello, world!".to_string(), Rwx::R));

        let back_mode = if is_root { Rwx::NONE } else { Rwx::RW };
        let back_director = director.clone();
        let back = Attr::new(PlainData::new((), back_mode)).on_write(move |()| back_director.back());

        let options = ListAttr::new(ListData::new(None, Vec::new(), Rwx::R)).on_write(
            move |index| match index {
                Some(0) => director.some_alert(),
                Some(1) => director.more(),
                Some(2) => director.share(is_root),
                _ => {}
            },
        );

        let notifications = BoolAttr::new(PlainData::new(false, Rwx::RW));
        let publisher = notifications.publisher();
        let notifications =
            notifications.on_write(move |enabled| publisher.update(|data| data.value = enabled));

        let menu = Arc::new(Self {
            title,
            back,
            options,
            notifications,
        });

        let options = menu.options.publisher();
        let title = menu.title.publisher();
        tokio::spawn(async move {
            options.update(|data| {
                data.list = OPTIONS.iter().map(|option| option.to_string()).collect();
                data.mode = Rwx::RW;
            });
            tokio::time::sleep(load_delay).await;
            title.update(|data| data.value = "Dynamic!".to_string());
        });

        menu
    }
}
