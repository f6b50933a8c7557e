//! Line-based text front-end for the demo.

use std::fmt::Write as _;
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

use crate::alert::{AlertChoice, AlertData};
use crate::attr::{AttrData, ListData, Observer, PlainData};
use crate::demo::{Menu, Screen};
use crate::event::ShareText;
use crate::router::Router;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertChoiceKind {
    Cancel,
    Destructive,
    Positive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    Select(usize),
    Clear,
    Toggle,
    Back,
    Choose(AlertChoiceKind),
    Show,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command '{0}'")]
    Unknown(String),

    #[error("Expected an index after 'select', got '{0}'")]
    InvalidIndex(String),

    #[error("Expected cancel, destructive or positive, got '{0}'")]
    InvalidChoice(String),
}

impl FromStr for ConsoleCommand {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Err(ParseCommandError::Empty);
        };
        let argument = words.next().unwrap_or_default();

        match command {
            "select" => argument
                .parse()
                .map(ConsoleCommand::Select)
                .map_err(|_| ParseCommandError::InvalidIndex(argument.to_string())),
            "clear" => Ok(ConsoleCommand::Clear),
            "toggle" => Ok(ConsoleCommand::Toggle),
            "back" => Ok(ConsoleCommand::Back),
            "choose" => match argument {
                "cancel" => Ok(ConsoleCommand::Choose(AlertChoiceKind::Cancel)),
                "destructive" => Ok(ConsoleCommand::Choose(AlertChoiceKind::Destructive)),
                "positive" => Ok(ConsoleCommand::Choose(AlertChoiceKind::Positive)),
                other => Err(ParseCommandError::InvalidChoice(other.to_string())),
            },
            "show" => Ok(ConsoleCommand::Show),
            "quit" | "exit" => Ok(ConsoleCommand::Quit),
            other => Err(ParseCommandError::Unknown(other.to_string())),
        }
    }
}

/// Observers of the cells the visible menu renders.
///
/// Rebuild it whenever the path changes; it keeps following the menu it was
/// created for.
pub struct MenuWatch {
    title: Observer<PlainData<String>>,
    options: Observer<ListData<String>>,
    notifications: Observer<PlainData<bool>>,
}

impl MenuWatch {
    fn new(menu: &Menu) -> Self {
        let mut title = menu.title.observe();
        let mut options = menu.options.observe();
        let mut notifications = menu.notifications.observe();
        title.mark_seen();
        options.mark_seen();
        notifications.mark_seen();
        Self {
            title,
            options,
            notifications,
        }
    }

    /// Resolves when any watched cell publishes; `None` once the menu is gone.
    pub async fn changed(&mut self) -> Option<()> {
        tokio::select! {
            data = self.title.next() => data.map(drop),
            data = self.options.next() => data.map(drop),
            data = self.notifications.next() => data.map(drop),
        }
    }
}

/// Front-end state: only ever reads snapshots and calls gated entry points.
pub struct Console {
    router: Router<Screen>,
}

impl Console {
    pub fn new(router: Router<Screen>) -> Self {
        Self { router }
    }

    fn current_menu(&self) -> Option<Arc<Menu>> {
        let top = self.router.path().top();
        match self.router.get_model(&top)? {
            Screen::Menu(menu) => Some(menu),
        }
    }

    /// Watch the visible menu, if any, for redraws.
    pub fn watch_menu(&self) -> Option<MenuWatch> {
        self.current_menu().map(|menu| MenuWatch::new(&menu))
    }

    /// Apply a command. Returns `false` when the user asked to quit.
    pub fn apply(&self, command: ConsoleCommand) -> bool {
        let alert = self.router.alert();

        match command {
            ConsoleCommand::Quit => return false,
            ConsoleCommand::Show => {}
            ConsoleCommand::Choose(kind) => match alert.as_ref().and_then(|a| choice(a, kind)) {
                Some(choice) => choice.choose(),
                None => tracing::debug!(?kind, "No such alert choice"),
            },
            // An alert blocks all other input; back selects its cancel choice.
            ConsoleCommand::Back if alert.is_some() => {
                if let Some(alert) = &alert {
                    alert.dismiss();
                }
            }
            _ if alert.is_some() => tracing::debug!(?command, "Input blocked by alert"),
            ConsoleCommand::Back => {
                if let Some(menu) = self.current_menu() {
                    menu.back.input(());
                }
            }
            ConsoleCommand::Select(index) => {
                if let Some(menu) = self.current_menu() {
                    menu.options.input(Some(index));
                }
            }
            ConsoleCommand::Clear => {
                if let Some(menu) = self.current_menu() {
                    menu.options.input(None);
                }
            }
            ConsoleCommand::Toggle => {
                if let Some(menu) = self.current_menu() {
                    menu.notifications.toggle();
                }
            }
        }
        true
    }

    /// Text rendering of the visible screen and any alert.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let path = self.router.path();
        let _ = writeln!(out, "── depth {} ──", path.len());

        match self.current_menu() {
            None => {
                let _ = writeln!(out, "Loading...");
            }
            Some(menu) => render_menu(&mut out, &menu),
        }

        if let Some(alert) = self.router.alert() {
            render_alert(&mut out, &alert);
        }
        out
    }
}

fn choice(alert: &AlertData, kind: AlertChoiceKind) -> Option<&AlertChoice> {
    match kind {
        AlertChoiceKind::Cancel => alert.cancel(),
        AlertChoiceKind::Destructive => alert.destructive(),
        AlertChoiceKind::Positive => alert.positive(),
    }
}

fn render_menu(out: &mut String, menu: &Menu) {
    let title = menu.title.data();
    if title.mode().is_readable() {
        let _ = writeln!(out, "{}", title.value);
    }
    if menu.back.can_write() {
        let _ = writeln!(out, "[back]");
    }

    let options = menu.options.data();
    if options.mode().is_readable() {
        for (index, option) in options.list.iter().enumerate() {
            let marker = if options.value == Some(index) { '*' } else { ' ' };
            let _ = writeln!(out, "{marker} {index}: {option}");
        }
    }

    let notifications = menu.notifications.data();
    if notifications.mode().is_readable() {
        let state = if notifications.value { "on" } else { "off" };
        let _ = writeln!(out, "notifications: {state}");
    }
}

fn render_alert(out: &mut String, alert: &AlertData) {
    let _ = writeln!(out, "!! {}", alert.title().unwrap_or_default());
    if let Some(body) = alert.body() {
        let _ = writeln!(out, "   {body}");
    }
    for (label, choice) in [
        ("cancel", alert.cancel()),
        ("destructive", alert.destructive()),
        ("positive", alert.positive()),
    ] {
        if let Some(choice) = choice {
            let _ = writeln!(out, "   choose {label}: {}", choice.text());
        }
    }
}

/// Prints shared text instead of opening a share sheet.
pub struct StdoutShare;

impl ShareText for StdoutShare {
    fn share_text(&self, title: &str, subject: &str, text: &str) {
        println!("[share] {title} / {subject}\n{text}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!("select 2".parse::<ConsoleCommand>(), Ok(ConsoleCommand::Select(2)));
        assert_eq!(" toggle ".parse::<ConsoleCommand>(), Ok(ConsoleCommand::Toggle));
        assert_eq!(
            "choose positive".parse::<ConsoleCommand>(),
            Ok(ConsoleCommand::Choose(AlertChoiceKind::Positive))
        );
        assert_eq!("exit".parse::<ConsoleCommand>(), Ok(ConsoleCommand::Quit));
    }

    #[test]
    fn rejects_malformed_commands() {
        assert_eq!("".parse::<ConsoleCommand>(), Err(ParseCommandError::Empty));
        assert_eq!(
            "select x".parse::<ConsoleCommand>(),
            Err(ParseCommandError::InvalidIndex("x".to_string()))
        );
        assert_eq!(
            "select -1".parse::<ConsoleCommand>(),
            Err(ParseCommandError::InvalidIndex("-1".to_string()))
        );
        assert_eq!(
            "choose maybe".parse::<ConsoleCommand>(),
            Err(ParseCommandError::InvalidChoice("maybe".to_string()))
        );
        assert_eq!(
            "jump".parse::<ConsoleCommand>(),
            Err(ParseCommandError::Unknown("jump".to_string()))
        );
    }
}
