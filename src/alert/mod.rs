//! Modal alerts shown by the front-end on behalf of the back-end.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

/// Reasons an alert cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlertError {
    #[error("Alert has neither a title nor a body")]
    MissingDescription,

    #[error("Alert has no choices")]
    MissingChoices,
}

/// A choice the user can make when presented with an [`AlertData`].
#[derive(Clone)]
pub struct AlertChoice {
    text: String,
    action: Arc<dyn Fn() + Send + Sync>,
}

impl AlertChoice {
    /// `text` is a very short, localized description of the choice. The
    /// action should almost always hide the alert in addition to any other
    /// side effects.
    pub fn new(text: impl Into<String>, action: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            text: text.into(),
            action: Arc::new(action),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Call from the front-end when the user makes this choice.
    pub fn choose(&self) {
        (self.action)();
    }
}

impl fmt::Debug for AlertChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertChoice")
            .field("text", &self.text)
            .finish_non_exhaustive()
    }
}

/// The front-end blocks all other input while this is shown, until one of
/// the choices is made.
///
/// Construction guarantees a description (title or body) and at least one
/// choice, so the user is never soft-locked without knowing why.
#[derive(Debug, Clone)]
pub struct AlertData {
    title: Option<String>,
    body: Option<String>,
    cancel: Option<AlertChoice>,
    destructive: Option<AlertChoice>,
    positive: Option<AlertChoice>,
}

impl AlertData {
    pub fn builder() -> AlertBuilder {
        AlertBuilder::default()
    }

    /// Short, localized description of why the user is being alerted.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Localized details of the alert.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// The choice with minimal side effects. The front-end may let the user
    /// tap or swipe the alert away to select it.
    pub fn cancel(&self) -> Option<&AlertChoice> {
        self.cancel.as_ref()
    }

    /// The choice that is hard to undo, e.g. because of data loss.
    pub fn destructive(&self) -> Option<&AlertChoice> {
        self.destructive.as_ref()
    }

    /// The choice that agrees or proceeds.
    pub fn positive(&self) -> Option<&AlertChoice> {
        self.positive.as_ref()
    }

    /// Choices in display order: cancel, destructive, positive.
    pub fn choices(&self) -> impl Iterator<Item = &AlertChoice> {
        [&self.cancel, &self.destructive, &self.positive]
            .into_iter()
            .flatten()
    }

    /// Back-button handling while the alert is shown: selects cancel if the
    /// alert has one. Returns whether a choice was made.
    pub fn dismiss(&self) -> bool {
        match &self.cancel {
            Some(cancel) => {
                cancel.choose();
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Default)]
pub struct AlertBuilder {
    title: Option<String>,
    body: Option<String>,
    cancel: Option<AlertChoice>,
    destructive: Option<AlertChoice>,
    positive: Option<AlertChoice>,
}

impl AlertBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn cancel(mut self, choice: AlertChoice) -> Self {
        self.cancel = Some(choice);
        self
    }

    pub fn destructive(mut self, choice: AlertChoice) -> Self {
        self.destructive = Some(choice);
        self
    }

    pub fn positive(mut self, choice: AlertChoice) -> Self {
        self.positive = Some(choice);
        self
    }

    pub fn build(self) -> Result<AlertData, AlertError> {
        if self.title.is_none() && self.body.is_none() {
            return Err(AlertError::MissingDescription);
        }
        if self.cancel.is_none() && self.destructive.is_none() && self.positive.is_none() {
            return Err(AlertError::MissingChoices);
        }

        Ok(AlertData {
            title: self.title,
            body: self.body,
            cancel: self.cancel,
            destructive: self.destructive,
            positive: self.positive,
        })
    }
}
