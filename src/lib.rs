//! Back-end building blocks for apps with a strict front-end/back-end split.
//!
//! The back-end owns all state and logic. The front-end observes published
//! snapshots and calls back through mode-gated entry points:
//!
//! - [`attr`]: observable cells gated by [`attr::Rwx`] modes.
//! - [`router`]: the navigation back stack, applied by a single worker.
//! - [`alert`] and [`event`]: modal prompts and one-shot front-end events.

pub mod alert;
pub mod attr;
pub mod config;
pub mod demo;
pub mod event;
pub mod logging;
pub mod router;
