//! Reactive attrs: mode-gated observable cells for front-end I/O.
//!
//! The back-end owns every attr and is the only party that publishes
//! snapshots. The front-end observes snapshots and calls back through the
//! gated entry points:
//!
//! ```text
//! back-end ──publish──→ Attr ──observe──→ front-end
//!     ↑                                        │
//!     └──── write/execute callback ←─ input ───┘
//! ```

mod base;
mod bool_attr;
mod list_attr;
mod plain;
mod rwx;

pub use base::{AttrBase, AttrData, MappedObserver, Observer, Publisher};
pub use bool_attr::BoolAttr;
pub use list_attr::{ListAttr, ListData};
pub use plain::{Attr, PlainData};
pub use rwx::Rwx;
