use std::ops::Deref;

use crate::attr::{AttrBase, PlainData};

/// An attr whose value is specifically a `bool`, so the front-end gets a
/// [`toggle`](BoolAttr::toggle) convenience.
pub struct BoolAttr<M = ()>(AttrBase<PlainData<bool, M>>)
where
    M: Clone + Send + Sync + 'static;

impl<M> BoolAttr<M>
where
    M: Clone + Send + Sync + 'static,
{
    pub fn new(data: PlainData<bool, M>) -> Self {
        Self(AttrBase::new(data))
    }

    pub fn on_write(self, write: impl Fn(bool) + Send + Sync + 'static) -> Self {
        Self(self.0.on_write(write))
    }

    pub fn on_execute(self, execute: impl Fn(&PlainData<bool, M>) + Send + Sync + 'static) -> Self {
        Self(self.0.on_execute(execute))
    }

    /// Call from the front-end whenever the user inputs a new value.
    pub fn input(&self, value: bool) {
        self.0.write(value);
    }

    /// Call from the front-end when the user wants to flip the value.
    pub fn toggle(&self) {
        let current = self.0.data().value;
        self.0.write(!current);
    }
}

impl<M> Deref for BoolAttr<M>
where
    M: Clone + Send + Sync + 'static,
{
    type Target = AttrBase<PlainData<bool, M>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
