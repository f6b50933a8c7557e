//! A list with zero or one selected items.

use std::ops::Deref;

use crate::attr::{AttrBase, AttrData, Rwx};

/// Attr data for a list where the front-end can change the selection.
///
/// Besides the usual value/mode/metadata this carries the list itself as
/// read-only data, shown if and only if the mode is readable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListData<T, M = ()> {
    /// Index of the selected item in `list`, if any.
    ///
    /// The front-end must not assume this is in bounds.
    pub value: Option<usize>,
    pub list: Vec<T>,
    pub mode: Rwx,
    pub metadata: M,
}

impl<T> ListData<T> {
    pub fn new(value: Option<usize>, list: Vec<T>, mode: Rwx) -> Self {
        Self {
            value,
            list,
            mode,
            metadata: (),
        }
    }
}

impl<T, M> ListData<T, M> {
    pub fn with_metadata(value: Option<usize>, list: Vec<T>, mode: Rwx, metadata: M) -> Self {
        Self {
            value,
            list,
            mode,
            metadata,
        }
    }

    /// The selected item, if one is selected, in bounds and readable.
    pub fn item(&self) -> Option<&T> {
        if !self.mode.is_readable() {
            return None;
        }
        self.value.and_then(|index| self.list.get(index))
    }
}

impl<T, M> AttrData for ListData<T, M>
where
    T: Clone + Send + Sync + 'static,
    M: Clone + Send + Sync + 'static,
{
    type Value = Option<usize>;
    type Metadata = M;

    fn value(&self) -> &Option<usize> {
        &self.value
    }

    fn mode(&self) -> Rwx {
        self.mode
    }

    fn metadata(&self) -> &M {
        &self.metadata
    }
}

/// Attr for a list with zero or one selected items.
///
/// Stricter than [`Attr`](crate::attr::Attr): out-of-range selections are
/// dropped at the boundary and never reach the write callback.
pub struct ListAttr<T, M = ()>(AttrBase<ListData<T, M>>)
where
    T: Clone + Send + Sync + 'static,
    M: Clone + Send + Sync + 'static;

impl<T, M> ListAttr<T, M>
where
    T: Clone + Send + Sync + 'static,
    M: Clone + Send + Sync + 'static,
{
    pub fn new(data: ListData<T, M>) -> Self {
        Self(AttrBase::new(data))
    }

    pub fn on_write(self, write: impl Fn(Option<usize>) + Send + Sync + 'static) -> Self {
        Self(self.0.on_write(write))
    }

    pub fn on_execute(self, execute: impl Fn(&ListData<T, M>) + Send + Sync + 'static) -> Self {
        Self(self.0.on_execute(execute))
    }

    /// Call from the front-end whenever the user selects an item or clears
    /// the selection.
    pub fn input(&self, index: Option<usize>) {
        if let Some(index) = index {
            let len = self.0.data().list.len();
            if index >= len {
                tracing::debug!(index, len, "Ignoring out-of-bounds selection");
                return;
            }
        }
        self.0.write(index);
    }

    /// Back-end selection by item; publishes directly without the write
    /// callback. Selects nothing if `item` is not in the list.
    pub fn select_by_item(&self, item: &T)
    where
        T: PartialEq,
    {
        self.0.update(|data| {
            data.value = data.list.iter().position(|candidate| candidate == item);
        });
    }
}

impl<T, M> Deref for ListAttr<T, M>
where
    T: Clone + Send + Sync + 'static,
    M: Clone + Send + Sync + 'static,
{
    type Target = AttrBase<ListData<T, M>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
