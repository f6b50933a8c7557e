//! Plain attr data and the simplest attr, covering most use-cases.

use std::ops::Deref;

use crate::attr::{AttrBase, AttrData, Rwx};

/// A generic value with no other data.
///
/// Used by [`Attr`] and reused by simple attrs such as
/// [`BoolAttr`](crate::attr::BoolAttr).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlainData<V, M = ()> {
    pub value: V,
    pub mode: Rwx,
    pub metadata: M,
}

impl<V> PlainData<V> {
    pub fn new(value: V, mode: Rwx) -> Self {
        Self {
            value,
            mode,
            metadata: (),
        }
    }
}

impl<V, M> PlainData<V, M> {
    pub fn with_metadata(value: V, mode: Rwx, metadata: M) -> Self {
        Self {
            value,
            mode,
            metadata,
        }
    }
}

impl<V, M> AttrData for PlainData<V, M>
where
    V: Clone + Send + Sync + 'static,
    M: Clone + Send + Sync + 'static,
{
    type Value = V;
    type Metadata = M;

    fn value(&self) -> &V {
        &self.value
    }

    fn mode(&self) -> Rwx {
        self.mode
    }

    fn metadata(&self) -> &M {
        &self.metadata
    }
}

/// An attr where the front-end can directly input new values and no special
/// input validation is needed.
pub struct Attr<D: AttrData>(AttrBase<D>);

impl<D: AttrData> Attr<D> {
    pub fn new(data: D) -> Self {
        Self(AttrBase::new(data))
    }

    pub fn on_write(self, write: impl Fn(D::Value) + Send + Sync + 'static) -> Self {
        Self(self.0.on_write(write))
    }

    pub fn on_execute(self, execute: impl Fn(&D) + Send + Sync + 'static) -> Self {
        Self(self.0.on_execute(execute))
    }

    /// Call from the front-end whenever the user inputs a new value.
    pub fn input(&self, value: D::Value) {
        self.0.write(value);
    }
}

impl<D: AttrData> Deref for Attr<D> {
    type Target = AttrBase<D>;

    fn deref(&self) -> &AttrBase<D> {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn input_forwards_exact_value_once() {
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&received);
        let attr = Attr::new(PlainData::new(String::from("a"), Rwx::RW))
            .on_write(move |value: String| sink.lock().push(value));

        attr.input("b".to_string());
        assert_eq!(*received.lock(), vec!["b".to_string()]);
        // not applied until the callback publishes
        assert_eq!(attr.data().value, "a");
    }

    #[test]
    fn read_only_attr_ignores_input() {
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&received);
        let attr = Attr::new(PlainData::new(1u32, Rwx::R)).on_write(move |v| sink.lock().push(v));

        attr.input(2);
        assert!(received.lock().is_empty());
    }

    #[test]
    fn metadata_is_carried_alongside_value() {
        let attr = Attr::new(PlainData::with_metadata(
            "name".to_string(),
            Rwx::RW,
            Some("required".to_string()),
        ));
        assert_eq!(attr.data().metadata(), &Some("required".to_string()));

        attr.update(|data| data.metadata = None);
        assert_eq!(attr.data().metadata, None);
    }
}
