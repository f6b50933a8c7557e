//! The binding primitive shared by every attr.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use tokio::sync::watch;

use crate::attr::Rwx;

/// All data used for dynamic front-end I/O controlled by the back-end
/// conforms to this trait.
///
/// Snapshots are always replaced wholesale: observers never see a partially
/// updated value. Implementors are usually small `Clone` structs such as
/// [`PlainData`](crate::attr::PlainData) or
/// [`ListData`](crate::attr::ListData).
pub trait AttrData: Clone + Send + Sync + 'static {
    /// The only part of the snapshot the front-end may ask to change.
    type Value: Send + 'static;
    /// Use-case-specific read-only data, usually `()`.
    type Metadata;

    fn value(&self) -> &Self::Value;

    /// How the front-end may use this snapshot:
    ///
    /// - `R`: the value (and metadata) should be displayed.
    /// - `W`: input of a new value is allowed.
    /// - `X`: a secondary zero-argument action is allowed.
    ///
    /// W and X are enforced by [`AttrBase`], so a read-only component can
    /// safely bind to writable data.
    fn mode(&self) -> Rwx;

    fn metadata(&self) -> &Self::Metadata;
}

/// Logic-layer handle to an attr's snapshot slot.
///
/// Cloning is cheap; every clone publishes to the same observers. Write
/// callbacks usually capture one of these to apply accepted input.
pub struct Publisher<D> {
    sender: Arc<watch::Sender<D>>,
}

impl<D> Clone for Publisher<D> {
    fn clone(&self) -> Self {
        Self {
            sender: Arc::clone(&self.sender),
        }
    }
}

impl<D: AttrData> Publisher<D> {
    fn new(initial: D) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Latest published snapshot.
    pub fn get(&self) -> D {
        self.sender.borrow().clone()
    }

    pub fn mode(&self) -> Rwx {
        self.sender.borrow().mode()
    }

    /// Replace the snapshot and notify every observer.
    ///
    /// Concurrent publishers race last-write-wins.
    pub fn publish(&self, data: D) {
        self.sender.send_replace(data);
    }

    /// Modify the current snapshot in place and notify every observer.
    ///
    /// ```ignore
    /// publisher.update(|data| data.mode = Rwx::RW);
    /// ```
    ///
    /// `f` runs under the slot's lock, so concurrent updates never lose a
    /// change. It must not read this attr.
    pub fn update(&self, f: impl FnOnce(&mut D)) {
        self.sender.send_modify(f);
    }

    pub fn observe(&self) -> Observer<D> {
        Observer::new(self.sender.subscribe())
    }
}

/// A subscription to a latest-value slot: an attr's snapshots, or a
/// router's path or alert.
///
/// The first [`next`](Observer::next) yields the snapshot current at that
/// moment; later calls wait for replacements. Intermediate snapshots that are
/// replaced before the observer wakes up are skipped, so an observer always
/// catches up to the latest value instead of replaying history.
pub struct Observer<D> {
    receiver: watch::Receiver<D>,
    primed: bool,
}

impl<D: Clone> Observer<D> {
    pub(crate) fn new(receiver: watch::Receiver<D>) -> Self {
        Self {
            receiver,
            primed: false,
        }
    }

    pub fn current(&self) -> D {
        self.receiver.borrow().clone()
    }

    /// Treat the current snapshot as already seen, so the next
    /// [`next`](Observer::next) waits for a replacement.
    pub fn mark_seen(&mut self) {
        self.primed = true;
        self.receiver.borrow_and_update();
    }

    /// Returns `None` once the publishing side has been dropped.
    pub async fn next(&mut self) -> Option<D> {
        if !self.primed {
            self.primed = true;
            return Some(self.receiver.borrow_and_update().clone());
        }
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }

    /// Project every snapshot through `transform`.
    pub fn map<R, F>(self, transform: F) -> MappedObserver<D, R, F>
    where
        F: Fn(&D) -> R,
    {
        MappedObserver {
            inner: self,
            transform,
            _output: PhantomData,
        }
    }
}

/// An [`Observer`] whose snapshots are projected into a derived view.
pub struct MappedObserver<D, R, F> {
    inner: Observer<D>,
    transform: F,
    _output: PhantomData<fn() -> R>,
}

impl<D, R, F> MappedObserver<D, R, F>
where
    D: Clone,
    F: Fn(&D) -> R,
{
    pub fn current(&self) -> R {
        (self.transform)(&*self.inner.receiver.borrow())
    }

    pub async fn next(&mut self) -> Option<R> {
        let data = self.inner.next().await?;
        Some((self.transform)(&data))
    }
}

type WriteFn<V> = Box<dyn Fn(V) + Send + Sync>;
type ExecuteFn<D> = Box<dyn Fn(&D) + Send + Sync>;

/// All dynamic front-end I/O controlled by the back-end is decomposed into
/// instances of this type.
///
/// The write callback receives the raw value the front-end asked for. It is
/// not applied automatically: the callback decides whether and how to
/// publish a new snapshot, which is where input validation lives. The one
/// exception is `Value = ()`, where the callback only triggers side effects.
pub struct AttrBase<D: AttrData> {
    publisher: Publisher<D>,
    execute: Option<ExecuteFn<D>>,
    write: Option<WriteFn<D::Value>>,
}

impl<D: AttrData> AttrBase<D> {
    pub fn new(initial: D) -> Self {
        Self {
            publisher: Publisher::new(initial),
            execute: None,
            write: None,
        }
    }

    /// Callback for front-end input, invoked only while the mode is writable.
    pub fn on_write(mut self, write: impl Fn(D::Value) + Send + Sync + 'static) -> Self {
        self.write = Some(Box::new(write));
        self
    }

    /// Callback for the secondary action, invoked with the current snapshot
    /// only while the mode is executable.
    pub fn on_execute(mut self, execute: impl Fn(&D) + Send + Sync + 'static) -> Self {
        self.execute = Some(Box::new(execute));
        self
    }

    pub fn data(&self) -> D {
        self.publisher.get()
    }

    pub fn mode(&self) -> Rwx {
        self.publisher.mode()
    }

    pub fn publish(&self, data: D) {
        self.publisher.publish(data);
    }

    pub fn update(&self, f: impl FnOnce(&mut D)) {
        self.publisher.update(f);
    }

    pub fn publisher(&self) -> Publisher<D> {
        self.publisher.clone()
    }

    /// Collect this in the front-end to observe every back-end change.
    ///
    /// The back-end can observe it too, e.g. to derive another attr.
    pub fn observe(&self) -> Observer<D> {
        self.publisher.observe()
    }

    /// Forward front-end input to the write callback if the mode allows it.
    ///
    /// Wrappers perform their own validation before calling this. Back-end
    /// operations publish directly instead, except when emulating the
    /// front-end in tests.
    pub fn write(&self, value: D::Value) {
        let Some(write) = &self.write else {
            return;
        };
        if !self.mode().is_writable() {
            tracing::debug!(mode = ?self.mode(), "Ignoring write: attr not writable");
            return;
        }
        write(value);
    }

    /// Trigger the secondary action if the mode allows it.
    pub fn execute(&self) {
        let Some(execute) = &self.execute else {
            return;
        };
        let data = self.data();
        if !data.mode().is_executable() {
            tracing::debug!(mode = ?data.mode(), "Ignoring execute: attr not executable");
            return;
        }
        execute(&data);
    }

    pub fn can_write(&self) -> bool {
        self.write.is_some() && self.mode().is_writable()
    }

    pub fn can_execute(&self) -> bool {
        self.execute.is_some() && self.mode().is_executable()
    }
}

impl<D: AttrData + fmt::Debug> fmt::Debug for AttrBase<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttrBase")
            .field("data", &self.data())
            .field("write", &self.write.is_some())
            .field("execute", &self.execute.is_some())
            .finish()
    }
}
