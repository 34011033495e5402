use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

type Listener = Rc<dyn Fn()>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// A single-threaded source of resize notifications (e.g. the host window).
///
/// Components subscribe when they mount and keep the returned [`ResizeSubscription`]; dropping
/// it unsubscribes. The host calls [`ResizeHub::notify`] from its resize event.
#[derive(Clone, Default)]
pub struct ResizeHub {
    inner: Rc<RefCell<Listeners>>,
}

impl ResizeHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn() + 'static) -> ResizeSubscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id = inner.next_id.wrapping_add(1);
        inner.entries.push((id, Rc::new(listener)));
        atrace!(id, listeners = inner.entries.len(), "ResizeHub::subscribe");
        ResizeSubscription {
            hub: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Invokes every live listener and returns how many were called.
    ///
    /// Listeners may subscribe or unsubscribe while being notified; such changes take effect
    /// on the next `notify`.
    pub fn notify(&self) -> usize {
        let listeners: Vec<Listener> = self
            .inner
            .borrow()
            .entries
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in &listeners {
            listener();
        }
        listeners.len()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for ResizeHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeHub")
            .field("listeners", &self.len())
            .finish()
    }
}

/// Keeps a resize listener registered; dropping it unsubscribes.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct ResizeSubscription {
    hub: Weak<RefCell<Listeners>>,
    id: u64,
}

impl ResizeSubscription {
    /// `false` once the hub itself has been dropped.
    pub fn is_active(&self) -> bool {
        self.hub.strong_count() > 0
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        let Some(hub) = self.hub.upgrade() else {
            return;
        };
        // The listener is dropped after the borrow ends: it may own other subscriptions.
        let removed = {
            let mut inner = hub.borrow_mut();
            let removed = inner
                .entries
                .iter()
                .position(|(id, _)| *id == self.id)
                .map(|i| inner.entries.remove(i));
            atrace!(id = self.id, listeners = inner.entries.len(), "ResizeSubscription::drop");
            removed
        };
        drop(removed);
    }
}

impl fmt::Debug for ResizeSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeSubscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
