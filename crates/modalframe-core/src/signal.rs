#![forbid(unsafe_code)]

//! Synchronous signal emission with RAII listener registration.
//!
//! A [`SignalHub`] is the controller's outward event channel: external
//! listeners subscribe before interacting and receive [`ModalSignal`]s
//! synchronously, in registration order, as dispatch runs.
//!
//! # Invariants
//!
//! 1. Listeners are notified in registration order.
//! 2. Emission is synchronous; no queuing, no async defer.
//! 3. Dropping a [`Subscription`] removes the callback before the next
//!    emission cycle (a cycle already in flight may still deliver to it).
//! 4. A listener subscribed during an emission cycle is first notified on
//!    the next cycle.
//! 5. Re-entrant delivery to a callback that is already running is skipped,
//!    never deadlocked.
//!
//! # Failure Modes
//!
//! - Callback panic: propagates to the emitter (no poisoning; `Rc`/`RefCell`
//!   state stays consistent).
//! - Hub dropped while subscriptions alive: the guards become inert no-ops.

use core::fmt;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::trace;

use crate::event::DispatchKey;

/// Signal emitted by a modal controller during button dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalSignal {
    /// A submit-type button was clicked.
    Submit,
    /// The button with the given dispatch key was clicked. Emitted for every
    /// resolved click, after `Submit` when both apply.
    Click(DispatchKey),
}

type Callback = Rc<RefCell<dyn FnMut(&ModalSignal)>>;

struct Listener {
    id: u64,
    callback: Callback,
}

struct HubInner {
    listeners: Vec<Listener>,
    next_id: u64,
}

/// Single-threaded signal hub with shared ownership.
///
/// Cloning shares the underlying listener table; the controller and its
/// application-facing handle observe the same registrations.
#[derive(Clone)]
pub struct SignalHub {
    inner: Rc<RefCell<HubInner>>,
}

impl SignalHub {
    /// Create an empty hub.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(HubInner {
                listeners: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// Register a listener for every emitted signal.
    ///
    /// The returned guard unsubscribes on drop; keep it alive for as long as
    /// the listener should fire.
    #[must_use = "dropping the subscription immediately unsubscribes the listener"]
    pub fn subscribe(&self, callback: impl FnMut(&ModalSignal) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push(Listener {
            id,
            callback: Rc::new(RefCell::new(callback)),
        });
        Subscription {
            hub: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Deliver a signal to every registered listener, in registration order.
    pub fn emit(&self, signal: &ModalSignal) {
        // Snapshot the callbacks so listener churn inside a callback does not
        // alias the hub borrow. Additions land in the table for the next
        // cycle; removals take effect once the snapshot is exhausted.
        let snapshot: Vec<Callback> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|listener| Rc::clone(&listener.callback))
            .collect();

        for callback in snapshot {
            match callback.try_borrow_mut() {
                Ok(mut run) => (&mut *run)(signal),
                // Re-entrant emission into a callback that is already on the
                // stack; skipping keeps delivery from recursing into itself.
                Err(_) => trace!(?signal, "skipped re-entrant signal delivery"),
            }
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Drop every registered listener. Outstanding [`Subscription`] guards
    /// become inert.
    pub fn clear(&self) {
        self.inner.borrow_mut().listeners.clear();
    }

    /// A non-owning handle for emitting without keeping the hub alive.
    #[must_use]
    pub fn downgrade(&self) -> WeakSignalHub {
        WeakSignalHub {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl Default for SignalHub {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SignalHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Non-owning emitter handle, held by nested content back-references.
#[derive(Clone)]
pub struct WeakSignalHub {
    inner: Weak<RefCell<HubInner>>,
}

impl WeakSignalHub {
    /// Emit through the hub if it is still alive. Returns `false` once the
    /// owning hub has been dropped.
    pub fn emit(&self, signal: &ModalSignal) -> bool {
        match self.inner.upgrade() {
            Some(inner) => {
                SignalHub { inner }.emit(signal);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for WeakSignalHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakSignalHub")
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}

/// RAII listener registration; dropping it unsubscribes.
#[must_use = "dropping the subscription immediately unsubscribes the listener"]
pub struct Subscription {
    hub: Weak<RefCell<HubInner>>,
    id: u64,
}

impl Subscription {
    /// Explicitly unsubscribe (equivalent to dropping the guard).
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.hub.upgrade() {
            inner
                .borrow_mut()
                .listeners
                .retain(|listener| listener.id != self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
