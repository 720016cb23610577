#![forbid(unsafe_code)]

//! Body content and the nested-content contract.
//!
//! A modal body is either literal markup or a nested component the
//! controller owns. Nested components receive a [`ModalLink`], a non-owning
//! back-reference to the owning controller, through which they can request a
//! close or signal submission upward without ever managing the controller's
//! lifetime.

use core::fmt;
use std::cell::{Cell, RefCell};
use std::rc::Weak;

use modalframe_core::{HostWidget, Lifecycle, ModalSignal, WeakSignalHub};
use tracing::debug;

/// Nested, independently renderable body content.
///
/// The owning controller drives the whole lifecycle: it attaches the
/// back-reference once, asks for the body presentation on every render, and
/// on teardown calls [`detach_bindings`](Self::detach_bindings) then
/// [`release_presentation`](Self::release_presentation), in that order,
/// exactly once.
pub trait EmbeddedContent {
    /// Accept the back-reference to the owning modal. Called once, at the
    /// first render that materializes this content.
    fn attach(&mut self, owner: ModalLink);

    /// Produce the content's own presentation, nested inside the modal's
    /// content region.
    fn render_body(&mut self) -> String;

    /// Detach any event bindings this content registered.
    fn detach_bindings(&mut self);

    /// Release the content's presentation.
    fn release_presentation(&mut self);
}

/// Factory for content the controller instantiates itself at first render.
pub type ContentFactory = Box<dyn FnOnce(ModalLink) -> Box<dyn EmbeddedContent>>;

/// What goes in the modal body.
#[derive(Default)]
pub enum BodyContent {
    /// No body.
    #[default]
    Empty,
    /// Literal markup, rendered verbatim.
    Literal(String),
    /// A pre-built nested component. The controller takes ownership of its
    /// teardown, not its construction.
    Component(Box<dyn EmbeddedContent>),
    /// A component the controller constructs at first render, handing the
    /// factory the back-reference. Behaves as `Component` afterwards.
    Deferred(ContentFactory),
}

impl BodyContent {
    /// Literal markup body.
    pub fn literal(markup: impl Into<String>) -> Self {
        Self::Literal(markup.into())
    }

    /// Pre-built nested component body.
    pub fn component(content: impl EmbeddedContent + 'static) -> Self {
        Self::Component(Box::new(content))
    }

    /// Deferred component body, constructed by the controller at first
    /// render.
    pub fn deferred(
        factory: impl FnOnce(ModalLink) -> Box<dyn EmbeddedContent> + 'static,
    ) -> Self {
        Self::Deferred(Box::new(factory))
    }
}

impl fmt::Debug for BodyContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty"),
            Self::Literal(markup) => f.debug_tuple("Literal").field(markup).finish(),
            Self::Component(_) => f.write_str("Component(..)"),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// Non-owning back-reference from nested content to its owning modal.
///
/// Carries only weak references: nested content can signal upward through it
/// but never extends the controller's lifetime. Every operation degrades to
/// a no-op (returning `false`) once the controller is gone.
#[derive(Clone)]
pub struct ModalLink {
    state: Weak<Cell<Lifecycle>>,
    signals: WeakSignalHub,
    host: Weak<RefCell<dyn HostWidget>>,
}

impl ModalLink {
    pub(crate) fn new(
        state: Weak<Cell<Lifecycle>>,
        signals: WeakSignalHub,
        host: Weak<RefCell<dyn HostWidget>>,
    ) -> Self {
        Self {
            state,
            signals,
            host,
        }
    }

    /// The owning controller's lifecycle state, if it is still alive.
    #[must_use]
    pub fn lifecycle(&self) -> Option<Lifecycle> {
        self.state.upgrade().map(|state| state.get())
    }

    /// Whether the owning modal is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.lifecycle() == Some(Lifecycle::Open)
    }

    /// Ask the owning modal to close.
    ///
    /// Mirrors the controller's own `close`: valid only while open, and the
    /// actual teardown still waits for the host's closed notification.
    /// Returns whether a close was requested.
    pub fn request_close(&self) -> bool {
        let Some(state) = self.state.upgrade() else {
            return false;
        };
        if !state.get().can_close() {
            return false;
        }
        let Some(host) = self.host.upgrade() else {
            return false;
        };
        state.set(Lifecycle::Closing);
        host.borrow_mut().hide();
        debug!("nested content requested close");
        true
    }

    /// Emit the `Submit` signal through the owning modal's hub. Returns
    /// whether the hub was still alive.
    pub fn emit_submit(&self) -> bool {
        self.signals.emit(&ModalSignal::Submit)
    }
}

impl fmt::Debug for ModalLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalLink")
            .field("lifecycle", &self.lifecycle())
            .finish()
    }
}
