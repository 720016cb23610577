#![forbid(unsafe_code)]

//! The modal controller: configuration, rendering, dispatch, and lifecycle.
//!
//! Invariants:
//! - Dispatch keys are resolved once, at construction, and never change.
//! - `process_button_click` finishes (callback, `Submit`, `Click(key)`)
//!   before any close triggered by the same interaction begins.
//! - Teardown runs exactly once, always via the host's closed notification
//!   reaching `destroy`, whether the close came from a button, the
//!   backdrop, the escape key, or a programmatic `close`.
//!
//! Failure modes:
//! - Out-of-order lifecycle calls return [`LifecycleError`]; no presentation
//!   is mutated on the error path.
//! - Interactions that resolve to nothing are ignored, not errors.

use core::fmt;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use modalframe_core::{
    Backdrop, DispatchKey, HostEvent, HostWidget, InteractionEvent, Lifecycle, LifecycleError,
    ModalSignal, ShowOptions, SignalHub, Subscription,
};
use tracing::{debug, trace};

use super::button::ButtonSpec;
use super::content::{BodyContent, ModalLink};
use super::surface::{ButtonFlags, ModalSurface, RenderedButton};

/// Declarative modal configuration.
///
/// Every field is optional; the defaults are an untitled modal with a
/// title-close affordance, a static backdrop, no buttons, and an empty body.
/// Immutable once handed to the controller, except through the explicit
/// disabled/loading setter operations.
#[derive(Debug)]
pub struct ModalConfig {
    /// Title row text.
    pub title: String,
    /// Whether the title row offers the close affordance.
    pub show_title_close: bool,
    /// Backdrop behavior requested on open.
    pub backdrop: Backdrop,
    /// Footer buttons, in display and dispatch order.
    pub buttons: Vec<ButtonSpec>,
    /// Body content.
    pub body: BodyContent,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            show_title_close: true,
            backdrop: Backdrop::Static,
            buttons: Vec::new(),
            body: BodyContent::Empty,
        }
    }
}

impl ModalConfig {
    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set whether the title row offers the close affordance.
    pub fn show_title_close(mut self, show: bool) -> Self {
        self.show_title_close = show;
        self
    }

    /// Set the backdrop behavior.
    pub fn backdrop(mut self, backdrop: Backdrop) -> Self {
        self.backdrop = backdrop;
        self
    }

    /// Append a button.
    pub fn button(mut self, button: ButtonSpec) -> Self {
        self.buttons.push(button);
        self
    }

    /// Replace the button list.
    pub fn buttons(mut self, buttons: impl IntoIterator<Item = ButtonSpec>) -> Self {
        self.buttons = buttons.into_iter().collect();
        self
    }

    /// Set the body content.
    pub fn body(mut self, body: BodyContent) -> Self {
        self.body = body;
        self
    }
}

/// A button with its dispatch key resolved.
///
/// The key is computed once, at construction (explicit id when given, else
/// the positional key) and carried on the bound button rather than being
/// recomputed per interaction.
struct BoundButton {
    key: DispatchKey,
    spec: ButtonSpec,
}

/// One entry of the dispatch table built at render time.
struct Binding {
    key: DispatchKey,
    /// Whether the interaction additionally requests a close once
    /// `process_button_click` has completed.
    closes: bool,
}

/// Controller for a single modal dialog.
///
/// See the [module docs](super) for the lifecycle and dispatch contract.
pub struct ModalController {
    title: String,
    show_title_close: bool,
    backdrop: Backdrop,
    buttons: Vec<BoundButton>,
    body: BodyContent,
    content_attached: bool,
    bindings: Vec<Binding>,
    surface: ModalSurface,
    state: Rc<Cell<Lifecycle>>,
    signals: SignalHub,
    host: Rc<RefCell<dyn HostWidget>>,
}

impl ModalController {
    /// Create a controller owning its host widget.
    pub fn new(config: ModalConfig, host: impl HostWidget + 'static) -> Self {
        Self::from_shared(config, Rc::new(RefCell::new(host)))
    }

    /// Create a controller over a host handle the application keeps.
    pub fn from_shared(config: ModalConfig, host: Rc<RefCell<dyn HostWidget>>) -> Self {
        let buttons = config
            .buttons
            .into_iter()
            .enumerate()
            .map(|(index, spec)| {
                let key = match &spec.id {
                    Some(id) => DispatchKey::Explicit(id.clone()),
                    None => DispatchKey::Ordinal(index),
                };
                BoundButton { key, spec }
            })
            .collect();

        Self {
            title: config.title,
            show_title_close: config.show_title_close,
            backdrop: config.backdrop,
            buttons,
            body: config.body,
            content_attached: false,
            bindings: Vec::new(),
            surface: ModalSurface::default(),
            state: Rc::new(Cell::new(Lifecycle::Constructed)),
            signals: SignalHub::new(),
            host,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.state.get()
    }

    /// Whether the host is currently showing the modal.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.get() == Lifecycle::Open
    }

    /// The rendered presentation subtree.
    #[must_use]
    pub fn surface(&self) -> &ModalSurface {
        &self.surface
    }

    /// The controller's signal hub; subscribe before interacting.
    #[must_use]
    pub fn signals(&self) -> &SignalHub {
        &self.signals
    }

    /// The resolved dispatch keys, in button order.
    #[must_use]
    pub fn dispatch_keys(&self) -> Vec<DispatchKey> {
        self.buttons.iter().map(|bound| bound.key.clone()).collect()
    }

    /// Subscribe to the `Submit` signal.
    #[must_use = "dropping the subscription immediately unsubscribes the listener"]
    pub fn on_submit(&self, mut callback: impl FnMut() + 'static) -> Subscription {
        self.signals.subscribe(move |signal| {
            if matches!(signal, ModalSignal::Submit) {
                callback();
            }
        })
    }

    /// Subscribe to the click signal of one button.
    #[must_use = "dropping the subscription immediately unsubscribes the listener"]
    pub fn on_click(
        &self,
        key: DispatchKey,
        mut callback: impl FnMut() + 'static,
    ) -> Subscription {
        self.signals.subscribe(move |signal| {
            if matches!(signal, ModalSignal::Click(clicked) if *clicked == key) {
                callback();
            }
        })
    }

    /// The non-owning back-reference handed to nested content.
    #[must_use]
    pub fn link(&self) -> ModalLink {
        ModalLink::new(
            Rc::downgrade(&self.state),
            self.signals.downgrade(),
            Rc::downgrade(&self.host),
        )
    }

    /// Build (or rebuild) the presentation surface and the dispatch table.
    ///
    /// Idempotent from the caller's perspective: repeated calls rebuild the
    /// surface deterministically from the configuration, which also resets
    /// any transient disabled/loading presentation state. Safe to call
    /// before `open`. Literal body markup is inserted verbatim; nested
    /// content is instantiated on first render (receiving the
    /// back-reference) and reused afterwards.
    ///
    /// # Errors
    ///
    /// [`LifecycleError::InvalidTransition`] once the controller is
    /// destroyed.
    pub fn render(&mut self) -> Result<&mut Self, LifecycleError> {
        let state = self.state.get();
        if !state.can_render() {
            return Err(LifecycleError::InvalidTransition {
                operation: "render",
                state,
            });
        }

        let link = self.link();
        let body = self.materialize_body(&link);

        let buttons = self
            .buttons
            .iter()
            .map(|bound| {
                let mut flags = ButtonFlags::empty();
                flags.set(ButtonFlags::AS_LINK, bound.spec.render_as_link);
                RenderedButton {
                    key: bound.key.clone(),
                    label: bound.spec.text.clone(),
                    base_label: bound.spec.text.clone(),
                    css_class: bound.spec.effective_class(),
                    flags,
                }
            })
            .collect();

        self.surface = ModalSurface {
            title: self.title.clone(),
            show_title_close: self.show_title_close,
            body,
            buttons,
        };

        self.bindings = self
            .buttons
            .iter()
            .map(|bound| Binding {
                key: bound.key.clone(),
                closes: bound.spec.is_close_button,
            })
            .collect();

        if state == Lifecycle::Constructed {
            self.state.set(Lifecycle::Rendered);
        }
        debug!(buttons = self.buttons.len(), "modal rendered");
        Ok(self)
    }

    fn materialize_body(&mut self, link: &ModalLink) -> String {
        if matches!(self.body, BodyContent::Deferred(_))
            && let BodyContent::Deferred(factory) =
                std::mem::replace(&mut self.body, BodyContent::Empty)
        {
            // The factory receives the back-reference at construction, so no
            // separate attach call is needed.
            self.body = BodyContent::Component(factory(link.clone()));
            self.content_attached = true;
        }

        match &mut self.body {
            BodyContent::Empty => String::new(),
            BodyContent::Literal(markup) => markup.clone(),
            BodyContent::Component(content) => {
                if !self.content_attached {
                    content.attach(link.clone());
                    self.content_attached = true;
                }
                content.render_body()
            }
            // Converted to Component above.
            BodyContent::Deferred(_) => String::new(),
        }
    }

    /// Ask the host to show the modal with the configured backdrop.
    ///
    /// Returns the controller for call chaining
    /// (`modal.render()?.open()?`).
    ///
    /// # Errors
    ///
    /// [`LifecycleError::InvalidTransition`] unless the modal is rendered or
    /// already open.
    pub fn open(&mut self) -> Result<&mut Self, LifecycleError> {
        let state = self.state.get();
        if !state.can_open() {
            return Err(LifecycleError::InvalidTransition {
                operation: "open",
                state,
            });
        }
        self.host.borrow_mut().show(ShowOptions {
            backdrop: self.backdrop,
        });
        self.state.set(Lifecycle::Open);
        debug!(backdrop = ?self.backdrop, "modal opened");
        Ok(self)
    }

    /// Ask the host to hide the modal.
    ///
    /// Performs no teardown itself: whatever triggers a close, teardown is
    /// driven by the host's closed notification reaching `destroy`.
    ///
    /// # Errors
    ///
    /// [`LifecycleError::InvalidTransition`] unless the modal is open.
    pub fn close(&mut self) -> Result<(), LifecycleError> {
        let state = self.state.get();
        if !state.can_close() {
            return Err(LifecycleError::InvalidTransition {
                operation: "close",
                state,
            });
        }
        self.state.set(Lifecycle::Closing);
        self.host.borrow_mut().hide();
        debug!("modal close requested");
        Ok(())
    }

    /// Tear the modal down. Idempotent: a second call is a no-op.
    ///
    /// Owned nested content detaches its bindings and releases its
    /// presentation before the controller detaches its own listeners and
    /// releases the surface.
    pub fn destroy(&mut self) {
        if self.state.get().is_destroyed() {
            trace!("destroy on an already-destroyed modal is a no-op");
            return;
        }
        if let BodyContent::Component(content) = &mut self.body {
            content.detach_bindings();
            content.release_presentation();
        }
        self.body = BodyContent::Empty;
        self.signals.clear();
        self.bindings.clear();
        self.surface.clear();
        self.state.set(Lifecycle::Destroyed);
        debug!("modal destroyed");
    }

    /// Handle a notification from the host widget.
    ///
    /// The closed notification is the single teardown path: it always maps
    /// to `destroy`, independent of how the close was triggered.
    pub fn handle_host_event(&mut self, event: HostEvent) {
        match event {
            HostEvent::Closed => self.destroy(),
        }
    }

    /// Route an interaction through the dispatch table.
    ///
    /// Resolves the event's key against the bindings built at render time,
    /// runs `process_button_click`, and for close-type buttons requests
    /// a close strictly after it completes. Interactions with no matching
    /// binding are ignored.
    ///
    /// # Errors
    ///
    /// [`LifecycleError::InvalidTransition`] once the controller is
    /// destroyed.
    pub fn handle_interaction(
        &mut self,
        event: &mut InteractionEvent,
    ) -> Result<(), LifecycleError> {
        let state = self.state.get();
        if state.is_destroyed() {
            return Err(LifecycleError::InvalidTransition {
                operation: "handle_interaction",
                state,
            });
        }

        let Some(binding) = self
            .bindings
            .iter()
            .find(|binding| binding.key == *event.target())
        else {
            debug!(target = %event.target(), "ignoring interaction with no matching binding");
            return Ok(());
        };
        let closes = binding.closes;

        self.process_button_click(event);

        // The button's own callback may already have requested a close
        // through its back-reference; only request one if still open.
        if closes && self.state.get().can_close() {
            self.close()?;
        }
        Ok(())
    }

    /// Run the click pipeline for the button the event targets.
    ///
    /// Prevents the event's default action, resolves the key by linear scan
    /// of the ordered button sequence (first match wins on duplicate ids),
    /// then synchronously: invokes the button's callback if present, emits
    /// `Submit` iff the button is a submit button, and always emits
    /// `Click(key)`. An unresolved key is ignored.
    pub fn process_button_click(&self, event: &mut InteractionEvent) {
        event.prevent_default();
        let target = event.target().clone();

        let Some(bound) = self.buttons.iter().find(|bound| bound.key == target) else {
            debug!(key = %target, "click did not resolve to a button");
            return;
        };

        if let Some(click) = &bound.spec.click {
            click();
        }
        if bound.spec.is_submit_button {
            self.signals.emit(&ModalSignal::Submit);
        }
        self.signals.emit(&ModalSignal::Click(target));
    }

    /// Apply the disabled flag to every submit-type button.
    pub fn set_submit_button_disabled_state(&mut self, is_disabled: bool) {
        let keys: Vec<DispatchKey> = self
            .buttons
            .iter()
            .filter(|bound| bound.spec.is_submit_button)
            .map(|bound| bound.key.clone())
            .collect();
        for key in keys {
            self.set_button_disabled_state(&key, is_disabled);
        }
    }

    /// Apply the loading indicator to every button.
    ///
    /// Buttons with loading text swap their label while loading and restore
    /// the original label when loading ends; every button gets the disabled
    /// flag for the duration, resolved against its own key.
    pub fn set_loading_indicator_state(&mut self, is_loading: bool) {
        let updates: Vec<(DispatchKey, Option<String>)> = self
            .buttons
            .iter()
            .map(|bound| {
                (
                    bound.key.clone(),
                    bound.spec.loading_indicator_text.clone(),
                )
            })
            .collect();
        for (key, loading_text) in updates {
            match loading_text {
                Some(text) if !text.is_empty() => {
                    self.set_button_loading_state(&key, is_loading, &text);
                }
                _ => self.set_button_disabled_state(&key, is_loading),
            }
        }
    }

    /// Set the disabled flag on one rendered button. An absent key silently
    /// no-ops.
    pub fn set_button_disabled_state(&mut self, key: &DispatchKey, is_disabled: bool) {
        if let Some(button) = self.surface.button_mut(key) {
            button.flags.set(ButtonFlags::DISABLED, is_disabled);
        }
    }

    /// Set the loading state on one rendered button: swaps in the loading
    /// label while loading, restores the original label when not, and keeps
    /// the disabled flag in step. An absent key silently no-ops.
    pub fn set_button_loading_state(
        &mut self,
        key: &DispatchKey,
        is_loading: bool,
        loading_text: &str,
    ) {
        if let Some(button) = self.surface.button_mut(key) {
            button.label = if is_loading {
                loading_text.to_string()
            } else {
                button.base_label.clone()
            };
            button.flags.set(ButtonFlags::DISABLED, is_loading);
        }
    }
}

impl fmt::Debug for ModalController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalController")
            .field("title", &self.title)
            .field("state", &self.state.get())
            .field("buttons", &self.buttons.len())
            .finish()
    }
}
