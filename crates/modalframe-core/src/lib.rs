#![forbid(unsafe_code)]

//! Framework-facing contracts for modalframe.
//!
//! This crate holds everything a modal controller and its host need to agree
//! on, with no controller logic of its own:
//!
//! - [`DispatchKey`] and [`InteractionEvent`]: typed routing of user
//!   interactions to button definitions.
//! - [`HostWidget`]: the visual modal primitive (show/hide/backdrop) the
//!   controller delegates to, plus the [`HostEvent`] channel it reports back
//!   through.
//! - [`SignalHub`] / [`Subscription`]: listener registration and synchronous
//!   signal emission with RAII unsubscription.
//! - [`Lifecycle`] / [`LifecycleError`]: the controller state machine and its
//!   fail-fast precondition error.

pub mod event;
pub mod host;
pub mod lifecycle;
pub mod signal;

pub use event::{DispatchKey, InteractionEvent};
pub use host::{Backdrop, HostEvent, HostWidget, ShowOptions};
pub use lifecycle::{Lifecycle, LifecycleError};
pub use signal::{ModalSignal, SignalHub, Subscription, WeakSignalHub};
