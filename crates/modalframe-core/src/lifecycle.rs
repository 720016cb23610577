#![forbid(unsafe_code)]

//! Controller lifecycle states and the fail-fast precondition error.
//!
//! The lifecycle is strictly forward-moving:
//!
//! ```text
//! Constructed -> Rendered -> Open -> Closing -> Destroyed
//! ```
//!
//! `Open` may repeat (re-open while already open is permitted) and `Rendered`
//! may be re-entered by re-rendering, but `Destroyed` is terminal: every
//! listener is detached, owned content is released, and only idempotent
//! no-ops remain valid.

use core::fmt;
use thiserror::Error;

/// Where a modal controller is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    /// Configuration accepted, nothing presented yet.
    #[default]
    Constructed,
    /// The presentation surface has been built at least once.
    Rendered,
    /// The host widget is showing the modal.
    Open,
    /// A close was requested; the host's hide transition is in flight.
    Closing,
    /// Terminal. Listeners detached, owned content released.
    Destroyed,
}

impl Lifecycle {
    /// `render` is valid in every state except `Destroyed`.
    #[must_use]
    pub fn can_render(self) -> bool {
        !matches!(self, Self::Destroyed)
    }

    /// `open` is valid only once a surface exists.
    #[must_use]
    pub fn can_open(self) -> bool {
        matches!(self, Self::Rendered | Self::Open)
    }

    /// `close` is valid only while the host is showing the modal.
    #[must_use]
    pub fn can_close(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Whether the terminal state has been reached.
    #[must_use]
    pub fn is_destroyed(self) -> bool {
        matches!(self, Self::Destroyed)
    }
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Constructed => "constructed",
            Self::Rendered => "rendered",
            Self::Open => "open",
            Self::Closing => "closing",
            Self::Destroyed => "destroyed",
        };
        f.write_str(name)
    }
}

/// Precondition violation for an out-of-order lifecycle call.
///
/// Returned instead of mutating an invalid presentation. Idempotent
/// operations (`destroy`, the by-key state setters) never produce this; they
/// are documented no-ops instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LifecycleError {
    /// The operation is not valid in the controller's current state.
    #[error("`{operation}` is not valid while the modal is {state}")]
    InvalidTransition {
        /// Name of the rejected operation.
        operation: &'static str,
        /// State the controller was in when the call arrived.
        state: Lifecycle,
    },
}
