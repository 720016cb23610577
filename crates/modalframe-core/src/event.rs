#![forbid(unsafe_code)]

//! Interaction events and the typed dispatch key that routes them.
//!
//! A [`DispatchKey`] identifies one rendered button: either its ordinal
//! position in the button sequence or an explicit id the application chose.
//! Keys are resolved once, when the controller binds its buttons, and stay
//! stable for the controller's lifetime.

use core::fmt;

/// Stable identifier routing an interaction to its button definition.
///
/// Displays as `btn-<index>` for ordinal keys and as the raw id for explicit
/// ones, matching the wire form hosts use to tag interaction targets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DispatchKey {
    /// Positional key derived from the button's index in the ordered
    /// sequence.
    Ordinal(usize),
    /// Application-chosen id. Uniqueness is assumed but not enforced; on a
    /// collision the first definition in button order wins.
    Explicit(String),
}

impl DispatchKey {
    /// Create an explicit key from an application-chosen id.
    pub fn explicit(id: impl Into<String>) -> Self {
        Self::Explicit(id.into())
    }

    /// Whether this key was chosen by the application rather than derived
    /// from a position.
    #[must_use]
    pub fn is_explicit(&self) -> bool {
        matches!(self, Self::Explicit(_))
    }
}

impl fmt::Display for DispatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ordinal(index) => write!(f, "btn-{index}"),
            Self::Explicit(id) => f.write_str(id),
        }
    }
}

/// A raw user interaction delivered by the host's event channel.
///
/// Carries the dispatch key of the element the interaction targeted.
/// `prevent_default` is sticky: once set it cannot be cleared, so the host
/// can check it after dispatch to suppress its own default handling.
#[derive(Debug, Clone)]
pub struct InteractionEvent {
    target: DispatchKey,
    default_prevented: bool,
}

impl InteractionEvent {
    /// Create an event targeting the given dispatch key.
    pub fn new(target: DispatchKey) -> Self {
        Self {
            target,
            default_prevented: false,
        }
    }

    /// The dispatch key of the interaction target.
    #[must_use]
    pub fn target(&self) -> &DispatchKey {
        &self.target
    }

    /// Suppress the host's default action for this interaction.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether the default action has been suppressed.
    #[must_use]
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
