#![forbid(unsafe_code)]

//! The controller-owned presentation subtree.
//!
//! A [`ModalSurface`] is plain data the host renders: title row, body
//! markup, and a footer of [`RenderedButton`]s. Only the controller (and,
//! transitively, its owned nested content) mutates it. Rebuilt
//! deterministically on every render; released on destroy.

use bitflags::bitflags;
use modalframe_core::DispatchKey;
use unicode_width::UnicodeWidthStr;

bitflags! {
    /// Presentation flags for a rendered button.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ButtonFlags: u8 {
        /// The element carries the disabled attribute.
        const DISABLED = 1 << 0;
        /// The element renders as a link-styled button.
        const AS_LINK = 1 << 1;
    }
}

/// One button as materialized in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedButton {
    /// Dispatch key the element is addressed by. Stable across re-renders.
    pub key: DispatchKey,
    /// Label currently shown (may be a loading indicator).
    pub label: String,
    /// The spec's original label, restored when loading ends.
    pub base_label: String,
    /// Full presentation class (`btn ...`).
    pub css_class: String,
    /// Presentation flags.
    pub flags: ButtonFlags,
}

impl RenderedButton {
    /// Whether the element carries the disabled attribute.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.flags.contains(ButtonFlags::DISABLED)
    }

    /// Whether the element renders as a link-styled button.
    #[must_use]
    pub fn as_link(&self) -> bool {
        self.flags.contains(ButtonFlags::AS_LINK)
    }

    /// Display width of the current label in terminal columns.
    #[must_use]
    pub fn display_width(&self) -> usize {
        UnicodeWidthStr::width(self.label.as_str())
    }
}

/// The modal's owned presentation subtree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModalSurface {
    /// Title row text.
    pub title: String,
    /// Whether the title row carries the close affordance. Activating it is
    /// the host's business; the controller only learns of the outcome via
    /// the closed notification.
    pub show_title_close: bool,
    /// Body markup (literal content or nested-content output).
    pub body: String,
    /// Footer buttons, in definition order.
    pub buttons: Vec<RenderedButton>,
}

impl ModalSurface {
    /// Look up a rendered button by key. On duplicate explicit ids the first
    /// match in footer order wins, consistent with dispatch.
    #[must_use]
    pub fn button(&self, key: &DispatchKey) -> Option<&RenderedButton> {
        self.buttons.iter().find(|button| button.key == *key)
    }

    pub(crate) fn button_mut(&mut self, key: &DispatchKey) -> Option<&mut RenderedButton> {
        self.buttons.iter_mut().find(|button| button.key == *key)
    }

    /// Total display width of the footer: button labels plus a two-column
    /// gap between neighbors.
    #[must_use]
    pub fn footer_width(&self) -> usize {
        let labels: usize = self.buttons.iter().map(RenderedButton::display_width).sum();
        labels + self.buttons.len().saturating_sub(1) * 2
    }

    /// Release the presentation: everything reverts to the empty surface.
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}
