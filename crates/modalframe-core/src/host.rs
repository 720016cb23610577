#![forbid(unsafe_code)]

//! The host-widget contract.
//!
//! The visual modal primitive (backdrop, show/hide animation, outside-click
//! and escape handling) lives outside this library. A controller only ever
//! calls [`HostWidget::show`] and [`HostWidget::hide`]; everything else is
//! the host's business.
//!
//! The contract has one obligation in the other direction: once the host's
//! hide transition finishes, for any reason (button-triggered close, backdrop
//! click, escape key, programmatic hide), the host must deliver
//! [`HostEvent::Closed`] to the controller. That notification is the single
//! teardown path; a controller never destroys itself on `hide()` alone.

/// Backdrop behavior requested when showing the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backdrop {
    /// Backdrop shown; clicking it does not close the modal.
    #[default]
    Static,
    /// Backdrop shown; clicking it closes the modal.
    Dynamic,
    /// No backdrop.
    None,
}

/// Options passed to [`HostWidget::show`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShowOptions {
    /// Requested backdrop behavior.
    pub backdrop: Backdrop,
}

impl ShowOptions {
    /// Show options with the given backdrop behavior.
    pub fn new(backdrop: Backdrop) -> Self {
        Self { backdrop }
    }
}

/// Notification delivered by the host back to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// The hide transition finished; the modal is no longer presented.
    Closed,
}

/// The open/close primitives a visual modal widget must provide.
///
/// Implementations are free to animate, defer, or coalesce; the controller
/// assumes only that `show` eventually presents the modal and that a
/// finished hide is reported as [`HostEvent::Closed`].
pub trait HostWidget {
    /// Present the modal with the requested backdrop.
    fn show(&mut self, options: ShowOptions);

    /// Begin hiding the modal. Must eventually be followed by the host
    /// delivering [`HostEvent::Closed`] to the controller.
    fn hide(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingHost {
        shown_with: Vec<Backdrop>,
        hides: usize,
    }

    impl HostWidget for RecordingHost {
        fn show(&mut self, options: ShowOptions) {
            self.shown_with.push(options.backdrop);
        }

        fn hide(&mut self) {
            self.hides += 1;
        }
    }

    #[test]
    fn default_backdrop_is_static() {
        assert_eq!(ShowOptions::default().backdrop, Backdrop::Static);
    }

    #[test]
    fn host_receives_requested_backdrop() {
        let mut host = RecordingHost::default();
        host.show(ShowOptions::new(Backdrop::Dynamic));
        host.hide();
        assert_eq!(host.shown_with, vec![Backdrop::Dynamic]);
        assert_eq!(host.hides, 1);
    }

    #[test]
    fn trait_object_usable_behind_dyn() {
        let mut host: Box<dyn HostWidget> = Box::new(RecordingHost::default());
        host.show(ShowOptions::default());
        host.hide();
    }
}
