//! End-to-end controller scenarios: dispatch ordering, close convergence,
//! and teardown through the host's closed notification.

use std::cell::RefCell;
use std::rc::Rc;

use modalframe_core::{
    Backdrop, DispatchKey, HostEvent, HostWidget, InteractionEvent, Lifecycle, ModalSignal,
    ShowOptions,
};
use modalframe_widgets::{
    BodyContent, ButtonSpec, EmbeddedContent, ModalConfig, ModalController, ModalLink,
};

/// Host stand-in: records calls and remembers whether a hide is pending, the
/// way a widget with an exit transition would.
#[derive(Clone, Default)]
struct TransitionHost {
    calls: Rc<RefCell<Vec<String>>>,
    hide_pending: Rc<RefCell<bool>>,
}

impl TransitionHost {
    fn finish_hide(&self, modal: &mut ModalController) {
        if *self.hide_pending.borrow() {
            *self.hide_pending.borrow_mut() = false;
            modal.handle_host_event(HostEvent::Closed);
        }
    }
}

impl HostWidget for TransitionHost {
    fn show(&mut self, options: ShowOptions) {
        self.calls
            .borrow_mut()
            .push(format!("show:{:?}", options.backdrop));
    }

    fn hide(&mut self) {
        self.calls.borrow_mut().push("hide".to_string());
        *self.hide_pending.borrow_mut() = true;
    }
}

fn cancel_save_config() -> ModalConfig {
    ModalConfig::default()
        .title("Save changes?")
        .button(ButtonSpec::new("Cancel"))
        .button(ButtonSpec::new("Save").submit().keep_open())
}

#[test]
fn cancel_closes_without_submit() {
    let host = TransitionHost::default();
    let mut modal = ModalController::new(cancel_save_config(), host.clone());

    let signals = Rc::new(RefCell::new(Vec::new()));
    let _sub = {
        let signals = Rc::clone(&signals);
        modal
            .signals()
            .subscribe(move |signal| signals.borrow_mut().push(signal.clone()))
    };

    modal
        .render()
        .and_then(ModalController::open)
        .expect("render + open");

    let mut click = InteractionEvent::new(DispatchKey::Ordinal(0));
    modal.handle_interaction(&mut click).expect("cancel click");

    assert_eq!(
        *signals.borrow(),
        vec![ModalSignal::Click(DispatchKey::Ordinal(0))],
        "cancel must not emit submit"
    );
    assert_eq!(modal.lifecycle(), Lifecycle::Closing);

    host.finish_hide(&mut modal);
    assert_eq!(modal.lifecycle(), Lifecycle::Destroyed);
}

#[test]
fn save_submits_and_stays_open() {
    let host = TransitionHost::default();
    let mut modal = ModalController::new(cancel_save_config(), host.clone());

    let signals = Rc::new(RefCell::new(Vec::new()));
    let _sub = {
        let signals = Rc::clone(&signals);
        modal
            .signals()
            .subscribe(move |signal| signals.borrow_mut().push(signal.clone()))
    };

    modal
        .render()
        .and_then(ModalController::open)
        .expect("render + open");

    let mut click = InteractionEvent::new(DispatchKey::Ordinal(1));
    modal.handle_interaction(&mut click).expect("save click");

    assert_eq!(
        *signals.borrow(),
        vec![
            ModalSignal::Submit,
            ModalSignal::Click(DispatchKey::Ordinal(1)),
        ]
    );
    assert!(modal.is_open(), "save is not a close button");
    assert!(!*host.hide_pending.borrow());
}

#[test]
fn every_close_trigger_converges_on_one_teardown() {
    // Programmatic close followed by the host notification: teardown happens
    // once, when the notification lands.
    let host = TransitionHost::default();
    let mut modal = ModalController::new(ModalConfig::default(), host.clone());
    modal
        .render()
        .and_then(ModalController::open)
        .expect("render + open");

    modal.close().expect("close");
    assert_eq!(modal.lifecycle(), Lifecycle::Closing);

    host.finish_hide(&mut modal);
    assert_eq!(modal.lifecycle(), Lifecycle::Destroyed);

    // A duplicate notification is harmless.
    modal.handle_host_event(HostEvent::Closed);
    assert_eq!(modal.lifecycle(), Lifecycle::Destroyed);
}

#[test]
fn escape_style_close_skips_the_closing_state() {
    // A host may hide itself (escape key, backdrop click) without the
    // controller ever seeing close(); the notification alone must tear down.
    let host = TransitionHost::default();
    let mut modal = ModalController::new(ModalConfig::default(), host);
    modal
        .render()
        .and_then(ModalController::open)
        .expect("render + open");

    modal.handle_host_event(HostEvent::Closed);
    assert_eq!(modal.lifecycle(), Lifecycle::Destroyed);
}

#[test]
fn open_uses_the_configured_backdrop() {
    let host = TransitionHost::default();
    let calls = Rc::clone(&host.calls);
    let mut modal = ModalController::new(
        ModalConfig::default().backdrop(Backdrop::None),
        host,
    );
    modal
        .render()
        .and_then(ModalController::open)
        .expect("render + open");
    assert_eq!(*calls.borrow(), vec!["show:None".to_string()]);
}

struct NestedForm {
    owner: Option<ModalLink>,
    teardowns: Rc<RefCell<Vec<&'static str>>>,
}

impl EmbeddedContent for NestedForm {
    fn attach(&mut self, owner: ModalLink) {
        self.owner = Some(owner);
    }

    fn render_body(&mut self) -> String {
        "<form id=\"nested\"></form>".to_string()
    }

    fn detach_bindings(&mut self) {
        self.teardowns.borrow_mut().push("detach");
    }

    fn release_presentation(&mut self) {
        self.teardowns.borrow_mut().push("release");
    }
}

#[test]
fn nested_content_is_torn_down_once_and_in_order() {
    let teardowns = Rc::new(RefCell::new(Vec::new()));
    let host = TransitionHost::default();
    let config = ModalConfig::default().body(BodyContent::component(NestedForm {
        owner: None,
        teardowns: Rc::clone(&teardowns),
    }));
    let mut modal = ModalController::new(config, host.clone());

    modal
        .render()
        .and_then(ModalController::open)
        .expect("render + open");
    assert_eq!(modal.surface().body, "<form id=\"nested\"></form>");

    // Explicit close, then the (late) host notification.
    modal.close().expect("close");
    host.finish_hide(&mut modal);
    modal.handle_host_event(HostEvent::Closed);

    assert_eq!(*teardowns.borrow(), vec!["detach", "release"]);
}
