//! Dispatch-key properties: one key per button, uniqueness, and stability
//! across re-render.

use proptest::prelude::*;
use std::collections::HashSet;

use modalframe_core::{DispatchKey, HostWidget, ShowOptions};
use modalframe_widgets::{ButtonSpec, ModalConfig, ModalController};

struct NullHost;

impl HostWidget for NullHost {
    fn show(&mut self, _options: ShowOptions) {}
    fn hide(&mut self) {}
}

fn build_controller(specs: &[(bool, String)]) -> ModalController {
    let buttons: Vec<ButtonSpec> = specs
        .iter()
        .enumerate()
        .map(|(index, (has_id, label))| {
            let button = ButtonSpec::new(label.clone());
            if *has_id {
                // Ids unique by construction; the duplicate-id edge case is
                // covered separately below.
                button.id(format!("id-{index}"))
            } else {
                button
            }
        })
        .collect();
    ModalController::new(ModalConfig::default().buttons(buttons), NullHost)
}

proptest! {
    #[test]
    fn one_unique_stable_key_per_button(
        specs in prop::collection::vec((any::<bool>(), "[A-Za-z]{1,12}"), 0..12)
    ) {
        let mut modal = build_controller(&specs);
        modal.render().expect("render");

        let first: Vec<DispatchKey> = modal
            .surface()
            .buttons
            .iter()
            .map(|button| button.key.clone())
            .collect();
        prop_assert_eq!(first.len(), specs.len());

        let mut seen = HashSet::new();
        for key in &first {
            prop_assert!(seen.insert(key.clone()), "duplicate key {key}");
        }

        modal.render().expect("re-render");
        let second: Vec<DispatchKey> = modal
            .surface()
            .buttons
            .iter()
            .map(|button| button.key.clone())
            .collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn idless_buttons_get_their_positional_key(
        labels in prop::collection::vec("[A-Za-z]{1,12}", 1..8)
    ) {
        let specs: Vec<(bool, String)> = labels.into_iter().map(|l| (false, l)).collect();
        let mut modal = build_controller(&specs);
        modal.render().expect("render");

        for (index, button) in modal.surface().buttons.iter().enumerate() {
            prop_assert_eq!(&button.key, &DispatchKey::Ordinal(index));
            prop_assert_eq!(button.key.to_string(), format!("btn-{index}"));
        }
    }
}

#[test]
fn duplicate_ids_render_one_key_per_button() {
    // Keys need not be unique when the caller supplies colliding ids; there
    // is still exactly one rendered key per button, in order.
    let specs = vec![(true, "A".to_string()), (true, "A".to_string())];
    let buttons: Vec<ButtonSpec> = specs
        .iter()
        .map(|(_, label)| ButtonSpec::new(label.clone()).id("dup"))
        .collect();
    let mut modal = ModalController::new(ModalConfig::default().buttons(buttons), NullHost);
    modal.render().expect("render");

    let keys: Vec<DispatchKey> = modal
        .surface()
        .buttons
        .iter()
        .map(|button| button.key.clone())
        .collect();
    assert_eq!(
        keys,
        vec![DispatchKey::explicit("dup"), DispatchKey::explicit("dup")]
    );
}
