#![forbid(unsafe_code)]

//! Declarative button definitions.

use core::fmt;
use std::rc::Rc;

/// A button in a modal footer.
///
/// Only `text` is required. Every other field has a default chosen so that
/// the common case, a button that just dismisses the modal, needs no
/// configuration at all.
#[derive(Clone)]
pub struct ButtonSpec {
    /// Display label.
    pub text: String,
    /// Explicit dispatch id. When absent the button is addressed by its
    /// positional key (`btn-<index>`).
    pub id: Option<String>,
    /// Optional click callback. A button may omit it and be observed purely
    /// through the controller's emitted signals.
    pub click: Option<Rc<dyn Fn()>>,
    /// Presentation class. The `btn` class is always applied; when this is
    /// absent the button falls back to `btn-primary`.
    pub css_class: Option<String>,
    /// Whether clicking this button also requests a close. Defaults to true:
    /// most buttons make the modal go away.
    pub is_close_button: bool,
    /// Whether clicking this button emits the `Submit` signal.
    pub is_submit_button: bool,
    /// Label shown while the loading indicator is active. Buttons without
    /// loading text are only disabled during loading.
    pub loading_indicator_text: Option<String>,
    /// Render as a link-styled button.
    pub render_as_link: bool,
}

impl ButtonSpec {
    /// Create a button with the given label and default behavior.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            id: None,
            click: None,
            css_class: None,
            is_close_button: true,
            is_submit_button: false,
            loading_indicator_text: None,
            render_as_link: false,
        }
    }

    /// Set an explicit dispatch id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the click callback.
    pub fn on_click(mut self, callback: impl Fn() + 'static) -> Self {
        self.click = Some(Rc::new(callback));
        self
    }

    /// Set the presentation class applied alongside `btn`.
    pub fn css_class(mut self, class: impl Into<String>) -> Self {
        self.css_class = Some(class.into());
        self
    }

    /// Mark as a submit button.
    pub fn submit(mut self) -> Self {
        self.is_submit_button = true;
        self
    }

    /// Keep the modal open when this button is clicked.
    pub fn keep_open(mut self) -> Self {
        self.is_close_button = false;
        self
    }

    /// Set the label shown while loading is active.
    pub fn loading_text(mut self, text: impl Into<String>) -> Self {
        self.loading_indicator_text = Some(text.into());
        self
    }

    /// Render as a link-styled button.
    pub fn as_link(mut self) -> Self {
        self.render_as_link = true;
        self
    }

    /// The full presentation class for the rendered element.
    ///
    /// Link buttons get the fixed `btn btn-as-link` class; regular buttons
    /// get `btn` plus their configured class or `btn-primary`.
    #[must_use]
    pub fn effective_class(&self) -> String {
        if self.render_as_link {
            "btn btn-as-link".to_string()
        } else {
            match &self.css_class {
                Some(class) => format!("btn {class}"),
                None => "btn btn-primary".to_string(),
            }
        }
    }
}

impl fmt::Debug for ButtonSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonSpec")
            .field("text", &self.text)
            .field("id", &self.id)
            .field("click", &self.click.as_ref().map(|_| "Fn"))
            .field("css_class", &self.css_class)
            .field("is_close_button", &self.is_close_button)
            .field("is_submit_button", &self.is_submit_button)
            .field("loading_indicator_text", &self.loading_indicator_text)
            .field("render_as_link", &self.render_as_link)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn defaults_close_and_do_not_submit() {
        let button = ButtonSpec::new("OK");
        assert_eq!(button.text, "OK");
        assert!(button.is_close_button);
        assert!(!button.is_submit_button);
        assert!(!button.render_as_link);
        assert!(button.id.is_none());
        assert!(button.click.is_none());
        assert!(button.loading_indicator_text.is_none());
    }

    #[test]
    fn builder_chain_sets_every_field() {
        let button = ButtonSpec::new("Save")
            .id("save-btn")
            .css_class("btn-danger")
            .submit()
            .keep_open()
            .loading_text("Saving...")
            .as_link();

        assert_eq!(button.id.as_deref(), Some("save-btn"));
        assert!(button.is_submit_button);
        assert!(!button.is_close_button);
        assert_eq!(button.loading_indicator_text.as_deref(), Some("Saving..."));
        assert!(button.render_as_link);
    }

    #[test]
    fn callback_is_invocable_through_the_spec() {
        let fired = Rc::new(Cell::new(false));
        let button = {
            let fired = Rc::clone(&fired);
            ButtonSpec::new("Go").on_click(move || fired.set(true))
        };

        if let Some(click) = &button.click {
            click();
        }
        assert!(fired.get());
    }

    #[test]
    fn effective_class_defaults_to_primary() {
        assert_eq!(ButtonSpec::new("OK").effective_class(), "btn btn-primary");
    }

    #[test]
    fn effective_class_uses_configured_class() {
        let button = ButtonSpec::new("Delete").css_class("btn-danger");
        assert_eq!(button.effective_class(), "btn btn-danger");
    }

    #[test]
    fn link_class_overrides_configured_class() {
        let button = ButtonSpec::new("More").css_class("btn-danger").as_link();
        assert_eq!(button.effective_class(), "btn btn-as-link");
    }
}
