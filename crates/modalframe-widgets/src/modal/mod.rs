#![forbid(unsafe_code)]

//! Modal-dialog controller: declarative buttons, body-content injection,
//! lifecycle, and signal dispatch.
//!
//! The controller standardizes the boilerplate around a dialog box: it holds
//! an ordered list of [`ButtonSpec`]s and a [`BodyContent`], renders them
//! into an owned [`ModalSurface`] the host presents, routes interactions back
//! to the right button definition, and funnels every close, whatever
//! triggered it, through a single teardown path.
//!
//! # Example
//!
//! ```ignore
//! use modalframe_widgets::{ButtonSpec, ModalConfig, ModalController};
//!
//! let config = ModalConfig::default()
//!     .title("Delete file?")
//!     .button(ButtonSpec::new("Cancel"))
//!     .button(ButtonSpec::new("Delete").submit().keep_open());
//!
//! let mut modal = ModalController::new(config, host);
//! let _on_submit = modal.on_submit(|| println!("deleting"));
//! modal.render()?.open()?;
//! ```

mod button;
mod content;
mod controller;
mod surface;

pub use button::ButtonSpec;
pub use content::{BodyContent, ContentFactory, EmbeddedContent, ModalLink};
pub use controller::{ModalConfig, ModalController};
pub use surface::{ButtonFlags, ModalSurface, RenderedButton};
