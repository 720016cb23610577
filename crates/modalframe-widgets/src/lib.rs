#![forbid(unsafe_code)]

//! Modal-dialog controller widgets for modalframe.

pub mod modal;

pub use modal::{
    BodyContent, ButtonFlags, ButtonSpec, EmbeddedContent, ModalConfig, ModalController,
    ModalLink, ModalSurface, RenderedButton,
};
