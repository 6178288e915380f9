//! Dioxus front-end for the registration form.
//!
//! The components only render [`FormView`](nwatch::features::registration::FormView)
//! snapshots and forward events to the controller; all form logic lives in
//! `nwatch-registration`.

pub mod components;

pub use crate::components::App;

#[cfg(feature = "desktop")]
mod launcher;
#[cfg(feature = "desktop")]
pub use crate::launcher::DesktopApp;
