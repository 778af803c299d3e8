//! navshell-web - accessible site header with a collapsible navigation
//! overlay, built with Leptos
//!
//! The interesting part is [`OverlayController`]: while the overlay is
//! open it owns the document's background state (scroll lock, aria-hidden
//! and inert markings on every sibling of the shell), traps keyboard focus
//! inside the panel and restores everything exactly on close. The
//! components in [`components`] are thin markup around it.

pub mod app;
pub mod components;
pub mod dom;
pub mod overlay;
pub mod pages;

pub use app::App;
pub use components::{NavOverlay, NavShell, SiteHeader};
pub use overlay::OverlayController;
