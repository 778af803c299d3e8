//! Shell composition: header bar, overlay and controller wiring

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use navshell_core::MenuEntry;

use crate::components::{NavOverlay, SiteHeader};
use crate::overlay::OverlayController;

/// The site header fixture: brand, hamburger trigger and the collapsible
/// navigation overlay, wired to one [`OverlayController`].
///
/// Render as a direct child of `<body>` so the controller can mark every
/// other body-level subtree as hidden from assistive technology while the
/// overlay is open.
#[component]
pub fn NavShell(
    /// Menu destinations shown inside the overlay.
    entries: Vec<MenuEntry>,
    /// Brand label in the header bar.
    #[prop(into, default = String::from("navshell"))]
    brand: String,
) -> impl IntoView {
    let controller = OverlayController::new();

    // Any route change forces the overlay closed: a navigation event means
    // the destination was reached.
    let location = use_location();
    Effect::new(move |_| {
        location.pathname.track();
        controller.on_route_change();
    });

    // Unmounting while open tears down like any other dismissal.
    on_cleanup(move || controller.close());

    view! {
        <header class="site-header" node_ref=controller.root_ref()>
            <SiteHeader controller=controller brand=brand />
            <NavOverlay controller=controller entries=entries />
        </header>
    }
}
