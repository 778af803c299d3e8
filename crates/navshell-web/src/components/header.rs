//! Site header bar with the overlay trigger

use leptos::prelude::*;

use crate::components::nav_overlay::PANEL_ID;
use crate::overlay::OverlayController;

/// Header bar: hamburger trigger for the navigation overlay, plus brand
/// text. The trigger exposes its open/closed state through `aria-expanded`.
#[component]
pub fn SiteHeader(
    controller: OverlayController,
    /// Brand label shown next to the trigger.
    #[prop(into)]
    brand: String,
) -> impl IntoView {
    let open = controller.open_signal();

    view! {
        <button
            class="nav-toggle"
            class:nav-toggle-active=move || open.get()
            node_ref=controller.trigger_ref()
            on:click=move |_| controller.toggle()
            aria-label="Toggle navigation"
            aria-controls=PANEL_ID
            aria-expanded=move || open.get().to_string()
        >
            <span class="nav-toggle-icon">"☰"</span>
        </button>

        <div class="brand">
            <span class="brand-name">{brand}</span>
        </div>
    }
}
