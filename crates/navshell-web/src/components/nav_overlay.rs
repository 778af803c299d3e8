//! Navigation overlay panel with backdrop

use leptos::prelude::*;
use leptos_router::components::A;

use navshell_core::MenuEntry;

use crate::overlay::OverlayController;

/// DOM id of the overlay panel, referenced by the trigger's
/// `aria-controls`.
pub(crate) const PANEL_ID: &str = "navshell-panel";

/// Overlay panel: a modal dialog holding the navigation menu, plus the
/// full-viewport dismiss region beneath it.
///
/// The panel stays mounted and slides in via a class toggle, so the
/// focusable scanner always has a laid-out subtree to work with. Link
/// activation defers its close to the next scheduling turn - the router
/// navigates first, then focus returns to the trigger over the new view.
#[component]
pub fn NavOverlay(
    controller: OverlayController,
    /// Menu destinations, in render order.
    entries: Vec<MenuEntry>,
) -> impl IntoView {
    let open = controller.open_signal();

    view! {
        // Dismiss region: above page content, beneath the panel.
        <Show when=move || open.get()>
            <div class="nav-backdrop" on:click=move |_| controller.close()></div>
        </Show>

        <div
            id=PANEL_ID
            class="nav-overlay"
            class:nav-overlay-open=move || open.get()
            node_ref=controller.panel_ref()
            role="dialog"
            aria-modal="true"
            aria-label="Site navigation"
        >
            <button
                class="nav-close"
                on:click=move |_| controller.close()
                aria-label="Close navigation"
            >
                "✕"
            </button>

            <nav class="nav">
                <ul class="nav-list">
                    {entries
                        .into_iter()
                        .map(|entry| {
                            view! {
                                <li class="nav-item">
                                    <A
                                        href=entry.href
                                        attr:class="nav-link"
                                        on:click=move |_| controller.close_after_navigation()
                                    >
                                        {entry.label}
                                    </A>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </div>
    }
}
