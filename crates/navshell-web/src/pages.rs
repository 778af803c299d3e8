//! Demo pages behind the navigation entries

use leptos::prelude::*;

/// Landing page.
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <section class="page">
            <h2>"Home"</h2>
            <p>
                "Use the menu button to open the navigation overlay. While it "
                "is open, background content is hidden from assistive "
                "technology, scrolling is locked and keyboard focus stays "
                "inside the panel."
            </p>
        </section>
    }
}

/// Docs page.
#[component]
pub fn Docs() -> impl IntoView {
    view! {
        <section class="page">
            <h2>"Docs"</h2>
            <p>
                "Activating a menu entry navigates here, closes the overlay "
                "and returns focus to the menu button."
            </p>
        </section>
    }
}

/// Pricing page.
#[component]
pub fn Pricing() -> impl IntoView {
    view! {
        <section class="page">
            <h2>"Pricing"</h2>
            <p>"Free, as in focus."</p>
        </section>
    }
}
