//! Demo App component with SPA router

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use navshell_core::MenuEntry;

use crate::components::NavShell;
use crate::pages::{Docs, Home, Pricing};

/// Demo App: the shell plus a handful of routed pages.
///
/// The shell and the main content are siblings directly under `<body>`, so
/// the overlay controller has real background subtrees to hide while open.
#[component]
pub fn App() -> impl IntoView {
    let entries = vec![
        MenuEntry::new("Home", "/"),
        MenuEntry::new("Docs", "/docs"),
        MenuEntry::new("Pricing", "/pricing"),
    ];

    view! {
        <Router>
            <NavShell entries=entries brand="navshell" />
            <main class="content">
                <Routes fallback=|| "Not found">
                    <Route path=path!("/") view=Home />
                    <Route path=path!("/docs") view=Docs />
                    <Route path=path!("/pricing") view=Pricing />
                </Routes>
            </main>
        </Router>
    }
}
