//! Focusable scanner
//!
//! Computes the ordered list of keyboard-reachable elements inside a
//! container at the moment it is needed. Never cached: overlay content can
//! be conditionally rendered while the overlay is open, so every trap
//! decision re-scans.

use navshell_core::focusable::{is_focusable, CandidateKind, FocusCandidate, FOCUSABLE_SELECTOR};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// Collect the focusable elements inside `container`, in document order.
pub fn scan_focusables(container: &Element) -> Vec<HtmlElement> {
    let Ok(nodes) = container.query_selector_all(FOCUSABLE_SELECTOR) else {
        return Vec::new();
    };

    let mut focusables = Vec::new();
    for idx in 0..nodes.length() {
        let Some(el) = nodes.get(idx).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        if is_focusable(&candidate_facts(&el)) {
            focusables.push(el);
        }
    }
    focusables
}

/// Index of the currently focused element within `focusables`, if focus is
/// on one of its members.
pub fn active_index(focusables: &[HtmlElement]) -> Option<usize> {
    let active = web_sys::window()?.document()?.active_element()?;
    focusables
        .iter()
        .position(|el| active.is_same_node(Some(el.as_ref())))
}

/// Move keyboard focus to `el`. A focus refusal is not actionable.
pub fn focus_element(el: &HtmlElement) {
    let _ = el.focus();
}

fn candidate_facts(el: &HtmlElement) -> FocusCandidate {
    let tag = el.tag_name().to_ascii_lowercase();
    let kind = match tag.as_str() {
        "a" => CandidateKind::Anchor {
            has_href: el.has_attribute("href"),
        },
        "button" | "input" | "select" | "textarea" => CandidateKind::FormControl,
        _ => CandidateKind::Other,
    };

    FocusCandidate {
        kind,
        disabled: el.has_attribute("disabled"),
        tab_index: el
            .get_attribute("tabindex")
            .and_then(|t| t.trim().parse().ok()),
        has_layout_box: el.get_client_rects().length() > 0,
    }
}
