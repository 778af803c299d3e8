//! Background snapshot for one overlay episode
//!
//! Captured at the instant the overlay opens, consumed exactly once when it
//! closes. Restore writes back the recorded pre-open values verbatim, so a
//! sibling that was already `aria-hidden` before the overlay opened keeps
//! that marking afterwards and repeated episodes never accumulate markers.

use wasm_bindgen::JsValue;
use web_sys::Element;

/// Pre-open accessibility markings of one background sibling.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SiblingMarks {
    /// `aria-hidden` value before the overlay opened, if any.
    aria_hidden: Option<String>,
    /// Whether the `inert` flag was already set before the overlay opened.
    inert: bool,
}

struct MarkedSibling {
    element: Element,
    prior: SiblingMarks,
}

/// Document state owned by the controller while the overlay is open.
pub struct BackgroundSnapshot {
    siblings: Vec<MarkedSibling>,
    /// Body `overflow` style value before the scroll lock was applied.
    body_overflow: String,
    inert_supported: bool,
}

impl BackgroundSnapshot {
    /// Lock background scrolling and hide every direct child of the
    /// document body except the one containing `shell_root` from assistive
    /// technology, recording each prior value first.
    ///
    /// The `inert` marking is best effort: hosts without it keep only the
    /// `aria-hidden` protection, reported via [`inert_supported`].
    ///
    /// [`inert_supported`]: BackgroundSnapshot::inert_supported
    pub fn capture(shell_root: &Element) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let body = document.body()?;

        let body_overflow = body
            .style()
            .get_property_value("overflow")
            .unwrap_or_default();
        let _ = body.style().set_property("overflow", "hidden");

        let mut inert_supported = true;
        let mut siblings = Vec::new();
        let children = body.children();
        for idx in 0..children.length() {
            let Some(child) = children.item(idx) else {
                continue;
            };
            if child.contains(Some(shell_root.as_ref())) {
                continue;
            }

            let prior = SiblingMarks {
                aria_hidden: child.get_attribute("aria-hidden"),
                inert: inert_flag(&child),
            };
            let _ = child.set_attribute("aria-hidden", "true");
            if !set_inert_flag(&child, true) {
                inert_supported = false;
            }
            siblings.push(MarkedSibling {
                element: child,
                prior,
            });
        }

        Some(Self {
            siblings,
            body_overflow,
            inert_supported,
        })
    }

    /// Whether the host honoured the `inert` marking for every sibling.
    pub fn inert_supported(&self) -> bool {
        self.inert_supported
    }

    /// Put every marking and the scroll style back to its pre-open value.
    /// Consumes the snapshot: one capture, one restore, per episode.
    pub fn restore(self) {
        for marked in &self.siblings {
            match &marked.prior.aria_hidden {
                Some(value) => {
                    let _ = marked.element.set_attribute("aria-hidden", value);
                }
                None => {
                    let _ = marked.element.remove_attribute("aria-hidden");
                }
            }
            set_inert_flag(&marked.element, marked.prior.inert);
        }

        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            if self.body_overflow.is_empty() {
                let _ = body.style().remove_property("overflow");
            } else {
                let _ = body.style().set_property("overflow", &self.body_overflow);
            }
        }
    }
}

fn inert_flag(el: &Element) -> bool {
    js_sys::Reflect::get(el, &JsValue::from_str("inert"))
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

/// Set the `inert` property if the host supports it. Returns `false` when
/// the marking is unsupported, which the caller treats as non-fatal.
fn set_inert_flag(el: &Element, value: bool) -> bool {
    let key = JsValue::from_str("inert");
    if !js_sys::Reflect::has(el, &key).unwrap_or(false) {
        return false;
    }
    js_sys::Reflect::set(el, &key, &JsValue::from_bool(value)).unwrap_or(false)
}
