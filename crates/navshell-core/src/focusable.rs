//! Focusable-element predicate
//!
//! The scanner in `navshell-web` collects per-element facts from the DOM;
//! the predicate here decides keyboard reachability. Kept free of `web-sys`
//! so the rules stay testable natively.

/// Query selector for elements that may take keyboard focus inside the
/// overlay panel. Deliberately broad; [`is_focusable`] is authoritative.
pub const FOCUSABLE_SELECTOR: &str = "a[href], button, input, select, textarea, [tabindex]";

/// Element kind, as far as focusability cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    /// `<a>` - focusable only when it carries a destination.
    Anchor { has_href: bool },
    /// Form control (`button`, `input`, `select`, `textarea`).
    FormControl,
    /// Any other element; reachable only via an explicit tab-order marker.
    Other,
}

/// Facts about one candidate element, gathered by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusCandidate {
    pub kind: CandidateKind,
    /// `disabled` attribute present.
    pub disabled: bool,
    /// Parsed `tabindex` attribute, if present.
    pub tab_index: Option<i32>,
    /// Whether the element currently has a rendered layout box.
    pub has_layout_box: bool,
}

/// Whether a candidate is keyboard-reachable.
///
/// An element with no layout box is not independently focusable, except
/// when it explicitly declares a non-negative tab order, in which case it
/// is trusted to be reachable.
pub fn is_focusable(candidate: &FocusCandidate) -> bool {
    if candidate.disabled {
        return false;
    }
    if matches!(candidate.tab_index, Some(t) if t < 0) {
        return false;
    }
    let reachable = match candidate.kind {
        CandidateKind::Anchor { has_href } => has_href,
        CandidateKind::FormControl => true,
        CandidateKind::Other => candidate.tab_index.is_some(),
    };
    reachable && (candidate.has_layout_box || candidate.tab_index.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(kind: CandidateKind) -> FocusCandidate {
        FocusCandidate {
            kind,
            disabled: false,
            tab_index: None,
            has_layout_box: true,
        }
    }

    #[test]
    fn link_with_destination_is_focusable() {
        assert!(is_focusable(&rendered(CandidateKind::Anchor {
            has_href: true
        })));
    }

    #[test]
    fn link_without_destination_is_not() {
        assert!(!is_focusable(&rendered(CandidateKind::Anchor {
            has_href: false
        })));
    }

    #[test]
    fn enabled_form_controls_are_focusable() {
        assert!(is_focusable(&rendered(CandidateKind::FormControl)));
    }

    #[test]
    fn disabled_controls_are_excluded() {
        let candidate = FocusCandidate {
            disabled: true,
            ..rendered(CandidateKind::FormControl)
        };
        assert!(!is_focusable(&candidate));
    }

    #[test]
    fn negative_tabindex_is_excluded() {
        let candidate = FocusCandidate {
            tab_index: Some(-1),
            ..rendered(CandidateKind::Anchor { has_href: true })
        };
        assert!(!is_focusable(&candidate));
    }

    #[test]
    fn plain_element_needs_an_explicit_tab_order() {
        assert!(!is_focusable(&rendered(CandidateKind::Other)));
        let candidate = FocusCandidate {
            tab_index: Some(0),
            ..rendered(CandidateKind::Other)
        };
        assert!(is_focusable(&candidate));
    }

    #[test]
    fn collapsed_elements_are_excluded() {
        let candidate = FocusCandidate {
            has_layout_box: false,
            ..rendered(CandidateKind::Anchor { has_href: true })
        };
        assert!(!is_focusable(&candidate));
    }

    #[test]
    fn explicit_tab_order_is_trusted_without_a_layout_box() {
        let candidate = FocusCandidate {
            has_layout_box: false,
            tab_index: Some(0),
            ..rendered(CandidateKind::Other)
        };
        assert!(is_focusable(&candidate));
    }
}
