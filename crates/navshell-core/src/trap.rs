//! Focus-trap key decisions
//!
//! Pure decision logic for the window-level key interceptor. The caller
//! supplies a freshly scanned focusable set on every event (overlay content
//! can change while open, so positions are never cached) and applies the
//! returned action to the DOM.
//!
//! The trap only polices the two boundary cases: Tab on the last element
//! and Shift+Tab on the first. Between the boundaries the host's native tab
//! order already stays inside the panel, so those events pass through.

/// Key events the trap cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrapKey {
    /// Tab or Shift+Tab.
    Tab { shift: bool },
    /// Escape dismisses the overlay.
    Escape,
    /// Anything else is left to native handling.
    Other,
}

impl TrapKey {
    /// Map a DOM `KeyboardEvent.key` value plus shift state.
    pub fn from_key(key: &str, shift: bool) -> Self {
        match key {
            "Tab" => TrapKey::Tab { shift },
            "Escape" => TrapKey::Escape,
            _ => TrapKey::Other,
        }
    }
}

/// What the interceptor must do with one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrapAction {
    /// Close the overlay and move focus back to the trigger control.
    Close,
    /// Prevent the default move and focus the first focusable element.
    WrapToFirst,
    /// Prevent the default move and focus the last focusable element.
    WrapToLast,
    /// Prevent the default move without refocusing (nothing to land on).
    Block,
    /// Leave the event to the host's native tab order.
    PassThrough,
}

/// Decide the trap action for `key`.
///
/// `active` is the index of the currently focused element within the
/// focusable set, if focus is on one of its members; `len` is the set size.
pub fn decide(key: TrapKey, active: Option<usize>, len: usize) -> TrapAction {
    match key {
        TrapKey::Escape => TrapAction::Close,
        // Nothing to cycle through: swallow Tab entirely so focus cannot
        // escape into the (inert) background.
        TrapKey::Tab { .. } if len == 0 => TrapAction::Block,
        TrapKey::Tab { shift: false } if active == Some(len - 1) => TrapAction::WrapToFirst,
        TrapKey::Tab { shift: true } if active == Some(0) => TrapAction::WrapToLast,
        TrapKey::Tab { .. } => TrapAction::PassThrough,
        TrapKey::Other => TrapAction::PassThrough,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAB: TrapKey = TrapKey::Tab { shift: false };
    const SHIFT_TAB: TrapKey = TrapKey::Tab { shift: true };

    /// Model of what the browser plus the trap do to the focus index.
    fn press_tab(active: usize, len: usize) -> usize {
        match decide(TAB, Some(active), len) {
            TrapAction::WrapToFirst => 0,
            // Native forward tab within the panel.
            TrapAction::PassThrough => active + 1,
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn key_mapping() {
        assert_eq!(TrapKey::from_key("Tab", false), TAB);
        assert_eq!(TrapKey::from_key("Tab", true), SHIFT_TAB);
        assert_eq!(TrapKey::from_key("Escape", false), TrapKey::Escape);
        assert_eq!(TrapKey::from_key("Enter", false), TrapKey::Other);
        assert_eq!(TrapKey::from_key("a", true), TrapKey::Other);
    }

    #[test]
    fn tab_wraps_from_last_to_first() {
        assert_eq!(decide(TAB, Some(3), 4), TrapAction::WrapToFirst);
    }

    #[test]
    fn shift_tab_wraps_from_first_to_last() {
        assert_eq!(decide(SHIFT_TAB, Some(0), 4), TrapAction::WrapToLast);
    }

    #[test]
    fn interior_positions_pass_through() {
        assert_eq!(decide(TAB, Some(1), 4), TrapAction::PassThrough);
        assert_eq!(decide(SHIFT_TAB, Some(2), 4), TrapAction::PassThrough);
    }

    #[test]
    fn focus_outside_the_set_passes_through() {
        assert_eq!(decide(TAB, None, 4), TrapAction::PassThrough);
        assert_eq!(decide(SHIFT_TAB, None, 4), TrapAction::PassThrough);
    }

    #[test]
    fn empty_set_blocks_tab_in_both_directions() {
        assert_eq!(decide(TAB, None, 0), TrapAction::Block);
        assert_eq!(decide(SHIFT_TAB, None, 0), TrapAction::Block);
    }

    #[test]
    fn escape_closes_from_any_position() {
        for active in [Some(0), Some(2), Some(3), None] {
            assert_eq!(decide(TrapKey::Escape, active, 4), TrapAction::Close);
        }
        assert_eq!(decide(TrapKey::Escape, None, 0), TrapAction::Close);
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(decide(TrapKey::Other, Some(0), 4), TrapAction::PassThrough);
        assert_eq!(decide(TrapKey::Other, None, 0), TrapAction::PassThrough);
    }

    #[test]
    fn tab_cycle_has_length_k() {
        // Pressing Tab k times from the first element lands back on the
        // first element, for any set size.
        for len in 1..6 {
            let mut active = 0;
            for _ in 0..len {
                active = press_tab(active, len);
            }
            assert_eq!(active, 0, "cycle of length {len} did not close");
        }
    }

    #[test]
    fn single_element_wraps_onto_itself() {
        assert_eq!(decide(TAB, Some(0), 1), TrapAction::WrapToFirst);
        assert_eq!(decide(SHIFT_TAB, Some(0), 1), TrapAction::WrapToLast);
    }

    #[test]
    fn three_links_and_a_button() {
        // Scenario: 3 links and 1 button, focus starts on link 1.
        let len = 4;
        // Tab from the button (position 4) wraps to link 1.
        assert_eq!(decide(TAB, Some(3), len), TrapAction::WrapToFirst);
        // Shift+Tab from link 1 wraps to the button.
        assert_eq!(decide(SHIFT_TAB, Some(0), len), TrapAction::WrapToLast);
        // Everything in between is native.
        assert_eq!(decide(TAB, Some(0), len), TrapAction::PassThrough);
    }
}
