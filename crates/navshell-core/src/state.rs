//! Overlay open/closed state

/// Open/closed state of the navigation overlay.
///
/// Owned exclusively by the overlay controller. Every transition goes
/// through [`try_open`](OverlayState::try_open) or
/// [`try_close`](OverlayState::try_close), which encode the preconditions:
/// opening an open overlay and closing a closed one are no-ops, never
/// errors. The controller keeps its open-only side effects (scroll lock,
/// background hiding, key trap) alive exactly while the state is `Open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    /// Overlay is dismissed; the document behaves normally.
    #[default]
    Closed,
    /// Overlay is showing and owns the document's background state.
    Open,
}

impl OverlayState {
    pub fn is_open(self) -> bool {
        matches!(self, OverlayState::Open)
    }

    /// Transition to `Open`. Returns `false` and leaves the state untouched
    /// if the overlay is already open.
    pub fn try_open(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        *self = OverlayState::Open;
        true
    }

    /// Transition to `Closed`. Returns `false` and leaves the state
    /// untouched if the overlay is already closed. Whichever dismissal path
    /// (escape, outside click, link activation, route change) transitions
    /// first wins; the rest observe `false` and skip their side effects.
    pub fn try_close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        *self = OverlayState::Closed;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(OverlayState::default(), OverlayState::Closed);
        assert!(!OverlayState::default().is_open());
    }

    #[test]
    fn open_close_cycle() {
        let mut state = OverlayState::Closed;
        assert!(state.try_open());
        assert!(state.is_open());
        assert!(state.try_close());
        assert!(!state.is_open());
    }

    #[test]
    fn double_open_is_noop() {
        let mut state = OverlayState::Closed;
        assert!(state.try_open());
        assert!(!state.try_open());
        assert!(state.is_open());
    }

    #[test]
    fn double_close_is_noop() {
        let mut state = OverlayState::Open;
        assert!(state.try_close());
        assert!(!state.try_close());
        assert_eq!(state, OverlayState::Closed);
    }

    #[test]
    fn repeated_episodes_return_to_baseline() {
        let mut state = OverlayState::Closed;
        for _ in 0..5 {
            assert!(state.try_open());
            assert!(state.try_close());
        }
        assert_eq!(state, OverlayState::Closed);
    }

    #[test]
    fn route_change_forces_closed_from_open() {
        // A route change is just a close request; from Open it transitions,
        // from Closed it is absorbed.
        let mut state = OverlayState::Open;
        assert!(state.try_close());
        assert!(!state.try_close());
        assert_eq!(state, OverlayState::Closed);
    }
}
