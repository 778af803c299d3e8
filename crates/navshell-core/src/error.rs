//! Error types for navshell-core
//!
//! Both variants are non-fatal degradations: the controller downgrades them
//! to a debug-level log and continues the overlay episode.

use thiserror::Error;

/// Degradations the overlay controller can hit while applying its open-time
/// side effects.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayError {
    /// The host cannot apply the `inert` marking; `aria-hidden` remains the
    /// effective protection for the background.
    #[error("host does not support the inert marking; falling back to aria-hidden")]
    InertUnsupported,

    /// The panel had no focusable element when the overlay opened; focus
    /// falls back to the trigger control.
    #[error("overlay panel contains no focusable element")]
    NoFocusableTarget,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_fallback() {
        assert!(OverlayError::InertUnsupported
            .to_string()
            .contains("aria-hidden"));
        assert!(OverlayError::NoFocusableTarget
            .to_string()
            .contains("no focusable"));
    }
}
