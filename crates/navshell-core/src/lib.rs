//! navshell-core - overlay state machine and focus-trap decisions
//!
//! Framework-free logic behind the navshell header overlay: the open/closed
//! state machine, the key-interception decisions for the focus trap, the
//! focusable-element predicate and the menu configuration types.
//!
//! Everything here is DOM-agnostic so the invariants are testable without a
//! browser; the `navshell-web` crate binds this logic to `web-sys`.

pub mod error;
pub mod focusable;
pub mod menu;
pub mod state;
pub mod trap;

pub use error::OverlayError;
pub use focusable::{is_focusable, CandidateKind, FocusCandidate, FOCUSABLE_SELECTOR};
pub use menu::MenuEntry;
pub use state::OverlayState;
pub use trap::{TrapAction, TrapKey};
