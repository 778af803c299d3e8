//! Overlay focus controller
//!
//! Owns the overlay's open/closed state and, while open, its four side
//! effects: the background snapshot (scroll lock plus aria-hidden/inert
//! markings on every body-level sibling of the shell), initial focus
//! placement, the window-level key interceptor, and the pending focus
//! return. The side effects exist exactly while the state is `Open`;
//! `close()` is the single teardown routine for every dismissal path.

use std::time::Duration;

use leptos::html;
use leptos::leptos_dom::helpers::{window_event_listener, WindowListenerHandle};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use navshell_core::trap::{self, TrapAction, TrapKey};
use navshell_core::{OverlayError, OverlayState};

use crate::dom::focus::{active_index, focus_element, scan_focusables};
use crate::dom::snapshot::BackgroundSnapshot;

/// Controller for the navigation overlay.
///
/// `Copy`-cheap handle; all copies share one state machine. DOM handles are
/// kept in thread-local storage since the overlay only ever runs on the
/// host UI thread.
#[derive(Clone, Copy)]
pub struct OverlayController {
    /// Reactive mirror of the state, for class and aria bindings.
    open: RwSignal<bool>,
    state: StoredValue<OverlayState, LocalStorage>,
    snapshot: StoredValue<Option<BackgroundSnapshot>, LocalStorage>,
    key_trap: StoredValue<Option<WindowListenerHandle>, LocalStorage>,
    focus_return: StoredValue<Option<HtmlElement>, LocalStorage>,
    root: NodeRef<html::Header>,
    trigger: NodeRef<html::Button>,
    panel: NodeRef<html::Div>,
}

impl OverlayController {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
            state: StoredValue::new_local(OverlayState::Closed),
            snapshot: StoredValue::new_local(None),
            key_trap: StoredValue::new_local(None),
            focus_return: StoredValue::new_local(None),
            root: NodeRef::new(),
            trigger: NodeRef::new(),
            panel: NodeRef::new(),
        }
    }

    /// Reactive open flag, for `class:` and `aria-expanded` bindings.
    pub fn open_signal(&self) -> ReadSignal<bool> {
        self.open.read_only()
    }

    /// Attach point for the shell's root `<header>` element.
    pub fn root_ref(&self) -> NodeRef<html::Header> {
        self.root
    }

    /// Attach point for the hamburger trigger.
    pub fn trigger_ref(&self) -> NodeRef<html::Button> {
        self.trigger
    }

    /// Attach point for the overlay panel.
    pub fn panel_ref(&self) -> NodeRef<html::Div> {
        self.panel
    }

    fn is_open(&self) -> bool {
        self.state.with_value(|s| s.is_open())
    }

    /// Open the overlay. No-op if already open.
    pub fn open(&self) {
        let mut transitioned = false;
        self.state.update_value(|s| transitioned = s.try_open());
        if !transitioned {
            return;
        }
        self.open.set(true);

        // Focus returns to whatever held it when the episode began,
        // normally the trigger control.
        let return_to = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.active_element())
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .or_else(|| self.trigger.get_untracked().map(HtmlElement::from));
        self.focus_return.set_value(return_to);

        if let Some(root) = self.root.get_untracked() {
            if let Some(snapshot) = BackgroundSnapshot::capture(&root) {
                if !snapshot.inert_supported() {
                    leptos::logging::debug_warn!("{}", OverlayError::InertUnsupported);
                }
                self.snapshot.set_value(Some(snapshot));
            }
        }

        match self.panel.get_untracked().map(|p| scan_focusables(&p)) {
            Some(focusables) if !focusables.is_empty() => focus_element(&focusables[0]),
            _ => {
                leptos::logging::debug_warn!("{}", OverlayError::NoFocusableTarget);
                if let Some(trigger) = self.trigger.get_untracked() {
                    let _ = trigger.focus();
                }
            }
        }

        let controller = *self;
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            controller.intercept_key(&ev);
        });
        self.key_trap.set_value(Some(handle));
    }

    /// Close the overlay and restore the document to its pre-open state.
    /// No-op if already closed, so every dismissal path (escape, outside
    /// click, link activation, route change, unmount) can call it safely;
    /// whichever fires first wins.
    pub fn close(&self) {
        let mut transitioned = false;
        self.state.update_value(|s| transitioned = s.try_close());
        if !transitioned {
            return;
        }
        self.open.set(false);

        let mut trap = None;
        self.key_trap.update_value(|slot| trap = slot.take());
        if let Some(handle) = trap {
            handle.remove();
        }

        let mut snapshot = None;
        self.snapshot.update_value(|slot| snapshot = slot.take());
        if let Some(snapshot) = snapshot {
            snapshot.restore();
        }

        let mut return_to = None;
        self.focus_return.update_value(|slot| return_to = slot.take());
        if let Some(target) = return_to {
            focus_element(&target);
        }
    }

    pub fn toggle(&self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Force the overlay closed on a route change. A navigation event means
    /// the destination took over, so the overlay must not remain open over
    /// new content - regardless of whether the location actually differs.
    pub fn on_route_change(&self) {
        self.close();
    }

    /// Deferred dismissal for navigating links: runs after the click's
    /// synchronous handlers, so focus lands on the trigger only once the
    /// destination view is mounted. If another path closed the overlay
    /// first, the task observes `Closed` and does nothing.
    pub fn close_after_navigation(&self) {
        let controller = *self;
        set_timeout(
            move || {
                if controller.is_open() {
                    controller.close();
                }
            },
            Duration::ZERO,
        );
    }

    fn intercept_key(&self, ev: &web_sys::KeyboardEvent) {
        if !self.is_open() {
            return;
        }

        let key = TrapKey::from_key(&ev.key(), ev.shift_key());
        let focusables = self
            .panel
            .get_untracked()
            .map(|p| scan_focusables(&p))
            .unwrap_or_default();

        match trap::decide(key, active_index(&focusables), focusables.len()) {
            TrapAction::Close => {
                self.close();
                // Escape lands on the trigger even if another dismissal
                // already consumed the generic focus-return step.
                if let Some(trigger) = self.trigger.get_untracked() {
                    let _ = trigger.focus();
                }
            }
            TrapAction::WrapToFirst => {
                ev.prevent_default();
                if let Some(first) = focusables.first() {
                    focus_element(first);
                }
            }
            TrapAction::WrapToLast => {
                ev.prevent_default();
                if let Some(last) = focusables.last() {
                    focus_element(last);
                }
            }
            TrapAction::Block => ev.prevent_default(),
            TrapAction::PassThrough => {}
        }
    }
}

impl Default for OverlayController {
    fn default() -> Self {
        Self::new()
    }
}
