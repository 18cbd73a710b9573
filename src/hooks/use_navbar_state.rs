use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::browser::{self, EventListenerGuard};
use crate::config::NavbarConfig;
use crate::error::{NavError, NavResult};
use crate::expansion::ExpansionState;
use crate::types::ExpandRequest;

/// Everything the navbar owns: viewport mode, mobile menu and expansion.
#[derive(Clone, Debug, PartialEq)]
pub struct NavbarState {
    pub is_mobile: bool,
    pub is_open: bool,
    pub expansion: ExpansionState,
    config: NavbarConfig,
}

impl NavbarState {
    /// Without a known width (SSR, tests) the navbar starts in desktop mode.
    pub fn new(config: NavbarConfig, width: Option<f64>) -> Self {
        Self {
            is_mobile: width.is_some_and(|w| config.is_mobile_width(w)),
            is_open: false,
            expansion: ExpansionState::new(config.expansion_model),
            config,
        }
    }

    pub fn config(&self) -> &NavbarConfig {
        &self.config
    }

    pub fn is_expanded(&self, id: &str, level: usize) -> bool {
        self.expansion.is_expanded(id, level)
    }

    pub fn mode_changes_at(&self, width: f64) -> bool {
        self.config.is_mobile_width(width) != self.is_mobile
    }

    /// Re-evaluate the viewport mode. Crossing the breakpoint resets
    /// expansion and closes the mobile menu. Returns whether the mode changed.
    pub fn on_resize(&mut self, width: f64) -> bool {
        if !self.mode_changes_at(width) {
            return false;
        }
        self.is_mobile = !self.is_mobile;
        self.is_open = false;
        self.expansion.clear();
        tracing::debug!(width, is_mobile = self.is_mobile, "viewport mode changed");
        true
    }

    pub fn toggle_menu(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn handle_expand_item(&mut self, request: &ExpandRequest) {
        self.expansion.toggle(&request.id, request.level, self.is_mobile);
    }

    /// Leaf link activated: close the mobile menu and everything expanded.
    pub fn handle_nav_close(&mut self) {
        self.is_open = false;
        self.expansion.clear();
    }

    /// Replace the config handed down by the parent. A new expansion model
    /// starts from an empty state, and a new breakpoint is checked against
    /// `width` when one is known. Returns whether anything changed.
    pub fn set_config(&mut self, config: NavbarConfig, width: Option<f64>) -> bool {
        if self.config == config {
            return false;
        }
        if self.config.expansion_model != config.expansion_model {
            self.expansion = ExpansionState::new(config.expansion_model);
        }
        self.config = config;
        if let Some(width) = width {
            self.on_resize(width);
        }
        tracing::debug!(config = ?self.config, "navbar config replaced");
        true
    }

    /// Pointer went down outside the menu. Only collapses on desktop.
    pub fn on_pointer_down_outside(&mut self) -> bool {
        if self.is_mobile || !self.config.close_on_outside_click || self.expansion.is_empty() {
            return false;
        }
        self.expansion.clear();
        true
    }
}

/// `initial_width` wins over the measured viewport, so a caller (or a
/// server render) can pick the starting layout.
pub fn use_navbar_state(config: NavbarConfig, initial_width: Option<f64>) -> Signal<NavbarState> {
    let mut state = use_signal(|| {
        NavbarState::new(config.clone(), initial_width.or_else(browser::viewport_width))
    });

    use_effect(use_reactive!(|config| {
        if state.peek().config() != &config {
            state.write().set_config(config, browser::viewport_width());
        }
    }));

    state
}

/// Window resize and document pointer-down listeners for one navbar.
pub struct NavbarListeners {
    _resize: EventListenerGuard,
    _pointer_down: EventListenerGuard,
}

impl NavbarListeners {
    pub fn attach(
        mut state: Signal<NavbarState>,
        menubar: Signal<Option<web_sys::Element>>,
    ) -> NavResult<Self> {
        let window = browser::window()?;

        let resize_window = window.clone();
        let resize = EventListenerGuard::listen(&window, "resize", move |_| {
            let Some(width) = resize_window.inner_width().ok().and_then(|w| w.as_f64()) else {
                return;
            };
            // skip the write (and re-render) unless the mode actually flips
            if state.peek().mode_changes_at(width) {
                state.write().on_resize(width);
            }
        })?;

        let document = window
            .document()
            .ok_or(NavError::NoBrowser("document"))?;
        let pointer_down = EventListenerGuard::listen(&document, "mousedown", move |event| {
            if state.peek().is_mobile {
                return;
            }
            let Some(root) = (*menubar.peek()).clone() else {
                return;
            };
            if browser::is_outside(&root, event.target()) && !state.peek().expansion.is_empty() {
                state.write().on_pointer_down_outside();
            }
        })?;

        Ok(Self {
            _resize: resize,
            _pointer_down: pointer_down,
        })
    }
}

/// Attach the navbar's listeners after mount and release them on unmount.
pub fn use_navbar_listeners(state: Signal<NavbarState>, menubar: Signal<Option<web_sys::Element>>) {
    let listeners = use_hook(|| Rc::new(RefCell::new(None::<NavbarListeners>)));

    let slot = listeners.clone();
    use_effect(move || {
        if slot.borrow().is_some() {
            return;
        }
        match NavbarListeners::attach(state, menubar) {
            Ok(attached) => *slot.borrow_mut() = Some(attached),
            Err(err) => tracing::warn!(error = %err, "navbar listeners not attached"),
        }
    });

    use_drop(move || {
        listeners.borrow_mut().take();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expansion::ExpansionModel;

    fn desktop() -> NavbarState {
        NavbarState::new(NavbarConfig::default(), Some(1024.0))
    }

    fn mobile() -> NavbarState {
        NavbarState::new(NavbarConfig::default(), Some(480.0))
    }

    #[test]
    fn test_initial_mode_from_width() {
        assert!(!desktop().is_mobile);
        assert!(mobile().is_mobile);
        assert!(!NavbarState::new(NavbarConfig::default(), None).is_mobile);
    }

    #[test]
    fn test_resize_across_breakpoint_resets_state() {
        let mut state = mobile();
        state.toggle_menu();
        state.handle_expand_item(&ExpandRequest::new("products", 0));
        assert!(state.is_open);

        assert!(state.on_resize(1200.0));

        assert!(!state.is_mobile);
        assert!(!state.is_open);
        assert!(state.expansion.is_empty());
    }

    #[test]
    fn test_resize_within_mode_keeps_state() {
        let mut state = desktop();
        state.handle_expand_item(&ExpandRequest::new("products", 0));

        assert!(!state.on_resize(900.0));
        assert!(state.is_expanded("products", 0));
    }

    #[test]
    fn test_hamburger_toggled_twice_is_closed() {
        let mut state = mobile();
        state.toggle_menu();
        assert!(state.is_open);
        state.toggle_menu();
        assert!(!state.is_open);
    }

    #[test]
    fn test_nav_close_clears_everything() {
        let mut state = mobile();
        state.toggle_menu();
        state.handle_expand_item(&ExpandRequest::new("products", 0));
        state.handle_expand_item(&ExpandRequest::new("products-hardware", 1));

        state.handle_nav_close();

        assert!(!state.is_open);
        assert!(state.expansion.is_empty());
    }

    #[test]
    fn test_outside_pointer_collapses_on_desktop_only() {
        let mut state = desktop();
        state.handle_expand_item(&ExpandRequest::new("products", 0));
        assert!(state.on_pointer_down_outside());
        assert!(state.expansion.is_empty());

        let mut state = mobile();
        state.handle_expand_item(&ExpandRequest::new("products", 0));
        assert!(!state.on_pointer_down_outside());
        assert!(state.is_expanded("products", 0));
    }

    #[test]
    fn test_outside_pointer_can_be_disabled() {
        let config = NavbarConfig {
            close_on_outside_click: false,
            ..NavbarConfig::default()
        };
        let mut state = NavbarState::new(config, Some(1024.0));
        state.handle_expand_item(&ExpandRequest::new("products", 0));
        assert!(!state.on_pointer_down_outside());
    }

    #[test]
    fn test_expansion_model_follows_config() {
        let config = NavbarConfig {
            expansion_model: ExpansionModel::LevelMap,
            ..NavbarConfig::default()
        };
        let state = NavbarState::new(config, None);
        assert_eq!(state.expansion.model(), ExpansionModel::LevelMap);
    }

    #[test]
    fn test_set_config_moves_breakpoint() {
        let mut state = desktop();
        state.handle_expand_item(&ExpandRequest::new("products", 0));

        let wider = NavbarConfig {
            breakpoint_px: 1280.0,
            ..NavbarConfig::default()
        };
        assert!(state.set_config(wider.clone(), Some(1024.0)));

        assert!(state.is_mobile);
        assert!(state.expansion.is_empty());
        assert_eq!(state.config(), &wider);
    }

    #[test]
    fn test_set_config_without_width_keeps_mode() {
        let mut state = desktop();
        let wider = NavbarConfig {
            breakpoint_px: 1280.0,
            ..NavbarConfig::default()
        };
        assert!(state.set_config(wider, None));
        assert!(!state.is_mobile);
    }

    #[test]
    fn test_set_config_switches_expansion_model() {
        let mut state = desktop();
        state.handle_expand_item(&ExpandRequest::new("products", 0));

        let level_map = NavbarConfig {
            expansion_model: ExpansionModel::LevelMap,
            ..NavbarConfig::default()
        };
        assert!(state.set_config(level_map, Some(1024.0)));

        assert_eq!(state.expansion.model(), ExpansionModel::LevelMap);
        assert!(state.expansion.is_empty());
    }

    #[test]
    fn test_set_config_same_config_is_noop() {
        let mut state = desktop();
        state.handle_expand_item(&ExpandRequest::new("products", 0));

        assert!(!state.set_config(NavbarConfig::default(), Some(1024.0)));
        assert!(state.is_expanded("products", 0));
    }

    #[test]
    fn test_outside_click_flag_follows_new_config() {
        let mut state = desktop();
        state.set_config(
            NavbarConfig {
                close_on_outside_click: false,
                ..NavbarConfig::default()
            },
            None,
        );
        state.handle_expand_item(&ExpandRequest::new("products", 0));
        assert!(!state.on_pointer_down_outside());
    }

    #[test]
    fn test_desktop_primary_entries_are_exclusive() {
        let mut state = desktop();
        state.handle_expand_item(&ExpandRequest::new("products", 0));
        state.handle_expand_item(&ExpandRequest::new("support", 0));
        assert!(!state.is_expanded("products", 0));
        assert!(state.is_expanded("support", 0));
    }
}
