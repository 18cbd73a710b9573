//! How a single menu entry reacts to pointer and keyboard input.
//!
//! Desktop expansion is hover driven; mobile expansion is tap driven.
//! Keyboard activation works in both modes. Nothing here touches state
//! directly: every reaction is a request for the navbar to toggle.

use dioxus::prelude::Key;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reaction {
    Ignore,
    Toggle,
    /// Toggle and suppress the browser's default action for the event.
    ToggleAndPreventDefault,
}

impl Reaction {
    pub fn toggles(&self) -> bool {
        !matches!(self, Reaction::Ignore)
    }

    pub fn prevents_default(&self) -> bool {
        matches!(self, Reaction::ToggleAndPreventDefault)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Chevron {
    /// Submenu drops below; `rotated` flips it while expanded (mobile accordion).
    Down { rotated: bool },
    /// Submenu opens to the side.
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryContext {
    pub has_sub_items: bool,
    pub is_mobile: bool,
    pub is_expanded: bool,
    pub level: usize,
}

impl EntryContext {
    pub fn is_primary_level(&self) -> bool {
        self.level == 0
    }

    /// Clicking a parent only toggles on mobile; leaves are plain links.
    pub fn on_click(&self) -> Reaction {
        if self.has_sub_items && self.is_mobile {
            Reaction::ToggleAndPreventDefault
        } else {
            Reaction::Ignore
        }
    }

    pub fn on_key(&self, key: &Key) -> Reaction {
        if self.has_sub_items && is_activation_key(key) {
            Reaction::ToggleAndPreventDefault
        } else {
            Reaction::Ignore
        }
    }

    pub fn on_mouse_enter(&self) -> Reaction {
        if !self.is_mobile && self.has_sub_items && !self.is_expanded {
            Reaction::Toggle
        } else {
            Reaction::Ignore
        }
    }

    pub fn on_mouse_leave(&self) -> Reaction {
        if !self.is_mobile && self.has_sub_items && self.is_expanded {
            Reaction::Toggle
        } else {
            Reaction::Ignore
        }
    }

    pub fn chevron(&self) -> Option<Chevron> {
        if !self.has_sub_items {
            return None;
        }
        if self.is_mobile {
            return Some(Chevron::Down { rotated: self.is_expanded });
        }
        if self.is_primary_level() {
            Some(Chevron::Down { rotated: false })
        } else {
            Some(Chevron::Right)
        }
    }
}

/// Enter or Space
pub fn is_activation_key(key: &Key) -> bool {
    match key {
        Key::Enter => true,
        Key::Character(c) => c == " ",
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parent(is_mobile: bool, is_expanded: bool, level: usize) -> EntryContext {
        EntryContext {
            has_sub_items: true,
            is_mobile,
            is_expanded,
            level,
        }
    }

    fn leaf(is_mobile: bool) -> EntryContext {
        EntryContext {
            has_sub_items: false,
            is_mobile,
            is_expanded: false,
            level: 0,
        }
    }

    #[test]
    fn test_desktop_click_on_parent_is_ignored() {
        assert_eq!(parent(false, false, 0).on_click(), Reaction::Ignore);
        assert_eq!(parent(false, true, 1).on_click(), Reaction::Ignore);
    }

    #[test]
    fn test_mobile_click_on_parent_toggles() {
        let reaction = parent(true, false, 0).on_click();
        assert!(reaction.toggles());
        assert!(reaction.prevents_default());
    }

    #[test]
    fn test_click_on_leaf_is_left_to_the_link() {
        assert_eq!(leaf(false).on_click(), Reaction::Ignore);
        assert_eq!(leaf(true).on_click(), Reaction::Ignore);
    }

    #[test]
    fn test_hover_expands_and_leave_collapses_on_desktop() {
        assert_eq!(parent(false, false, 0).on_mouse_enter(), Reaction::Toggle);
        assert_eq!(parent(false, true, 0).on_mouse_enter(), Reaction::Ignore);
        assert_eq!(parent(false, true, 0).on_mouse_leave(), Reaction::Toggle);
        assert_eq!(parent(false, false, 0).on_mouse_leave(), Reaction::Ignore);
    }

    #[test]
    fn test_hover_does_nothing_on_mobile() {
        assert_eq!(parent(true, false, 0).on_mouse_enter(), Reaction::Ignore);
        assert_eq!(parent(true, true, 0).on_mouse_leave(), Reaction::Ignore);
        assert_eq!(leaf(false).on_mouse_enter(), Reaction::Ignore);
    }

    #[test]
    fn test_enter_and_space_toggle_parents() {
        for ctx in [parent(false, false, 0), parent(true, true, 2)] {
            assert_eq!(ctx.on_key(&Key::Enter), Reaction::ToggleAndPreventDefault);
            assert_eq!(ctx.on_key(&Key::Character(" ".to_string())), Reaction::ToggleAndPreventDefault);
            assert_eq!(ctx.on_key(&Key::Character("a".to_string())), Reaction::Ignore);
            assert_eq!(ctx.on_key(&Key::Escape), Reaction::Ignore);
        }
        assert_eq!(leaf(false).on_key(&Key::Enter), Reaction::Ignore);
    }

    #[test]
    fn test_chevron_orientation() {
        assert_eq!(leaf(false).chevron(), None);
        assert_eq!(parent(false, false, 0).chevron(), Some(Chevron::Down { rotated: false }));
        assert_eq!(parent(false, true, 2).chevron(), Some(Chevron::Right));
        assert_eq!(parent(true, true, 2).chevron(), Some(Chevron::Down { rotated: true }));
        assert_eq!(parent(true, false, 0).chevron(), Some(Chevron::Down { rotated: false }));
    }
}
