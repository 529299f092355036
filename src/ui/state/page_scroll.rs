// SPDX-License-Identifier: MPL-2.0
//! Page scroll lock
//!
//! The gallery stops scrolling while something covers it. Each cover holds
//! its own claim so releasing one never unlocks the page while another is
//! still up.

use crate::lightbox::Effect;

/// Parts of the UI that can freeze the gallery scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockHolder {
    Lightbox,
    Menu,
}

/// Scroll-lock sink shared by the lightbox and the navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageScroll {
    lightbox: bool,
    menu: bool,
}

impl PageScroll {
    /// Sets or clears one holder's claim.
    pub fn set(&mut self, holder: LockHolder, locked: bool) {
        match holder {
            LockHolder::Lightbox => self.lightbox = locked,
            LockHolder::Menu => self.menu = locked,
        }
    }

    /// Applies the scroll-lock part of a lightbox transition.
    pub fn apply(&mut self, effect: Effect) {
        if let Some(locked) = effect.scroll_lock() {
            self.set(LockHolder::Lightbox, locked);
        }
    }

    #[must_use]
    pub fn is_held_by(&self, holder: LockHolder) -> bool {
        match holder {
            LockHolder::Lightbox => self.lightbox,
            LockHolder::Menu => self.menu,
        }
    }

    /// Whether the gallery must ignore scroll input.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.lightbox || self.menu
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unlocked() {
        assert!(!PageScroll::default().is_locked());
    }

    #[test]
    fn lightbox_effects_drive_lightbox_claim() {
        let mut scroll = PageScroll::default();

        scroll.apply(Effect::Opened);
        assert!(scroll.is_held_by(LockHolder::Lightbox));
        assert!(scroll.is_locked());

        scroll.apply(Effect::Moved);
        assert!(scroll.is_locked());

        scroll.apply(Effect::Closed);
        assert!(!scroll.is_locked());
    }

    #[test]
    fn claims_are_independent() {
        let mut scroll = PageScroll::default();
        scroll.set(LockHolder::Menu, true);
        scroll.apply(Effect::Opened);
        scroll.apply(Effect::Closed);

        assert!(!scroll.is_held_by(LockHolder::Lightbox));
        assert!(scroll.is_locked());

        scroll.set(LockHolder::Menu, false);
        assert!(!scroll.is_locked());
    }
}
