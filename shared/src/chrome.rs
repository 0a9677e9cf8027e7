//! Viewport chrome locking
//!
//! While a drag session is open the page must not scroll, select text or pop
//! a context menu. Those settings are global, so they are taken through a
//! guard that remembers the original values and puts them back when dropped.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// How the viewport treats touch panning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TouchAction {
    /// Platform default (pan/zoom allowed)
    #[default]
    Auto,
    /// All default touch handling disabled
    None,
}

/// Global UI chrome that a drag session temporarily overrides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChromeSettings {
    pub scroll_locked: bool,
    pub touch_action: TouchAction,
    pub text_selection: bool,
    pub context_menu: bool,
}

impl Default for ChromeSettings {
    fn default() -> Self {
        Self {
            scroll_locked: false,
            touch_action: TouchAction::Auto,
            text_selection: true,
            context_menu: true,
        }
    }
}

impl ChromeSettings {
    /// Settings applied for the duration of a drag
    pub fn locked() -> Self {
        Self {
            scroll_locked: true,
            touch_action: TouchAction::None,
            text_selection: false,
            context_menu: false,
        }
    }
}

/// Access to the host's global chrome
///
/// Takes `&self`: hosts hand out cheap shared handles, and the guard keeps
/// its own handle for the restore.
pub trait ViewportChrome {
    fn settings(&self) -> ChromeSettings;
    fn apply(&self, settings: ChromeSettings);
}

/// Scoped chrome lock; restores the saved settings on drop
#[derive(Debug)]
pub struct ChromeGuard<C: ViewportChrome> {
    chrome: C,
    saved: ChromeSettings,
}

impl<C: ViewportChrome> ChromeGuard<C> {
    /// Save the current settings and apply the locked ones
    pub fn acquire(chrome: C) -> Self {
        let saved = chrome.settings();
        chrome.apply(ChromeSettings::locked());
        log::trace!("viewport chrome locked");
        Self { chrome, saved }
    }

    /// Settings that will be restored
    pub fn saved(&self) -> ChromeSettings {
        self.saved
    }
}

impl<C: ViewportChrome> Drop for ChromeGuard<C> {
    fn drop(&mut self) {
        self.chrome.apply(self.saved);
        log::trace!("viewport chrome restored");
    }
}

/// Single-threaded shared chrome state
#[derive(Debug, Clone, Default)]
pub struct SharedChrome(Rc<RefCell<ChromeSettings>>);

impl SharedChrome {
    pub fn new(settings: ChromeSettings) -> Self {
        Self(Rc::new(RefCell::new(settings)))
    }

    /// True while page scrolling is locked
    pub fn is_locked(&self) -> bool {
        self.0.borrow().scroll_locked
    }
}

impl ViewportChrome for SharedChrome {
    fn settings(&self) -> ChromeSettings {
        *self.0.borrow()
    }

    fn apply(&self, settings: ChromeSettings) {
        *self.0.borrow_mut() = settings;
    }
}
