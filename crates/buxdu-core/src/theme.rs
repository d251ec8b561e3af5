//! Persisted dark/light theme
//!
//! [`ThemeStore`] is the single source of truth for the page theme. The
//! document attribute, the toggle icons and the scroll styler are all
//! subscribers: every `set_theme` notifies them synchronously, so the header
//! is restyled without waiting for a scroll event.

use crate::storage::{KeyValueStore, THEME_KEY};
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// Document root attribute read by the stylesheet
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Site color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeState {
    #[default]
    Dark,
    Light,
}

impl ThemeState {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeState::Dark => "dark",
            ThemeState::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeState::Dark => ThemeState::Light,
            ThemeState::Light => ThemeState::Dark,
        }
    }

    /// Visibility of the toggle button's sun and moon icons
    pub fn icons(self) -> ThemeIcons {
        match self {
            ThemeState::Light => ThemeIcons {
                sun_visible: false,
                moon_visible: true,
            },
            ThemeState::Dark => ThemeIcons {
                sun_visible: true,
                moon_visible: false,
            },
        }
    }

    /// Parse a stored value, falling back to the default on anything unknown
    pub fn from_stored(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for ThemeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(ThemeState::Dark),
            "light" => Ok(ThemeState::Light),
            other => Err(format!("unknown theme '{}' (expected dark or light)", other)),
        }
    }
}

/// Which theme indicator icon is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeIcons {
    pub sun_visible: bool,
    pub moon_visible: bool,
}

impl ThemeIcons {
    /// CSS `display` values for (sun, moon)
    pub fn display(self) -> (&'static str, &'static str) {
        let css = |visible: bool| if visible { "block" } else { "none" };
        (css(self.sun_visible), css(self.moon_visible))
    }
}

type Subscriber = Rc<dyn Fn(ThemeState)>;

/// Theme store backed by durable storage
///
/// When storage fails the store keeps working on an in-memory session value
/// for the rest of the page's life. Callers never see an error.
pub struct ThemeStore<S> {
    storage: S,
    session: Cell<ThemeState>,
    degraded: Cell<bool>,
    subscribers: RefCell<Vec<Subscriber>>,
}

impl<S: KeyValueStore> ThemeStore<S> {
    /// Read the stored theme once; later storage writes from other pages
    /// don't affect this store
    pub fn new(storage: S) -> Self {
        let (initial, degraded) = match storage.get(THEME_KEY) {
            Ok(value) => (ThemeState::from_stored(value.as_deref()), false),
            Err(e) => {
                tracing::debug!("theme storage unavailable, using session value: {}", e);
                (ThemeState::default(), true)
            }
        };

        Self {
            storage,
            session: Cell::new(initial),
            degraded: Cell::new(degraded),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Theme currently applied to this page
    pub fn theme(&self) -> ThemeState {
        self.session.get()
    }

    /// Persist `theme` and notify every subscriber
    pub fn set_theme(&self, theme: ThemeState) {
        self.session.set(theme);

        if !self.degraded.get() {
            if let Err(e) = self.storage.set(THEME_KEY, theme.as_str()) {
                tracing::debug!("failed to persist theme, keeping it in memory: {}", e);
                self.degraded.set(true);
            }
        }

        self.notify(theme);
    }

    /// Flip the theme and return the new value
    pub fn toggle(&self) -> ThemeState {
        let next = self.theme().toggled();
        self.set_theme(next);
        next
    }

    /// Register a change listener
    ///
    /// Listeners run in registration order and may read the store.
    pub fn subscribe(&self, listener: impl Fn(ThemeState) + 'static) {
        self.subscribers.borrow_mut().push(Rc::new(listener));
    }

    /// True once storage failed and the store fell back to session memory
    pub fn is_degraded(&self) -> bool {
        self.degraded.get()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn notify(&self, theme: ThemeState) {
        // Snapshot so listeners can subscribe or read without a borrow clash
        let subscribers: Vec<Subscriber> = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            subscriber(theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_default_is_dark_when_absent_or_invalid() {
        let store = ThemeStore::new(MemoryStore::new());
        assert_eq!(store.theme(), ThemeState::Dark);

        let storage = MemoryStore::new();
        storage.set(THEME_KEY, "purple").unwrap();
        assert_eq!(ThemeStore::new(storage).theme(), ThemeState::Dark);
    }

    #[test]
    fn test_initial_value_read_from_storage() {
        let storage = MemoryStore::new();
        storage.set(THEME_KEY, "light").unwrap();
        let store = ThemeStore::new(storage);
        assert_eq!(store.theme(), ThemeState::Light);
    }

    #[test]
    fn test_set_then_get_for_both_themes() {
        let store = ThemeStore::new(MemoryStore::new());
        for theme in [ThemeState::Light, ThemeState::Dark, ThemeState::Light] {
            store.set_theme(theme);
            assert_eq!(store.theme(), theme);
            assert_eq!(
                store.storage().get(THEME_KEY).unwrap().as_deref(),
                Some(theme.as_str())
            );
        }
    }

    #[test]
    fn test_double_toggle_restores_original() {
        let store = ThemeStore::new(MemoryStore::new());
        let original = store.theme();
        assert_eq!(store.toggle(), original.toggled());
        assert_eq!(store.toggle(), original);
        assert_eq!(store.theme(), original);
    }

    #[test]
    fn test_unavailable_storage_degrades_to_memory() {
        let store = ThemeStore::new(MemoryStore::unavailable());
        assert_eq!(store.theme(), ThemeState::Dark);
        assert!(store.is_degraded());

        store.set_theme(ThemeState::Light);
        assert_eq!(store.theme(), ThemeState::Light);
        assert_eq!(store.toggle(), ThemeState::Dark);
    }

    #[test]
    fn test_storage_revoked_mid_session_keeps_last_theme() {
        let store = ThemeStore::new(MemoryStore::new());
        store.set_theme(ThemeState::Light);

        store.storage().set_available(false);
        store.set_theme(ThemeState::Dark);
        assert!(store.is_degraded());
        assert_eq!(store.theme(), ThemeState::Dark);
    }

    #[test]
    fn test_subscribers_notified_in_order_and_can_reenter() {
        let store = Rc::new(ThemeStore::new(MemoryStore::new()));
        let seen = Rc::new(RefCell::new(Vec::new()));

        let log = Rc::clone(&seen);
        store.subscribe(move |t| log.borrow_mut().push(format!("attr:{t}")));

        let log = Rc::clone(&seen);
        let weak = Rc::downgrade(&store);
        store.subscribe(move |t| {
            // Reading the store from inside a listener must not panic
            let current = weak.upgrade().map(|s| s.theme());
            assert_eq!(current, Some(t));
            log.borrow_mut().push(format!("styler:{t}"));
        });

        store.set_theme(ThemeState::Light);
        assert_eq!(*seen.borrow(), vec!["attr:light", "styler:light"]);
    }

    #[test]
    fn test_other_page_writes_do_not_change_this_page() {
        let shared = Rc::new(MemoryStore::new());
        let this_page = ThemeStore::new(Rc::clone(&shared));
        let other_page = ThemeStore::new(Rc::clone(&shared));

        other_page.set_theme(ThemeState::Light);
        assert_eq!(this_page.theme(), ThemeState::Dark);

        // The click flips what this page shows, not what storage holds
        assert_eq!(this_page.toggle(), ThemeState::Light);
        assert_eq!(this_page.toggle(), ThemeState::Dark);
        assert_eq!(shared.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_icon_visibility() {
        assert_eq!(ThemeState::Light.icons().display(), ("none", "block"));
        assert_eq!(ThemeState::Dark.icons().display(), ("block", "none"));
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&ThemeState::Light).unwrap();
        assert_eq!(json, "\"light\"");
    }
}
