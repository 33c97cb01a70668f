//! Light/dark theme persistence and application.
//!
//! Reads the saved theme from `localStorage` under [`THEME_STORAGE_KEY`] and
//! toggles the [`DARK_MODE_CLASS`] class on `<body>`. Storage sits behind
//! [`KeyValueStore`] so the toggle/reload cycle can be exercised without a
//! browser.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths read nothing
//! and apply nothing, so the server always renders the light theme.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::RefCell;
use std::collections::HashMap;

pub const THEME_STORAGE_KEY: &str = "theme";
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Visual mode of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret a stored value. Anything other than `"dark"` is light.
    pub fn resolve(stored: Option<&str>) -> Self {
        match stored {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Theme selected by the toggle checkbox (checked = dark).
    pub fn from_checked(checked: bool) -> Self {
        if checked { Self::Dark } else { Self::Light }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Minimal string key/value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }
}

/// The browser's `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// Process-local storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// Loads, applies, and persists the page theme.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThemeController<S> {
    store: S,
}

impl<S: KeyValueStore> ThemeController<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The persisted theme, light if none was saved.
    pub fn load(&self) -> Theme {
        Theme::resolve(self.store.get(THEME_STORAGE_KEY).as_deref())
    }

    /// Apply `theme` to the document. Returns the checkbox state that matches it.
    pub fn apply(&self, theme: Theme) -> bool {
        set_document_dark_mode(theme.is_dark());
        theme.is_dark()
    }

    /// Page-load path: apply whatever was persisted.
    pub fn init(&self) -> Theme {
        let theme = self.load();
        self.apply(theme);
        theme
    }

    /// Handle a checkbox change: derive, persist, apply.
    pub fn toggle(&self, checked: bool) -> Theme {
        let theme = Theme::from_checked(checked);
        self.store.set(THEME_STORAGE_KEY, theme.as_str());
        self.apply(theme);
        theme
    }
}

fn set_document_dark_mode(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.class_list().toggle_with_force(DARK_MODE_CLASS, enabled);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}
