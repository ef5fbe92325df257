//! Light/dark theme preference over an injected key-value store.
//!
//! The preference is read once at startup and written back synchronously on
//! every toggle. Storage is best-effort: an unreadable value means `Light`,
//! a failed write is logged and the toggle still takes effect for the
//! session.

use std::collections::HashMap;

#[cfg(test)]
#[path = "theme_test.rs"]
mod tests;

/// Storage key holding the preference.
pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stored representation, `"light"` or `"dark"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value; anything unrecognized yields `None`.
    #[must_use]
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Minimal persistent key-value storage.
pub trait ThemeStore {
    fn read(&self, key: &str) -> Option<String>;

    /// Persist `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a description of the storage failure (quota, disabled
    /// storage, and so on).
    fn write(&mut self, key: &str, value: &str) -> Result<(), String>;
}

/// In-memory store for tests and hosts without persistent storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl ThemeStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), String> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Read the persisted theme, defaulting to `Light`.
pub fn load_theme(store: &impl ThemeStore) -> Theme {
    store
        .read(THEME_KEY)
        .and_then(|raw| Theme::from_stored(&raw))
        .unwrap_or_default()
}

/// Flip `current`, persist the result, and return it.
pub fn toggle_theme(store: &mut impl ThemeStore, current: Theme) -> Theme {
    let next = current.toggled();
    if let Err(err) = store.write(THEME_KEY, next.as_str()) {
        tracing::warn!(error = %err, theme = next.as_str(), "failed to persist theme");
    }
    next
}
