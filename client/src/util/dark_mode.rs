//! Theme initialization and toggle.
//!
//! Reads the preference from `localStorage` (key `"theme"`) and applies the
//! `dark` class to the `<html>` element. Toggle writes back to `localStorage`
//! and updates the class. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; native builds
//! see no storage and always start light.

use astropic::{Theme, ThemeStore, load_theme, toggle_theme};

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

/// `ThemeStore` backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl ThemeStore for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or_else(|| "localStorage unavailable".to_owned())?;
            storage
                .set_item(key, value)
                .map_err(|e| format!("localStorage write failed: {e:?}"))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err("localStorage unavailable".to_owned())
        }
    }
}

/// Read the theme preference from localStorage.
pub fn read_preference() -> Theme {
    load_theme(&LocalStorage)
}

/// Apply or remove the `dark` class on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let class_list = el.class_list();
            let result = if theme.is_dark() {
                class_list.add_1("dark")
            } else {
                class_list.remove_1("dark")
            };
            if let Err(e) = result {
                leptos::logging::warn!("failed to apply theme class: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Toggle the theme, persist the new preference, and restyle the page.
pub fn toggle(current: Theme) -> Theme {
    let next = toggle_theme(&mut LocalStorage, current);
    apply(next);
    next
}
