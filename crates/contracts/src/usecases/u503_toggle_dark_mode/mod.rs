//! Dark-mode preference.
//!
//! The in-memory flag is the only source of truth and `toggle_dark_mode` is
//! its only writer; restoring a saved preference goes through the same path.

use crate::shared::storage::KeyValueStorage;

/// Visual theme of the page.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Class present on `<body>` while dark mode is on.
    pub const DARK_MODE_CLASS: &'static str = "dark-mode";

    pub fn is_dark(&self) -> bool {
        *self == ThemeMode::Dark
    }


    /// Font Awesome class of the toggle button icon.
    pub fn icon_class(&self) -> &'static str {
        match self {
            ThemeMode::Light => "fas fa-moon",
            ThemeMode::Dark => "fas fa-sun",
        }
    }

    fn from_flag(dark: bool) -> Self {
        if dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }
}

pub struct PreferenceStore<S> {
    storage: S,
    key: String,
    dark_mode: bool,
}

impl<S: KeyValueStorage> PreferenceStore<S> {
    /// Starts in light mode; call `load_preferences` to restore.
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            dark_mode: false,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        ThemeMode::from_flag(self.dark_mode)
    }

    /// Flip the flag and persist it as `"true"`/`"false"`.
    ///
    /// A failed write is logged; the in-memory state still flips so the
    /// page stays consistent with what the visitor clicked.
    pub fn toggle_dark_mode(&mut self) -> ThemeMode {
        self.dark_mode = !self.dark_mode;
        let value = if self.dark_mode { "true" } else { "false" };
        if let Err(e) = self.storage.set_item(&self.key, value) {
            log::warn!("Failed to persist `{}`: {}", self.key, e);
        }
        self.mode()
    }

    /// Restore the saved preference. Only an exact `"true"` switches to dark.
    pub fn load_preferences(&mut self) -> ThemeMode {
        match self.storage.get_item(&self.key) {
            Ok(Some(saved)) if saved == "true" && !self.dark_mode => {
                log::info!("Restoring dark mode preference");
                self.toggle_dark_mode()
            }
            Ok(_) => self.mode(),
            Err(e) => {
                log::warn!("Failed to read `{}`: {}", self.key, e);
                self.mode()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::InMemoryStorage;

    const KEY: &str = "darkMode";

    #[test]
    fn test_defaults_to_light() {
        let mut prefs = PreferenceStore::new(InMemoryStorage::new(), KEY);
        assert_eq!(prefs.load_preferences(), ThemeMode::Light);
        assert_eq!(prefs.mode().icon_class(), "fas fa-moon");
    }

    #[test]
    fn test_dark_mode_class_matches_stylesheet() {
        assert_eq!(ThemeMode::DARK_MODE_CLASS, "dark-mode");
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let storage = InMemoryStorage::new();
        let mut prefs = PreferenceStore::new(storage.clone(), KEY);

        assert_eq!(prefs.toggle_dark_mode(), ThemeMode::Dark);
        assert_eq!(storage.get_item(KEY).unwrap().as_deref(), Some("true"));
        assert_eq!(prefs.mode().icon_class(), "fas fa-sun");

        assert_eq!(prefs.toggle_dark_mode(), ThemeMode::Light);
        assert_eq!(storage.get_item(KEY).unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn test_restores_saved_dark_mode() {
        let storage = InMemoryStorage::new();
        storage.set_item(KEY, "true").unwrap();
        let mut prefs = PreferenceStore::new(storage.clone(), KEY);
        assert_eq!(prefs.load_preferences(), ThemeMode::Dark);
        assert!(prefs.mode().is_dark());
        // Restoring twice must not flip back.
        assert_eq!(prefs.load_preferences(), ThemeMode::Dark);
    }

    #[test]
    fn test_only_exact_true_restores() {
        for saved in ["false", "TRUE", "1", ""] {
            let storage = InMemoryStorage::new();
            storage.set_item(KEY, saved).unwrap();
            let mut prefs = PreferenceStore::new(storage, KEY);
            assert_eq!(prefs.load_preferences(), ThemeMode::Light, "saved {saved:?}");
        }
    }
}
