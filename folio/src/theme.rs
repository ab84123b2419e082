//! Light/dark mode.
//!
//! Resolution order at startup: stored preference, then the system
//! `prefers-color-scheme` signal, then light. Every toggle persists the new
//! mode under one key.

use tracing::{debug, warn};

use crate::config::ThemeConfig;
use crate::dom::ClassList;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Value written to the preference store.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Effective mode for a stored value and the system dark-scheme signal.
    ///
    /// Unrecognized stored values count as absent.
    pub fn resolve(stored: Option<&str>, system_prefers_dark: bool) -> Self {
        match stored.and_then(Self::parse) {
            Some(mode) => mode,
            None if system_prefers_dark => ThemeMode::Dark,
            None => ThemeMode::Light,
        }
    }
}

/// Durable per-origin key-value storage.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

pub struct ThemeController<E, S> {
    mode: ThemeMode,
    body: E,
    icon: E,
    store: S,
    config: ThemeConfig,
}

impl<E: ClassList, S: PreferenceStore> ThemeController<E, S> {
    pub fn new(body: E, icon: E, store: S, config: ThemeConfig) -> Self {
        Self {
            mode: ThemeMode::default(),
            body,
            icon,
            store,
            config,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Resolve the startup mode and render it. Nothing is persisted.
    pub fn restore(&mut self, system_prefers_dark: bool) -> ThemeMode {
        let stored = self.store.load(&self.config.storage_key);
        self.mode = ThemeMode::resolve(stored.as_deref(), system_prefers_dark);
        debug!(
            stored = ?stored,
            system_prefers_dark,
            mode = self.mode.as_str(),
            "theme restored"
        );
        self.render();
        self.mode
    }

    /// Flip the mode, render it and persist it.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.flipped();
        self.render();
        if let Err(e) = self.store.save(&self.config.storage_key, self.mode.as_str()) {
            warn!(error = %e, "could not persist theme preference");
        }
        self.mode
    }

    fn render(&self) {
        let dark = self.mode == ThemeMode::Dark;
        self.body.set_class(&self.config.dark_class, dark);
        let (shown, hidden) = if dark {
            (&self.config.dark_icon, &self.config.light_icon)
        } else {
            (&self.config.light_icon, &self.config.dark_icon)
        };
        self.icon.remove_class(hidden);
        self.icon.add_class(shown);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::FakeElement;
    use crate::error::FolioError;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStore {
        entries: Rc<RefCell<HashMap<String, String>>>,
        read_only: bool,
    }

    impl MemoryStore {
        fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store
                .entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            store
        }

        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self, key: &str) -> Option<String> {
            self.get(key)
        }

        fn save(&self, key: &str, value: &str) -> Result<()> {
            if self.read_only {
                return Err(FolioError::Js("QuotaExceededError".into()));
            }
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    fn controller(
        store: MemoryStore,
    ) -> (
        ThemeController<FakeElement, MemoryStore>,
        FakeElement,
        FakeElement,
    ) {
        let body = FakeElement::default();
        let icon = FakeElement::with_classes(&["fas", "fa-moon"]);
        let ctl = ThemeController::new(body.clone(), icon.clone(), store, ThemeConfig::default());
        (ctl, body, icon)
    }

    #[test]
    fn resolve_prefers_stored_value() {
        assert_eq!(ThemeMode::resolve(Some("dark"), false), ThemeMode::Dark);
        assert_eq!(ThemeMode::resolve(Some("light"), true), ThemeMode::Light);
        assert_eq!(ThemeMode::resolve(None, true), ThemeMode::Dark);
        assert_eq!(ThemeMode::resolve(None, false), ThemeMode::Light);
        assert_eq!(ThemeMode::resolve(Some("sepia"), true), ThemeMode::Dark);
    }

    #[test]
    fn stored_dark_restores_dark_mode_and_sun_icon() {
        let (mut ctl, body, icon) = controller(MemoryStore::with("theme", "dark"));
        assert_eq!(ctl.restore(false), ThemeMode::Dark);
        assert!(body.has_class("dark-mode"));
        assert_eq!(icon.classes(), vec!["fa-sun", "fas"]);
    }

    #[test]
    fn stored_light_overrides_system_dark() {
        let (mut ctl, body, icon) = controller(MemoryStore::with("theme", "light"));
        assert_eq!(ctl.restore(true), ThemeMode::Light);
        assert!(!body.has_class("dark-mode"));
        assert!(icon.has_class("fa-moon"));
    }

    #[test]
    fn absent_preference_follows_system_and_is_not_written() {
        let store = MemoryStore::default();
        let (mut ctl, body, _) = controller(store.clone());
        ctl.restore(true);
        assert!(body.has_class("dark-mode"));
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn double_toggle_round_trips_mode_and_storage() {
        let store = MemoryStore::with("theme", "light");
        let (mut ctl, body, icon) = controller(store.clone());
        ctl.restore(false);

        assert_eq!(ctl.toggle(), ThemeMode::Dark);
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        assert!(body.has_class("dark-mode"));
        assert!(icon.has_class("fa-sun") && !icon.has_class("fa-moon"));

        assert_eq!(ctl.toggle(), ThemeMode::Light);
        assert_eq!(store.get("theme").as_deref(), Some("light"));
        assert!(!body.has_class("dark-mode"));
        assert_eq!(icon.classes(), vec!["fa-moon", "fas"]);
    }

    #[test]
    fn storage_failure_still_switches_mode() {
        let store = MemoryStore {
            read_only: true,
            ..MemoryStore::default()
        };
        let (mut ctl, body, _) = controller(store);
        ctl.restore(false);
        assert_eq!(ctl.toggle(), ThemeMode::Dark);
        assert!(body.has_class("dark-mode"));
    }
}
