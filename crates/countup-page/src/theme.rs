//! The light/dark theme flag, the page's only persisted preference.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Storage key for the theme flag.
pub const THEME_KEY: &str = "theme";

/// Single-flag key-value persistence seam. Hosts back this with whatever
/// local storage they have; tests use [`MemoryStore`].
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory preference store.
#[derive(Default, Debug)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Load the stored flag; unknown or missing values fall back to Light.
    pub fn load(store: &dyn PreferenceStore) -> Self {
        match store.get(THEME_KEY).as_deref() {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Persist this theme as the single preference flag.
    pub fn store(self, store: &mut dyn PreferenceStore) {
        store.set(THEME_KEY, self.as_str());
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_light() {
        let store = MemoryStore::new();
        assert_eq!(Theme::load(&store), Theme::Light);
    }

    #[test]
    fn round_trips_through_store() {
        let mut store = MemoryStore::new();
        Theme::Dark.store(&mut store);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(Theme::load(&store), Theme::Dark);
    }

    #[test]
    fn toggle_flips_both_ways() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn garbage_value_falls_back_to_light() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "solarized");
        assert_eq!(Theme::load(&store), Theme::Light);
    }
}
