//! Light/dark theme preference.

use std::fmt;

use crate::storage::KeyValueStore;

/// Storage key holding `light` or `dark`.
pub const MODE_KEY: &str = "mode";
/// Body class applied in dark mode.
pub const DARK_MODE_CLASS: &str = "dark-mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value; anything but `dark` is light.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == "dark" { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Label of the toggle button: it names the mode a click switches to.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Dark mode",
            Self::Dark => "Light mode",
        }
    }

    /// Font Awesome icon class shown next to the toggle label.
    #[must_use]
    pub const fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }

    #[must_use]
    pub fn load(store: &impl KeyValueStore) -> Self {
        store
            .get(MODE_KEY)
            .map_or(Self::Light, |value| Self::parse(&value))
    }

    pub fn save(self, store: &mut impl KeyValueStore) {
        store.set(MODE_KEY, self.as_str());
    }

    /// Flip the stored preference and return the new mode.
    pub fn toggle_in(store: &mut impl KeyValueStore) -> Self {
        let next = Self::load(store).toggled();
        next.save(store);
        next
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn defaults_to_light_for_missing_or_unknown() {
        assert_eq!(ThemeMode::load(&MemoryStore::new()), ThemeMode::Light);
        let store = MemoryStore::with_entries([(MODE_KEY, "sepia")]);
        assert_eq!(ThemeMode::load(&store), ThemeMode::Light);
    }

    #[test]
    fn toggle_persists_choice() {
        let mut store = MemoryStore::new();
        assert_eq!(ThemeMode::toggle_in(&mut store), ThemeMode::Dark);
        assert_eq!(store.get(MODE_KEY).as_deref(), Some("dark"));
        assert_eq!(ThemeMode::toggle_in(&mut store), ThemeMode::Light);
        assert_eq!(store.get(MODE_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn toggle_label_names_the_other_mode() {
        assert_eq!(ThemeMode::Dark.toggle_label(), "Light mode");
        assert_eq!(ThemeMode::Dark.toggle_icon(), "fas fa-sun");
        assert_eq!(ThemeMode::Light.toggle_label(), "Dark mode");
    }
}
