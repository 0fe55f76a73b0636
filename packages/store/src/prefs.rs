//! Persisted user preferences: interface language and colour theme.

use std::fmt;

use crate::KeyValueStore;

pub const LANGUAGE_KEY: &str = "language";
pub const THEME_KEY: &str = "theme";

/// Interface language. Indonesian unless the user picked English.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    En,
    #[default]
    Id,
}

impl Language {
    /// Parse a stored value; anything other than `en`/`id` is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "en" => Some(Self::En),
            "id" => Some(Self::Id),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Id => "id",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Id,
            Self::Id => Self::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
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

/// Reads and writes preferences under fixed keys.
#[derive(Clone, Debug)]
pub struct Preferences<S> {
    inner: S,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Stored language, falling back to Indonesian when unset or invalid.
    pub fn language(&self) -> Language {
        self.inner
            .get(LANGUAGE_KEY)
            .and_then(|v| Language::parse(&v))
            .unwrap_or_default()
    }

    pub fn set_language(&self, language: Language) {
        self.inner.set(LANGUAGE_KEY, language.code());
    }

    pub fn theme(&self) -> Theme {
        self.inner
            .get(THEME_KEY)
            .and_then(|v| Theme::parse(&v))
            .unwrap_or_default()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.inner.set(THEME_KEY, theme.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_language_defaults_to_indonesian() {
        let backing = MemoryStore::new();
        let prefs = Preferences::new(backing.clone());
        assert_eq!(prefs.language(), Language::Id);

        backing.set(LANGUAGE_KEY, "fr");
        assert_eq!(prefs.language(), Language::Id);

        backing.set(LANGUAGE_KEY, "EN");
        assert_eq!(prefs.language(), Language::Id);
    }

    #[test]
    fn test_language_roundtrip() {
        let backing = MemoryStore::new();
        let prefs = Preferences::new(backing.clone());

        prefs.set_language(Language::En);
        assert_eq!(backing.get(LANGUAGE_KEY).as_deref(), Some("en"));
        assert_eq!(prefs.language(), Language::En);

        prefs.set_language(prefs.language().toggled());
        assert_eq!(prefs.language(), Language::Id);
    }

    #[test]
    fn test_theme_roundtrip() {
        let prefs = Preferences::new(MemoryStore::new());
        assert_eq!(prefs.theme(), Theme::Light);

        prefs.set_theme(Theme::Dark);
        assert_eq!(prefs.theme(), Theme::Dark);
        assert_eq!(prefs.theme().toggled(), Theme::Light);
    }
}
