use super::builtins::BUILT_IN_DEFINITIONS;
use super::types::{Theme, ThemeDescriptor};
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::sync::OnceLock;

#[derive(Debug)]
struct ThemeEntry {
    display_name: String,
    theme: Theme,
}

#[derive(Debug, Default)]
struct ThemeRegistry {
    canonical: BTreeMap<String, ThemeEntry>,
}

impl ThemeRegistry {
    fn register(&mut self, name: &str, theme: Theme) -> bool {
        let normalized = normalize_name(name);
        self.canonical
            .insert(
                normalized,
                ThemeEntry {
                    display_name: name.to_owned(),
                    theme,
                },
            )
            .is_none()
    }

    fn get(&self, name: &str) -> Option<Theme> {
        self.canonical
            .get(&normalize_name(name))
            .map(|entry| entry.theme)
    }

    fn names(&self) -> Vec<String> {
        self.canonical
            .values()
            .map(|entry| entry.display_name.clone())
            .collect()
    }

    fn descriptors(&self) -> Vec<ThemeDescriptor> {
        self.canonical
            .values()
            .map(|entry| ThemeDescriptor {
                name: entry.display_name.clone(),
                theme: entry.theme,
            })
            .collect()
    }
}

static REGISTRY: OnceLock<ThemeRegistry> = OnceLock::new();

fn registry() -> &'static ThemeRegistry {
    REGISTRY.get_or_init(|| {
        let mut registry = ThemeRegistry::default();

        for definition in BUILT_IN_DEFINITIONS {
            let inserted = registry.register(definition.name, definition.theme);
            debug_assert!(inserted, "duplicate built-in theme names");
        }

        registry
    })
}

fn normalize_name(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

/// Lookup a Theme by case-insensitive name.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
    registry().get(name)
}

/// Lookup a Theme, reporting the available names when it is unknown.
pub fn resolve(name: &str) -> Result<Theme> {
    by_name(name).ok_or_else(|| Error::UnknownTheme {
        name: name.to_owned(),
        available: names().join(", "),
    })
}

/// Return the canonical theme names.
#[must_use]
pub fn names() -> Vec<String> {
    registry().names()
}

/// Produce detailed descriptors for every known theme.
#[must_use]
pub fn descriptors() -> Vec<ThemeDescriptor> {
    registry().descriptors()
}
