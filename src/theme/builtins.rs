use super::types::{Theme, ThemeDefinition};

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME_NAME: &str = "dark";

pub const DARK: Theme = Theme::rgb([30, 30, 30], [0, 255, 128]);
pub const LIGHT: Theme = Theme::rgb([255, 255, 255], [0, 0, 0]);
pub const DRACULA: Theme = Theme::rgb([40, 42, 54], [80, 250, 123]);

pub(super) const BUILT_IN_DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition::new("dark", DARK),
    ThemeDefinition::new("light", LIGHT),
    ThemeDefinition::new("dracula", DRACULA),
];
