use std::fmt;

use image::Rgba;

/// Colors used to paint the rendered diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgba<u8>,
    pub foreground: Rgba<u8>,
}

impl Theme {
    /// Build a fully opaque theme from RGB triples.
    #[must_use]
    pub const fn rgb(background: [u8; 3], foreground: [u8; 3]) -> Self {
        Self {
            background: opaque(background),
            foreground: opaque(foreground),
        }
    }
}

const fn opaque([r, g, b]: [u8; 3]) -> Rgba<u8> {
    Rgba([r, g, b, u8::MAX])
}

/// Format a color as `#rrggbb`, ignoring alpha.
#[must_use]
pub fn hex(Rgba([r, g, b, _]): Rgba<u8>) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Definition for a built-in theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
    pub name: &'static str,
    pub theme: Theme,
}

impl ThemeDefinition {
    pub const fn new(name: &'static str, theme: Theme) -> Self {
        Self { name, theme }
    }
}

/// Snapshot of a registered theme.
#[derive(Debug, Clone)]
pub struct ThemeDescriptor {
    pub name: String,
    pub theme: Theme,
}

impl fmt::Display for ThemeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (background {}, foreground {})",
            self.name,
            hex(self.theme.background),
            hex(self.theme.foreground)
        )
    }
}
