//! Immutable registry of the color themes available to the renderer.

mod builtins;
mod registry;
mod types;

pub use builtins::{DARK, DEFAULT_THEME_NAME, DRACULA, LIGHT};
pub use registry::{by_name, descriptors, names, resolve};
pub use types::{Theme, ThemeDefinition, ThemeDescriptor, hex};
