//! Core crate for `folder-tree`: turn a YAML description of a folder layout
//! into a text tree diagram and a rasterized PNG of the same diagram.
//!
//! The pipeline is split into small pieces that the binary wires together:
//! [`document`] decodes the YAML into a closed [`Node`] model, [`tree`]
//! flattens it into display lines and [`render`] writes the text and image
//! artifacts using a [`Theme`] from the built-in registry.

pub mod app_dirs;
pub mod document;
mod error;
pub mod logging;
pub mod output;
pub mod render;
pub mod theme;
pub mod tree;

pub use document::{Mapping, Node};
pub use error::{Error, Result};
pub use output::OutputPaths;
pub use render::{BitmapFace, CanvasLayout, FaceMetrics, GlyphFace};
pub use theme::Theme;
pub use tree::{Glyph, LineKind, TreeLine, flatten, render_lines};
