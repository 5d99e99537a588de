use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the library.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced while loading a layout or writing its renderings.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested theme is not part of the built-in registry.
    #[error("unknown theme '{name}' (available: {available})")]
    UnknownTheme { name: String, available: String },

    /// The input document could not be read from disk.
    #[error("failed to read {}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input document is not valid YAML.
    #[error("invalid YAML in {origin}")]
    Decode {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// A mapping used a sequence or mapping as a key.
    #[error("unsupported mapping key under '{location}': keys must be strings, numbers or booleans")]
    InvalidKey { location: String },

    #[error("failed to create output directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", .path.display())]
    WriteText {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create {}", .path.display())]
    CreateImage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode PNG {}", .path.display())]
    EncodeImage {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
