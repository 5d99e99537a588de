//! Locations of the generated artifacts.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_TEXT_FILE: &str = "folder_structure.txt";
pub const DEFAULT_IMAGE_FILE: &str = "folder_structure.png";

/// Output directory plus the text and image paths inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub dir: PathBuf,
    pub text: PathBuf,
    pub image: PathBuf,
}

impl OutputPaths {
    /// Use the default file names inside `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self::with_file_names(dir, DEFAULT_TEXT_FILE, DEFAULT_IMAGE_FILE)
    }

    pub fn with_file_names(
        dir: impl Into<PathBuf>,
        text_file: impl AsRef<Path>,
        image_file: impl AsRef<Path>,
    ) -> Self {
        let dir = dir.into();
        Self {
            text: dir.join(text_file),
            image: dir.join(image_file),
            dir,
        }
    }

    /// Create the output directory and any missing parents.
    pub fn prepare(&self) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|source| Error::CreateDir {
            path: self.dir.clone(),
            source,
        })
    }
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self::in_dir(DEFAULT_OUTPUT_DIR)
    }
}
