use std::fs;
use std::path::Path;

use log::info;

use crate::error::{Error, Result};

/// Join lines with `\n`, without a trailing newline.
#[must_use]
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut text = String::with_capacity(lines.iter().map(|line| line.as_ref().len() + 1).sum());
    for (index, line) in lines.iter().enumerate() {
        if index > 0 {
            text.push('\n');
        }
        text.push_str(line.as_ref());
    }
    text
}

/// Write the text rendering of `lines` to `path`.
pub fn write_text<S: AsRef<str>>(lines: &[S], path: &Path) -> Result<()> {
    fs::write(path, join_lines(lines)).map_err(|source| Error::WriteText {
        path: path.to_path_buf(),
        source,
    })?;
    info!("wrote {} lines to {}", lines.len(), path.display());
    Ok(())
}
