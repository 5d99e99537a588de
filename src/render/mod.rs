//! Text and raster renderings of flattened tree lines.
//!
//! The raster path sizes a canvas from the face metrics, paints every line in
//! the theme foreground and encodes the result as PNG. The output file is
//! only created once the canvas is complete.

mod canvas;
mod face;
mod text;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError};
use log::info;

pub use canvas::{CanvasLayout, LINE_GAP, MARGIN, render_canvas};
pub use face::{BitmapFace, FaceMetrics, GlyphFace};
pub use text::{join_lines, write_text};

use crate::error::{Error, Result};
use crate::theme::Theme;

/// Render `lines` and write them as a PNG image to `path`.
pub fn render_png<S: AsRef<str>>(
    lines: &[S],
    path: &Path,
    theme: &Theme,
    face: &dyn GlyphFace,
) -> Result<()> {
    let canvas = render_canvas(lines, theme, face);
    let (width, height) = canvas.dimensions();

    let file = File::create(path).map_err(|source| Error::CreateImage {
        path: path.to_path_buf(),
        source,
    })?;
    let encode_error = |source: ImageError| Error::EncodeImage {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(file);
    PngEncoder::new(&mut writer)
        .write_image(canvas.as_raw(), width, height, ExtendedColorType::Rgba8)
        .map_err(encode_error)?;
    writer
        .flush()
        .map_err(|err| encode_error(ImageError::IoError(err)))?;

    info!("wrote {width}x{height} image to {}", path.display());
    Ok(())
}
