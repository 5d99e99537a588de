use image::RgbaImage;

use super::face::GlyphFace;
use crate::theme::Theme;

/// Padding between the canvas edge and the text, on every side.
pub const MARGIN: u32 = 20;
/// Extra leading added to the face height to get the line pitch.
pub const LINE_GAP: u32 = 6;

/// Pixel geometry of a rendered diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasLayout {
    pub width: u32,
    pub height: u32,
    pub line_height: u32,
    /// Baseline of the first line.
    pub first_baseline: u32,
    /// Widest measured line, excluding margins.
    pub text_width: u32,
}

impl CanvasLayout {
    /// Size a canvas for `lines` drawn with `face`.
    pub fn measure<S: AsRef<str>>(lines: &[S], face: &dyn GlyphFace) -> Self {
        let metrics = face.metrics();
        let line_height = metrics.height() + LINE_GAP;
        let text_width = lines
            .iter()
            .map(|line| face.measure(line.as_ref()))
            .max()
            .unwrap_or(0);
        let count = u32::try_from(lines.len()).unwrap_or(u32::MAX);

        Self {
            width: text_width.saturating_add(2 * MARGIN),
            height: line_height.saturating_mul(count).saturating_add(2 * MARGIN),
            line_height,
            first_baseline: MARGIN + metrics.ascent,
            text_width,
        }
    }

    /// Baseline of the line at `index`.
    #[must_use]
    pub fn baseline(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.first_baseline
            .saturating_add(self.line_height.saturating_mul(index))
    }
}

/// Paint `lines` onto a fresh canvas filled with the theme background.
pub fn render_canvas<S: AsRef<str>>(
    lines: &[S],
    theme: &Theme,
    face: &dyn GlyphFace,
) -> RgbaImage {
    let layout = CanvasLayout::measure(lines, face);
    let mut canvas = RgbaImage::from_pixel(layout.width, layout.height, theme.background);
    let ascent = face.metrics().ascent;

    for (index, line) in lines.iter().enumerate() {
        let top = layout.baseline(index) - ascent;
        let mut x = MARGIN;
        for ch in line.as_ref().chars() {
            face.rasterize(ch, &mut |dx, dy| {
                let (px, py) = (x + dx, top + dy);
                if px < layout.width && py < layout.height {
                    canvas.put_pixel(px, py, theme.foreground);
                }
            });
            x += face.advance(ch);
        }
    }

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::face::BitmapFace;
    use crate::theme::{DARK, LIGHT};

    #[test]
    fn empty_input_yields_margin_sized_canvas() {
        let lines: [&str; 0] = [];
        let canvas = render_canvas(&lines, &DARK, &BitmapFace::default());
        assert_eq!(canvas.dimensions(), (40, 40));
        assert!(canvas.pixels().all(|pixel| *pixel == DARK.background));
    }

    #[test]
    fn layout_uses_widest_line_and_line_count() {
        let face = BitmapFace::default();
        let lines = ["├─src/", "│  └─ main.rs", "└─README.md"];
        let layout = CanvasLayout::measure(&lines, &face);

        assert_eq!(layout.text_width, face.measure("│  └─ main.rs"));
        assert_eq!(layout.width, layout.text_width + 40);
        assert_eq!(layout.line_height, face.metrics().height() + LINE_GAP);
        assert_eq!(layout.height, layout.line_height * 3 + 40);
    }

    #[test]
    fn baselines_step_by_line_height() {
        let face = BitmapFace::default();
        let layout = CanvasLayout::measure(&["a", "b"], &face);
        assert_eq!(layout.baseline(0), MARGIN + face.metrics().ascent);
        assert_eq!(layout.baseline(1), layout.baseline(0) + layout.line_height);
    }

    #[test]
    fn text_is_drawn_inside_margins_in_foreground() {
        let face = BitmapFace::default();
        let lines = ["└─ Cargo.toml"];
        let canvas = render_canvas(&lines, &LIGHT, &face);
        let layout = CanvasLayout::measure(&lines, &face);

        let inked: Vec<(u32, u32)> = canvas
            .enumerate_pixels()
            .filter(|(_, _, pixel)| **pixel == LIGHT.foreground)
            .map(|(x, y, _)| (x, y))
            .collect();

        assert!(!inked.is_empty());
        let top = layout.baseline(0) - face.metrics().ascent;
        for (x, y) in inked {
            assert!((MARGIN..MARGIN + layout.text_width).contains(&x));
            assert!((top..layout.baseline(0)).contains(&y));
        }
    }
}
