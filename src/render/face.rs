use font8x8::{
    BASIC_FONTS, BLOCK_FONTS, BOX_FONTS, GREEK_FONTS, HIRAGANA_FONTS, LATIN_FONTS, MISC_FONTS,
    UnicodeFonts,
};

/// Vertical metrics of a monospace face, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceMetrics {
    /// Distance from the baseline to the top of the glyph cell.
    pub ascent: u32,
    /// Distance from the baseline to the bottom of the glyph cell.
    pub descent: u32,
}

impl FaceMetrics {
    #[must_use]
    pub fn height(&self) -> u32 {
        self.ascent + self.descent
    }
}

/// Font collaborator used by the canvas renderer.
pub trait GlyphFace {
    fn metrics(&self) -> FaceMetrics;

    /// Horizontal advance of a single character.
    fn advance(&self, ch: char) -> u32;

    /// Rasterize `ch`, calling `plot` with each covered pixel as an offset
    /// from the top-left corner of the glyph cell.
    fn rasterize(&self, ch: char, plot: &mut dyn FnMut(u32, u32));

    /// Width of `text` when drawn on a single line.
    fn measure(&self, text: &str) -> u32 {
        text.chars().map(|ch| self.advance(ch)).sum()
    }
}

const GLYPH_SIZE: u32 = 8;
const DESCENT_ROWS: u32 = 2;

/// Monospace 8x8 bitmap face from `font8x8`, scaled by an integer factor.
///
/// Characters missing from every table still advance a full cell so that
/// measurements stay proportional to the character count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapFace {
    scale: u32,
}

impl BitmapFace {
    /// Create a face; a scale of zero is treated as one.
    #[must_use]
    pub fn new(scale: u32) -> Self {
        Self {
            scale: scale.max(1),
        }
    }

    #[must_use]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    fn glyph(ch: char) -> Option<[u8; 8]> {
        BASIC_FONTS
            .get(ch)
            .or_else(|| BOX_FONTS.get(ch))
            .or_else(|| LATIN_FONTS.get(ch))
            .or_else(|| BLOCK_FONTS.get(ch))
            .or_else(|| GREEK_FONTS.get(ch))
            .or_else(|| HIRAGANA_FONTS.get(ch))
            .or_else(|| MISC_FONTS.get(ch))
    }
}

impl Default for BitmapFace {
    fn default() -> Self {
        Self::new(1)
    }
}

impl GlyphFace for BitmapFace {
    fn metrics(&self) -> FaceMetrics {
        FaceMetrics {
            ascent: GLYPH_SIZE * self.scale,
            descent: DESCENT_ROWS * self.scale,
        }
    }

    fn advance(&self, _ch: char) -> u32 {
        GLYPH_SIZE * self.scale
    }

    fn rasterize(&self, ch: char, plot: &mut dyn FnMut(u32, u32)) {
        let Some(rows) = Self::glyph(ch) else {
            return;
        };

        for (row, bits) in (0u32..).zip(rows) {
            for column in 0..GLYPH_SIZE {
                // Bit 0 is the leftmost pixel.
                if bits & (1 << column) == 0 {
                    continue;
                }
                for dy in 0..self.scale {
                    for dx in 0..self.scale {
                        plot(column * self.scale + dx, row * self.scale + dy);
                    }
                }
            }
        }
    }
}
