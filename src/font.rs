// Module for the bitmap font: 160 glyphs cut from a 16x10 grid of 8x8 cells
use itertools::iproduct;
use log::debug;

use crate::{
    color_table::color_for_rgb,
    common::{
        CharCode, Color, FONT_GLYPHS_COLUMNS, FONT_GLYPHS_ROWS, FONT_GLYPH_COUNT, SPRITE_HEIGHT,
        SPRITE_WIDTH,
    },
    error::{GfxError, Result},
    helpers::alpha,
    sprite::{PixelWrite, SequentialSprite},
    surface::Surface,
};

pub const ATLAS_WIDTH: usize = FONT_GLYPHS_COLUMNS * SPRITE_WIDTH;
pub const ATLAS_HEIGHT: usize = FONT_GLYPHS_ROWS * SPRITE_HEIGHT;

/// Shown by `glyph_or_fallback` for codes the font does not cover.
pub const FALLBACK_GLYPH: CharCode = b'?';

pub struct Font {
    glyphs: Box<[SequentialSprite; FONT_GLYPH_COUNT]>,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            glyphs: Box::new([SequentialSprite::default(); FONT_GLYPH_COUNT]),
        }
    }
}

impl Font {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_surface<S: Surface + ?Sized>(surface: &S) -> Result<Self> {
        let mut font = Self::new();
        font.load(surface)?;
        Ok(font)
    }

    /// Repacks every atlas cell into its glyph. Fully transparent pixels
    /// become black; anything else must be an exact system palette color.
    /// The font is left untouched if the atlas is rejected.
    pub fn load<S: Surface + ?Sized>(&mut self, surface: &S) -> Result<()> {
        if surface.width() < ATLAS_WIDTH || surface.height() < ATLAS_HEIGHT {
            return Err(GfxError::AtlasTooSmall {
                need_width: ATLAS_WIDTH,
                need_height: ATLAS_HEIGHT,
                width: surface.width(),
                height: surface.height(),
            });
        }

        let mut glyphs = Box::new([SequentialSprite::default(); FONT_GLYPH_COUNT]);
        for (gy, gx) in iproduct!(0..FONT_GLYPHS_ROWS, 0..FONT_GLYPHS_COLUMNS) {
            let glyph = &mut glyphs[gy * FONT_GLYPHS_COLUMNS + gx];
            for (y, x) in iproduct!(0..SPRITE_HEIGHT, 0..SPRITE_WIDTH) {
                let px = surface.pixel(gx * SPRITE_WIDTH + x, gy * SPRITE_HEIGHT + y);
                let c = if alpha(px) == 0 {
                    Color::Black
                } else {
                    color_for_rgb(px)?
                };
                glyph.set(x, y, c);
            }
        }
        self.glyphs = glyphs;
        debug!(
            "Loaded {} glyphs from {}x{} atlas",
            FONT_GLYPH_COUNT,
            surface.width(),
            surface.height()
        );
        Ok(())
    }

    pub fn glyph(&self, c: CharCode) -> Result<&SequentialSprite> {
        self.glyphs
            .get(c as usize)
            .ok_or(GfxError::GlyphOutOfRange(c))
    }

    pub fn glyph_or_fallback(&self, c: CharCode) -> &SequentialSprite {
        self.glyphs
            .get(c as usize)
            .unwrap_or(&self.glyphs[FALLBACK_GLYPH as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        color_table::SYSTEM_PALETTE, helpers::pack_argb, helpers::split_rgb, sprite::PixelRead,
        surface::RgbaSurface,
    };

    // Each cell gets a pattern derived from its glyph index, so cells are
    // distinguishable and every palette color shows up somewhere.
    fn expected(i: usize, x: usize, y: usize) -> Color {
        Color::masked((i + x * 3 + y * 5) as u8)
    }

    fn synthetic_atlas() -> RgbaSurface {
        let mut surface = RgbaSurface::new(ATLAS_WIDTH, ATLAS_HEIGHT, 0);
        for (gy, gx) in iproduct!(0..FONT_GLYPHS_ROWS, 0..FONT_GLYPHS_COLUMNS) {
            let i = gy * FONT_GLYPHS_COLUMNS + gx;
            for (y, x) in iproduct!(0..SPRITE_HEIGHT, 0..SPRITE_WIDTH) {
                let rgb = SYSTEM_PALETTE[expected(i, x, y).index()];
                surface.set_pixel(
                    gx * SPRITE_WIDTH + x,
                    gy * SPRITE_HEIGHT + y,
                    pack_argb(0xFF, split_rgb(rgb)),
                );
            }
        }
        surface
    }

    #[test]
    fn test_load_matches_atlas_cells() {
        let font = Font::from_surface(&synthetic_atlas()).unwrap();
        for i in 0..FONT_GLYPH_COUNT {
            let glyph = font.glyph(i as CharCode).unwrap();
            for (y, x) in iproduct!(0..SPRITE_HEIGHT, 0..SPRITE_WIDTH) {
                assert_eq!(glyph.get(x, y), expected(i, x, y), "glyph {i} ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_transparent_pixels_load_as_black() {
        let mut surface = RgbaSurface::new(ATLAS_WIDTH, ATLAS_HEIGHT, 0x00123456);
        surface.set_pixel(9, 0, 0xFFFFF1E8);
        let font = Font::from_surface(&surface).unwrap();
        assert_eq!(font.glyph(1).unwrap().get(1, 0), Color::White);
        assert_eq!(font.glyph(1).unwrap().get(0, 0), Color::Black);
    }

    #[test]
    fn test_unknown_color_rejects_atlas() {
        let mut font = Font::from_surface(&synthetic_atlas()).unwrap();
        let before = *font.glyph(0).unwrap();
        let mut bad = synthetic_atlas();
        bad.set_pixel(127, 79, 0xFF123456);
        assert!(matches!(
            font.load(&bad),
            Err(GfxError::UnknownDisplayColor(0x123456))
        ));
        assert_eq!(*font.glyph(0).unwrap(), before);
    }

    #[test]
    fn test_small_atlas() {
        let surface = RgbaSurface::new(64, 80, 0);
        assert!(matches!(
            Font::from_surface(&surface),
            Err(GfxError::AtlasTooSmall { width: 64, .. })
        ));
    }

    #[test]
    fn test_glyph_out_of_range() {
        let font = Font::from_surface(&synthetic_atlas()).unwrap();
        assert!(font.glyph(159).is_ok());
        assert!(matches!(font.glyph(160), Err(GfxError::GlyphOutOfRange(160))));
        assert_eq!(font.glyph_or_fallback(200), font.glyph(b'?').unwrap());
        assert_eq!(font.glyph_or_fallback(b'A'), font.glyph(b'A').unwrap());
    }
}
