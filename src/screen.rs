// Module for the packed screen buffer and its conversion to native pixels
use crate::{
    color_table::ColorDisplayTable,
    common::{
        Color, Coord, ScreenCoord, BYTES_PER_SCREEN, SCREEN_HEIGHT, SCREEN_WIDTH,
        SCREEN_WIDTH_IN_BYTES,
    },
    error::{GfxError, Result},
    pixel::PixelByte,
    sprite::{PixelRead, PixelWrite, Region, SpriteView, SpriteViewMut},
    state::GfxState,
};

/// 128x128 pixels, two per byte, same layout as the sprite sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Screen {
    data: Vec<u8>,
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            data: vec![0; BYTES_PER_SCREEN],
        }
    }
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    fn region() -> Region {
        Region::new(SCREEN_WIDTH_IN_BYTES, 0, 0, SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn view(&self) -> SpriteView<'_> {
        SpriteView::new(&self.data, Self::region())
    }

    pub fn view_mut(&mut self) -> SpriteViewMut<'_> {
        SpriteViewMut::new(&mut self.data, Self::region())
    }

    pub fn get(&self, x: Coord, y: Coord) -> Color {
        self.view().get(x, y)
    }

    pub fn clear(&mut self, c: Color) {
        let mut both = PixelByte::default();
        both.set_both(c, c);
        self.data.fill(both.into());
    }

    /// Plots world pixel (x, y): the camera is applied first, then anything
    /// outside the clip rect is dropped. Returns whether a pixel was written.
    pub fn put_pixel(
        &mut self,
        state: &GfxState,
        x: ScreenCoord,
        y: ScreenCoord,
        c: Color,
    ) -> bool {
        let Some((sx, sy)) = state.project(x, y) else {
            return false;
        };
        // The clip rect never extends past the screen, but it is not validated.
        if sx as usize >= SCREEN_WIDTH || sy as usize >= SCREEN_HEIGHT {
            return false;
        }
        self.view_mut().set(sx as Coord, sy as Coord, state.draw_color(c));
        true
    }

    /// Resolves every pixel through the screen palette and the color table.
    /// `out` is row-major, one native value per pixel; nothing is written if
    /// it holds fewer than 128x128 values.
    pub fn present(
        &self,
        state: &GfxState,
        table: &ColorDisplayTable,
        out: &mut [u32],
    ) -> Result<()> {
        let needed = SCREEN_WIDTH * SCREEN_HEIGHT;
        if out.len() < needed {
            return Err(GfxError::BufferTooSmall {
                needed,
                actual: out.len(),
            });
        }
        let pal = state.screen_palette();
        let mut lut = [0u32; 16];
        for c in Color::ALL {
            lut[c.index()] = table.get(pal.get(c));
        }
        for (pair, &b) in out[..needed].chunks_exact_mut(2).zip(&self.data) {
            let p = PixelByte(b);
            pair[0] = lut[p.low().index()];
            pair[1] = lut[p.high().index()];
        }
        Ok(())
    }
}
