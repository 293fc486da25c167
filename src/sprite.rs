// Module for addressing packed pixels, either inside the shared sprite sheet
// or inside a standalone sprite buffer.
use itertools::iproduct;

use crate::{
    common::{
        Color, Coord, SPRITE_BYTES, SPRITE_BYTES_PER_SPRITE_ROW, SPRITE_HEIGHT, SPRITE_WIDTH,
    },
    pixel::PixelByte,
};

/// Byte holding pixel (x, y) in a buffer with the given stride.
#[inline]
pub fn byte_offset(x: Coord, y: Coord, bytes_per_row: usize) -> usize {
    y * bytes_per_row + x / 2
}

pub trait PixelRead {
    fn width(&self) -> Coord;
    fn height(&self) -> Coord;
    fn get(&self, x: Coord, y: Coord) -> Color;
}

pub trait PixelWrite: PixelRead {
    fn set(&mut self, x: Coord, y: Coord, c: Color);

    /// Copies `src` pixel by pixel; `src` must be at least as large as `self`.
    fn copy_from<S: PixelRead + ?Sized>(&mut self, src: &S) {
        debug_assert!(src.width() >= self.width() && src.height() >= self.height());
        for (y, x) in iproduct!(0..self.height(), 0..self.width()) {
            self.set(x, y, src.get(x, y));
        }
    }

    fn fill(&mut self, c: Color) {
        for (y, x) in iproduct!(0..self.height(), 0..self.width()) {
            self.set(x, y, c);
        }
    }
}

/// Location of a rectangular window inside an externally owned packed buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Region {
    pub origin: usize, // Byte offset of the top-left pixel
    pub bytes_per_row: usize,
    pub width: Coord,
    pub height: Coord,
}

impl Region {
    /// `x0` must be even so that local and absolute column parity agree.
    pub fn new(bytes_per_row: usize, x0: Coord, y0: Coord, width: Coord, height: Coord) -> Self {
        debug_assert!(x0 % 2 == 0, "region must start on a byte boundary");
        Self {
            origin: byte_offset(x0, y0, bytes_per_row),
            bytes_per_row,
            width,
            height,
        }
    }

    #[inline]
    fn offset(&self, x: Coord, y: Coord) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} region",
            self.width,
            self.height
        );
        self.origin + byte_offset(x, y, self.bytes_per_row)
    }

    /// Last byte index touched by this region, exclusive.
    fn end(&self) -> usize {
        if self.width == 0 || self.height == 0 {
            return self.origin;
        }
        self.offset(self.width - 1, self.height - 1) + 1
    }
}

/// Read-only window into a packed buffer.
#[derive(Copy, Clone, Debug)]
pub struct SpriteView<'a> {
    bytes: &'a [u8],
    region: Region,
}

impl<'a> SpriteView<'a> {
    pub fn new(bytes: &'a [u8], region: Region) -> Self {
        debug_assert!(region.end() <= bytes.len());
        Self { bytes, region }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn byte_at(&self, x: Coord, y: Coord) -> PixelByte {
        PixelByte(self.bytes[self.region.offset(x, y)])
    }
}

impl PixelRead for SpriteView<'_> {
    fn width(&self) -> Coord {
        self.region.width
    }

    fn height(&self) -> Coord {
        self.region.height
    }

    fn get(&self, x: Coord, y: Coord) -> Color {
        self.byte_at(x, y).get(x)
    }
}

/// Mutable window into a packed buffer.
#[derive(Debug)]
pub struct SpriteViewMut<'a> {
    bytes: &'a mut [u8],
    region: Region,
}

impl<'a> SpriteViewMut<'a> {
    pub fn new(bytes: &'a mut [u8], region: Region) -> Self {
        debug_assert!(region.end() <= bytes.len());
        Self { bytes, region }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn as_view(&self) -> SpriteView<'_> {
        SpriteView::new(&*self.bytes, self.region)
    }

    pub fn byte_at_mut(&mut self, x: Coord, y: Coord) -> &mut u8 {
        let i = self.region.offset(x, y);
        &mut self.bytes[i]
    }
}

impl PixelRead for SpriteViewMut<'_> {
    fn width(&self) -> Coord {
        self.region.width
    }

    fn height(&self) -> Coord {
        self.region.height
    }

    fn get(&self, x: Coord, y: Coord) -> Color {
        PixelByte(self.bytes[self.region.offset(x, y)]).get(x)
    }
}

impl PixelWrite for SpriteViewMut<'_> {
    fn set(&mut self, x: Coord, y: Coord, c: Color) {
        let b = self.byte_at_mut(x, y);
        let mut p = PixelByte(*b);
        p.set(x, c);
        *b = p.into();
    }
}

/// An 8x8 sprite in its own 32-byte buffer, rows packed back to back.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SequentialSprite {
    data: [PixelByte; SPRITE_BYTES],
}

impl SequentialSprite {
    pub fn from_bytes(bytes: [u8; SPRITE_BYTES]) -> Self {
        Self {
            data: bytes.map(PixelByte),
        }
    }

    pub fn to_bytes(&self) -> [u8; SPRITE_BYTES] {
        self.data.map(u8::from)
    }

    fn index(x: Coord, y: Coord) -> usize {
        debug_assert!(x < SPRITE_WIDTH && y < SPRITE_HEIGHT);
        byte_offset(x, y, SPRITE_BYTES_PER_SPRITE_ROW)
    }
}

impl PixelRead for SequentialSprite {
    fn width(&self) -> Coord {
        SPRITE_WIDTH
    }

    fn height(&self) -> Coord {
        SPRITE_HEIGHT
    }

    fn get(&self, x: Coord, y: Coord) -> Color {
        self.data[Self::index(x, y)].get(x)
    }
}

impl PixelWrite for SequentialSprite {
    fn set(&mut self, x: Coord, y: Coord, c: Color) {
        self.data[Self::index(x, y)].set(x, c);
    }
}
