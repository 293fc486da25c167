use crate::common::{Color, Coord};

/// Two horizontally adjacent pixels in one byte: the even column lives in the
/// low nibble, the odd column in the high nibble.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(transparent)]
pub struct PixelByte(pub u8);

impl PixelByte {
    pub fn new(low: Color, high: Color) -> Self {
        PixelByte(u8::from(low) | u8::from(high) << 4)
    }

    pub fn low(self) -> Color {
        Color::masked(self.0)
    }

    pub fn high(self) -> Color {
        Color::masked(self.0 >> 4)
    }

    pub fn set_low(&mut self, c: Color) {
        self.0 = (self.0 & 0xF0) | u8::from(c);
    }

    pub fn set_high(&mut self, c: Color) {
        self.0 = (self.0 & 0x0F) | u8::from(c) << 4;
    }

    /// Only the parity of `x` matters here.
    pub fn get(self, x: Coord) -> Color {
        if x % 2 == 0 {
            self.low()
        } else {
            self.high()
        }
    }

    pub fn set(&mut self, x: Coord, c: Color) {
        if x % 2 == 0 {
            self.set_low(c);
        } else {
            self.set_high(c);
        }
    }

    pub fn set_both(&mut self, low: Color, high: Color) {
        *self = PixelByte::new(low, high);
    }
}

impl From<u8> for PixelByte {
    fn from(v: u8) -> Self {
        PixelByte(v)
    }
}

impl From<PixelByte> for u8 {
    fn from(p: PixelByte) -> u8 {
        p.0
    }
}
