// Module for the runtime palette: remaps logical colors and flags transparency
use crate::common::{Color, COLOR_COUNT};

pub const DISPLAY_MASK: u8 = 0x0F;
pub const TRANSPARENT_BIT: u8 = 0x10;

/// One packed byte per logical color: the low nibble is the display color,
/// bit 4 marks the entry as transparent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: [u8; COLOR_COUNT],
}

impl Default for Palette {
    fn default() -> Self {
        let mut pal = Palette {
            colors: [0; COLOR_COUNT],
        };
        pal.reset();
        pal
    }
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_raw(colors: [u8; COLOR_COUNT]) -> Self {
        Self { colors }
    }

    pub fn raw(&self) -> &[u8; COLOR_COUNT] {
        &self.colors
    }

    pub fn reset(&mut self) {
        for (i, c) in self.colors.iter_mut().enumerate() {
            *c = i as u8;
        }
        self.set_transparent(Color::Black, true);
    }

    pub fn reset_transparency(&mut self) {
        self.set_transparent(Color::Black, true);
        for &c in &Color::ALL[1..] {
            self.set_transparent(c, false);
        }
    }

    pub fn get(&self, i: Color) -> Color {
        Color::masked(self.colors[i.index()])
    }

    /// Merges `color` into the entry with a bitwise OR rather than replacing
    /// it: after `reset`, `set(c, x)` yields `c | x`. Callers wanting a plain
    /// remap must `reset` the palette (or use `from_raw`) first.
    // TODO: confirm whether overwrite was intended for remaps like pal(3, 4).
    pub fn set(&mut self, i: Color, color: Color) {
        let entry = &mut self.colors[i.index()];
        *entry |= u8::from(color) | (*entry & TRANSPARENT_BIT);
    }

    pub fn transparent(&self, i: Color) -> bool {
        self.colors[i.index()] & TRANSPARENT_BIT != 0
    }

    pub fn set_transparent(&mut self, i: Color, f: bool) {
        let entry = &mut self.colors[i.index()];
        *entry = if f {
            *entry | TRANSPARENT_BIT
        } else {
            *entry & DISPLAY_MASK
        };
    }
}

impl std::ops::Index<Color> for Palette {
    type Output = u8;

    fn index(&self, i: Color) -> &u8 {
        &self.colors[i.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset() {
        let pal = Palette::new();
        for c in Color::ALL {
            assert_eq!(pal.get(c), c);
            assert_eq!(pal.transparent(c), c == Color::Black);
        }
        assert_eq!(pal[Color::Black], 0x10);
    }

    #[test]
    fn test_transparency_round_trip() {
        let mut pal = Palette::new();
        for c in Color::ALL {
            for t in [true, false, true] {
                pal.set_transparent(c, t);
                assert_eq!(pal.transparent(c), t);
                assert_eq!(pal.get(c), c);
            }
        }
    }

    #[test]
    fn test_set_accumulates_bits() {
        let mut pal = Palette::new();
        pal.set(Color::DarkGreen, Color::White);
        assert_eq!(pal.get(Color::DarkGreen), Color::White); // 3 | 7 == 7

        pal.set(Color::DarkBlue, Color::DarkPurple);
        assert_eq!(pal.get(Color::DarkBlue), Color::DarkGreen); // 1 | 2 == 3

        pal.set(Color::Red, Color::Black);
        assert_eq!(pal.get(Color::Red), Color::Red);
    }

    #[test]
    fn test_set_keeps_transparency() {
        let mut pal = Palette::new();
        pal.set(Color::Black, Color::Blue);
        assert!(pal.transparent(Color::Black));
        assert_eq!(pal.get(Color::Black), Color::Blue);
        pal.set(Color::Pink, Color::Green);
        assert!(!pal.transparent(Color::Pink));
        assert_eq!(pal.get(Color::Pink), Color::Peach); // 14 | 11 == 15
    }

    #[test]
    fn test_reset_transparency_keeps_mapping() {
        let mut pal = Palette::from_raw([0x05; COLOR_COUNT]);
        pal.set_transparent(Color::Orange, true);
        pal.reset_transparency();
        assert!(pal.transparent(Color::Black));
        assert!(!pal.transparent(Color::Orange));
        for c in Color::ALL {
            assert_eq!(pal.get(c), Color::DarkGrey);
        }
    }
}
