use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::error::{GfxError, Result};

pub type Coord = usize; // Pixel coordinate inside a buffer (caller keeps it in range)
pub type ScreenCoord = i32; // Signed draw coordinate, before camera and clipping
pub type SpriteIdx = u8; // Index into the sprite sheet (0-255)
pub type CharCode = u8; // Character code used to look up a glyph

pub const PIXEL_TO_BYTE_RATIO: usize = 2;

pub const SPRITE_WIDTH: usize = 8;
pub const SPRITE_HEIGHT: usize = 8;

// Visible part of a glyph cell, used for text advance.
pub const GLYPH_WIDTH: usize = 4;
pub const GLYPH_HEIGHT: usize = 6;

pub const SPRITE_BYTES_PER_SPRITE_ROW: usize = SPRITE_WIDTH / PIXEL_TO_BYTE_RATIO;
pub const SPRITE_BYTES: usize = SPRITE_BYTES_PER_SPRITE_ROW * SPRITE_HEIGHT;
pub const PALETTE_SIZE: usize = 16;

pub const SCREEN_WIDTH: usize = 128;
pub const SCREEN_HEIGHT: usize = 128;
pub const SCREEN_WIDTH_IN_BYTES: usize = SCREEN_WIDTH / PIXEL_TO_BYTE_RATIO;
pub const BYTES_PER_SCREEN: usize = SCREEN_WIDTH * SCREEN_HEIGHT / PIXEL_TO_BYTE_RATIO;

pub const TILE_MAP_WIDTH: usize = 128;
pub const TILE_MAP_HEIGHT: usize = 64;

pub const SPRITE_SHEET_WIDTH: usize = 128;
pub const SPRITES_PER_SPRITE_SHEET_ROW: usize = 16;
pub const SPRITE_SHEET_WIDTH_IN_BYTES: usize = SPRITE_SHEET_WIDTH / PIXEL_TO_BYTE_RATIO;
pub const SPRITE_SHEET_HEIGHT: usize = 128;
pub const BYTES_PER_SPRITE_SHEET: usize = SPRITE_SHEET_WIDTH_IN_BYTES * SPRITE_SHEET_HEIGHT;

pub const FONT_GLYPHS_COLUMNS: usize = 16;
pub const FONT_GLYPHS_ROWS: usize = 10;
pub const FONT_GLYPH_COUNT: usize = FONT_GLYPHS_COLUMNS * FONT_GLYPHS_ROWS;

pub const DRAW_PALETTE_INDEX: usize = 0;
pub const SCREEN_PALETTE_INDEX: usize = 1;

pub const COLOR_COUNT: usize = 16;

/// Logical color: a 4-bit palette slot, resolved to a display color through
/// a `Palette` and the `ColorDisplayTable`.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize_repr, Deserialize_repr,
)]
#[repr(u8)]
pub enum Color {
    #[default]
    Black = 0,
    DarkBlue = 1,
    DarkPurple = 2,
    DarkGreen = 3,
    Brown = 4,
    DarkGrey = 5,
    LightGrey = 6,
    White = 7,
    Red = 8,
    Orange = 9,
    Yellow = 10,
    Green = 11,
    Blue = 12,
    Indigo = 13,
    Pink = 14,
    Peach = 15,
}

impl Color {
    pub const ALL: [Color; COLOR_COUNT] = [
        Color::Black,
        Color::DarkBlue,
        Color::DarkPurple,
        Color::DarkGreen,
        Color::Brown,
        Color::DarkGrey,
        Color::LightGrey,
        Color::White,
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Indigo,
        Color::Pink,
        Color::Peach,
    ];

    /// Keeps only the low 4 bits, the way every packed store does.
    pub fn masked(value: u8) -> Color {
        Color::ALL[(value & 0x0F) as usize]
    }

    pub fn from_index(value: u8) -> Result<Color> {
        if (value as usize) < COLOR_COUNT {
            Ok(Color::ALL[value as usize])
        } else {
            Err(GfxError::InvalidColorIndex(value))
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl From<Color> for u8 {
    fn from(c: Color) -> u8 {
        c as u8
    }
}

impl TryFrom<u8> for Color {
    type Error = GfxError;

    fn try_from(value: u8) -> Result<Self> {
        Color::from_index(value)
    }
}
