// Resolution of logical colors into device-native pixel values
use hashbrown::HashMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    common::{Color, COLOR_COUNT},
    error::{GfxError, Result},
    helpers::{scale_channel, split_rgb},
};

/// The fixed system palette, as 0xRRGGBB, in logical color order.
pub const SYSTEM_PALETTE: [u32; COLOR_COUNT] = [
    0x000000, // black
    0x1D2B53, // dark blue
    0x7E2553, // dark purple
    0x008751, // dark green
    0xAB5236, // brown
    0x5F574F, // dark grey
    0xC2C3C7, // light grey
    0xFFF1E8, // white
    0xFF004D, // red
    0xFFA300, // orange
    0xFFEC27, // yellow
    0x00E436, // green
    0x29ADFF, // blue
    0x83769C, // indigo
    0xFF77A8, // pink
    0xFFCCAA, // peach
];

/// Layout of a native pixel, named from the most significant byte down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PixelFormat {
    #[default]
    Argb8888,
    Rgba8888,
    Abgr8888,
    Bgra8888,
    Rgb888,
    Rgb565,
}

impl PixelFormat {
    /// Maps an 0xRRGGBB value to this format, fully opaque.
    pub fn map_rgb(self, rgb: u32) -> u32 {
        let [r, g, b] = split_rgb(rgb);
        let (r, g, b) = (r as u32, g as u32, b as u32);
        match self {
            PixelFormat::Argb8888 => 0xFF00_0000 | r << 16 | g << 8 | b,
            PixelFormat::Rgba8888 => r << 24 | g << 16 | b << 8 | 0xFF,
            PixelFormat::Abgr8888 => 0xFF00_0000 | b << 16 | g << 8 | r,
            PixelFormat::Bgra8888 => b << 24 | g << 16 | r << 8 | 0xFF,
            PixelFormat::Rgb888 => r << 16 | g << 8 | b,
            PixelFormat::Rgb565 => {
                scale_channel(r as u8, 5) << 11
                    | scale_channel(g as u8, 6) << 5
                    | scale_channel(b as u8, 5)
            }
        }
    }
}

/// Reverse lookup of an RGB value in the system palette. Only the low 24 bits
/// are compared, so alpha in the input is ignored.
pub fn color_for_rgb(rgb: u32) -> Result<Color> {
    let rgb = rgb & 0x00FF_FFFF;
    SYSTEM_PALETTE
        .iter()
        .position(|&c| c == rgb)
        .map(|i| Color::ALL[i])
        .ok_or(GfxError::UnknownDisplayColor(rgb))
}

/// Logical color to native pixel lookup, built once for a target format and
/// then shared by reference with everything that produces display output.
#[derive(Clone, Debug)]
pub struct ColorDisplayTable {
    format: PixelFormat,
    table: [u32; COLOR_COUNT],
    reverse: HashMap<u32, Color>,
}

impl ColorDisplayTable {
    pub fn new(format: PixelFormat) -> Self {
        let mut table = [0; COLOR_COUNT];
        let mut reverse = HashMap::with_capacity(COLOR_COUNT);
        for (i, &rgb) in SYSTEM_PALETTE.iter().enumerate() {
            table[i] = format.map_rgb(rgb);
            // Lossy formats may fold two colors together; the lower index wins.
            reverse.entry(table[i]).or_insert(Color::ALL[i]);
        }
        debug!("Built color table for {:?}", format);
        Self {
            format,
            table,
            reverse,
        }
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn get(&self, c: Color) -> u32 {
        self.table[c.index()]
    }

    pub fn get_index(&self, idx: u8) -> Result<u32> {
        Ok(self.get(Color::from_index(idx)?))
    }

    pub fn color_for_native(&self, native: u32) -> Result<Color> {
        self.reverse
            .get(&native)
            .copied()
            .ok_or(GfxError::UnknownDisplayColor(native))
    }
}

impl Default for ColorDisplayTable {
    fn default() -> Self {
        Self::new(PixelFormat::default())
    }
}
