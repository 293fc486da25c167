// Pixel, sprite and palette storage for a 128x128, 16-color fantasy console.
//
// Pixels are stored two per byte (even column in the low nibble). Logical
// colors go through a `Palette` and then a `ColorDisplayTable` to become
// native display values.

pub mod color_table;
pub mod common;
pub mod error;
pub mod font;
pub mod helpers;
pub mod palette;
pub mod persist;
pub mod pixel;
pub mod screen;
pub mod sheet;
pub mod sprite;
pub mod state;
pub mod surface;

pub use color_table::{color_for_rgb, ColorDisplayTable, PixelFormat};
pub use common::Color;
pub use error::{GfxError, Result};
pub use font::Font;
pub use palette::Palette;
pub use pixel::PixelByte;
pub use screen::Screen;
pub use sheet::{SpriteSheet, TileMap};
pub use sprite::{PixelRead, PixelWrite, SequentialSprite, SpriteView, SpriteViewMut};
pub use state::{Camera, ClipRect, GfxConfig, GfxState};
pub use surface::{RgbaSurface, Surface};
