// Error types for the graphics core

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GfxError {
    /// Logical color outside [0,15]
    #[error("Invalid color index: {0}")]
    InvalidColorIndex(u8),

    /// RGB value that is not part of the system palette
    #[error("Unknown display color: #{0:06X}")]
    UnknownDisplayColor(u32),

    /// Character code without a glyph in the font
    #[error("Glyph out of range: {0}")]
    GlyphOutOfRange(u8),

    #[error("Font atlas too small: need {need_width}x{need_height}, got {width}x{height}")]
    AtlasTooSmall {
        need_width: usize,
        need_height: usize,
        width: usize,
        height: usize,
    },

    #[error("Sprite sheet size mismatch: expected {expected} bytes, got {actual}")]
    SheetSize { expected: usize, actual: usize },

    #[error("Output buffer too small: need {needed} pixels, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("Unsupported PNG layout: {0}")]
    UnsupportedPng(String),

    #[error("PNG decoding failed: {0}")]
    Png(#[from] png::DecodingError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GfxError>;
