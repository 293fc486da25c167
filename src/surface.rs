// Raw pixel surfaces consumed by loaders such as `Font::load`.
use std::{fs::File, io::Read, path::Path};

use log::info;

use crate::{
    common::Coord,
    error::{GfxError, Result},
    helpers::pack_argb,
};

/// A readable grid of 0xAARRGGBB pixels.
pub trait Surface {
    fn width(&self) -> Coord;
    fn height(&self) -> Coord;
    fn pixel(&self, x: Coord, y: Coord) -> u32;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaSurface {
    width: Coord,
    height: Coord,
    pixels: Vec<u32>,
}

impl RgbaSurface {
    /// A surface filled with a single pixel value.
    pub fn new(width: Coord, height: Coord, fill: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width * height],
        }
    }

    pub fn set_pixel(&mut self, x: Coord, y: Coord, argb: u32) {
        debug_assert!(x < self.width && y < self.height);
        self.pixels[y * self.width + x] = argb;
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn open_png(path: &Path) -> Result<Self> {
        info!("Loading {}", path.display());
        Self::decode_png(File::open(path)?)
    }

    /// Decodes 8-bit PNGs of any color type; palette and sub-byte depths
    /// are expanded by the decoder.
    pub fn decode_png<R: Read>(r: R) -> Result<Self> {
        let mut decoder = png::Decoder::new(r);
        decoder.set_transformations(png::Transformations::EXPAND);
        let mut reader = decoder.read_info()?;
        let mut buf = vec![0; reader.output_buffer_size()];
        let frame = reader.next_frame(&mut buf)?;
        if frame.bit_depth != png::BitDepth::Eight {
            return Err(GfxError::UnsupportedPng(format!(
                "bit depth {:?}",
                frame.bit_depth
            )));
        }
        let channels = match frame.color_type {
            png::ColorType::Grayscale => 1,
            png::ColorType::GrayscaleAlpha => 2,
            png::ColorType::Rgb => 3,
            png::ColorType::Rgba => 4,
            other => {
                return Err(GfxError::UnsupportedPng(format!("color type {:?}", other)));
            }
        };

        let (width, height) = (frame.width as usize, frame.height as usize);
        let mut pixels = Vec::with_capacity(width * height);
        for row in buf[..frame.buffer_size()].chunks_exact(frame.line_size) {
            for px in row[..width * channels].chunks_exact(channels) {
                let argb = match *px {
                    [g] => pack_argb(0xFF, [g, g, g]),
                    [g, a] => pack_argb(a, [g, g, g]),
                    [r, g, b] => pack_argb(0xFF, [r, g, b]),
                    [r, g, b, a] => pack_argb(a, [r, g, b]),
                    _ => unreachable!(),
                };
                pixels.push(argb);
            }
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }
}

impl Surface for RgbaSurface {
    fn width(&self) -> Coord {
        self.width
    }

    fn height(&self) -> Coord {
        self.height
    }

    fn pixel(&self, x: Coord, y: Coord) -> u32 {
        self.pixels[y * self.width + x]
    }
}
