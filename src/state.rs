use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{
    color_table::PixelFormat,
    common::{
        Color, ScreenCoord, DRAW_PALETTE_INDEX, SCREEN_HEIGHT, SCREEN_PALETTE_INDEX, SCREEN_WIDTH,
    },
    palette::Palette,
};

pub type ClipCoord = u8; // Clip bound, 0 up to the screen size inclusive

/// Draw calls may only touch pixels in [x0, x1) x [y0, y1).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ClipRect {
    pub x0: ClipCoord,
    pub y0: ClipCoord,
    pub x1: ClipCoord,
    pub y1: ClipCoord,
}

impl Default for ClipRect {
    fn default() -> Self {
        let mut clip = ClipRect {
            x0: 0,
            y0: 0,
            x1: 0,
            y1: 0,
        };
        clip.reset();
        clip
    }
}

impl ClipRect {
    pub fn reset(&mut self) {
        self.x0 = 0;
        self.y0 = 0;
        self.x1 = SCREEN_WIDTH as ClipCoord;
        self.y1 = SCREEN_HEIGHT as ClipCoord;
    }

    // Stored as given; an inverted rect simply contains nothing.
    pub fn set(&mut self, x0: ClipCoord, y0: ClipCoord, x1: ClipCoord, y1: ClipCoord) {
        self.x0 = x0;
        self.y0 = y0;
        self.x1 = x1;
        self.y1 = y1;
    }

    pub fn contains(&self, x: ScreenCoord, y: ScreenCoord) -> bool {
        x >= self.x0 as ScreenCoord
            && x < self.x1 as ScreenCoord
            && y >= self.y0 as ScreenCoord
            && y < self.y1 as ScreenCoord
    }
}

/// Translation subtracted from world coordinates: screen = world - camera.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Camera {
    x: i16,
    y: i16,
}

impl Camera {
    pub fn x(&self) -> i16 {
        self.x
    }

    pub fn y(&self) -> i16 {
        self.y
    }

    pub fn set(&mut self, x: i16, y: i16) {
        self.x = x;
        self.y = y;
    }

    // Saturates at the i32 range; saturated results are far outside any clip rect.
    pub fn apply(&self, x: ScreenCoord, y: ScreenCoord) -> (ScreenCoord, ScreenCoord) {
        (
            x.saturating_sub(self.x as ScreenCoord),
            y.saturating_sub(self.y as ScreenCoord),
        )
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    pub x: u8,
    pub y: u8,
}

/// Everything a draw call consults besides the target buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GfxState {
    pub palettes: [Palette; 2],
    pub clip: ClipRect,
    pub camera: Camera,
    pub cursor: Cursor,
}

impl Default for GfxState {
    fn default() -> Self {
        Self {
            palettes: [Palette::new(), Palette::new()],
            clip: ClipRect::default(),
            camera: Camera::default(),
            cursor: Cursor::default(),
        }
    }
}

impl GfxState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn draw_palette(&self) -> &Palette {
        &self.palettes[DRAW_PALETTE_INDEX]
    }

    pub fn draw_palette_mut(&mut self) -> &mut Palette {
        &mut self.palettes[DRAW_PALETTE_INDEX]
    }

    pub fn screen_palette(&self) -> &Palette {
        &self.palettes[SCREEN_PALETTE_INDEX]
    }

    pub fn screen_palette_mut(&mut self) -> &mut Palette {
        &mut self.palettes[SCREEN_PALETTE_INDEX]
    }

    /// Color actually stored when drawing with `c`.
    pub fn draw_color(&self, c: Color) -> Color {
        self.draw_palette().get(c)
    }

    /// Like `draw_color`, but None where sprite drawing should skip the pixel.
    pub fn sprite_color(&self, c: Color) -> Option<Color> {
        let pal = self.draw_palette();
        if pal.transparent(c) {
            None
        } else {
            Some(pal.get(c))
        }
    }

    /// Screen-space position of a world coordinate, or None if clipped.
    pub fn project(&self, x: ScreenCoord, y: ScreenCoord) -> Option<(ScreenCoord, ScreenCoord)> {
        let (sx, sy) = self.camera.apply(x, y);
        self.clip.contains(sx, sy).then_some((sx, sy))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GfxConfig {
    pub pixel_format: PixelFormat,
    pub font_atlas: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_reset_and_set() {
        let mut clip = ClipRect::default();
        clip.set(1, 2, 3, 4);
        assert_eq!((clip.x0, clip.y0, clip.x1, clip.y1), (1, 2, 3, 4));
        clip.reset();
        assert_eq!((clip.x0, clip.y0, clip.x1, clip.y1), (0, 0, 128, 128));
    }

    #[test]
    fn test_clip_set_is_not_normalized() {
        let mut clip = ClipRect::default();
        clip.set(90, 80, 10, 5);
        assert_eq!((clip.x0, clip.y0, clip.x1, clip.y1), (90, 80, 10, 5));
        assert!(!clip.contains(50, 50));
    }

    #[test]
    fn test_clip_contains_is_half_open() {
        let mut clip = ClipRect::default();
        clip.set(10, 20, 30, 40);
        assert!(clip.contains(10, 20));
        assert!(clip.contains(29, 39));
        assert!(!clip.contains(30, 39));
        assert!(!clip.contains(29, 40));
        assert!(!clip.contains(-1, 25));
    }

    #[test]
    fn test_camera() {
        let mut cam = Camera::default();
        cam.set(-5, 300);
        assert_eq!((cam.x(), cam.y()), (-5, 300));
        assert_eq!(cam.apply(0, 310), (5, 10));
    }

    #[test]
    fn test_camera_extreme_coordinates() {
        let mut cam = Camera::default();
        cam.set(1, -1);
        assert_eq!(cam.apply(i32::MIN, i32::MAX), (i32::MIN, i32::MAX));
        cam.set(i16::MIN, i16::MAX);
        assert_eq!(cam.apply(i32::MAX, i32::MIN), (i32::MAX, i32::MIN));

        let mut state = GfxState::new();
        state.camera.set(1, -1);
        assert_eq!(state.project(i32::MIN, 0), None);
        assert_eq!(state.project(0, i32::MAX), None);
    }

    #[test]
    fn test_project_applies_camera_before_clip() {
        let mut state = GfxState::new();
        state.camera.set(100, 0);
        assert_eq!(state.project(110, 5), Some((10, 5)));
        assert_eq!(state.project(10, 5), None);
        state.clip.set(0, 0, 8, 8);
        assert_eq!(state.project(110, 5), None);
        assert_eq!(state.project(107, 7), Some((7, 7)));
    }

    #[test]
    fn test_sprite_color_honors_transparency() {
        let mut state = GfxState::new();
        assert_eq!(state.sprite_color(Color::Black), None);
        assert_eq!(state.sprite_color(Color::Red), Some(Color::Red));
        state.draw_palette_mut().set_transparent(Color::Red, true);
        assert_eq!(state.sprite_color(Color::Red), None);
        assert_eq!(state.draw_color(Color::Red), Color::Red);
        assert!(!state.screen_palette().transparent(Color::Red));
    }

    #[test]
    fn test_config_defaults() {
        let cfg: GfxConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.pixel_format, PixelFormat::Argb8888);
        assert!(cfg.font_atlas.is_none());
        let cfg: GfxConfig = serde_json::from_str(r#"{"pixel_format":"Rgb565"}"#).unwrap();
        assert_eq!(cfg.pixel_format, PixelFormat::Rgb565);
    }
}
