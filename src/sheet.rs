// Module for the shared sprite sheet memory and the tile map that indexes it
use crate::{
    common::{
        Color, Coord, SpriteIdx, BYTES_PER_SPRITE_SHEET, SPRITES_PER_SPRITE_SHEET_ROW,
        SPRITE_HEIGHT, SPRITE_SHEET_HEIGHT, SPRITE_SHEET_WIDTH, SPRITE_SHEET_WIDTH_IN_BYTES,
        SPRITE_WIDTH, TILE_MAP_HEIGHT, TILE_MAP_WIDTH,
    },
    error::{GfxError, Result},
    sprite::{PixelRead, PixelWrite, Region, SpriteView, SpriteViewMut},
};

/// Owner of the 128x128 packed sprite sheet. Sprites are handed out as
/// views borrowing from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpriteSheet {
    data: Vec<u8>,
}

impl Default for SpriteSheet {
    fn default() -> Self {
        Self {
            data: vec![0; BYTES_PER_SPRITE_SHEET],
        }
    }
}

impl SpriteSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopts raw sheet memory; it must already be in the packed layout.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        if data.len() != BYTES_PER_SPRITE_SHEET {
            return Err(GfxError::SheetSize {
                expected: BYTES_PER_SPRITE_SHEET,
                actual: data.len(),
            });
        }
        Ok(Self { data })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Top-left pixel of sprite `idx` on the sheet.
    pub fn sprite_origin(idx: SpriteIdx) -> (Coord, Coord) {
        let idx = idx as usize;
        (
            (idx % SPRITES_PER_SPRITE_SHEET_ROW) * SPRITE_WIDTH,
            (idx / SPRITES_PER_SPRITE_SHEET_ROW) * SPRITE_HEIGHT,
        )
    }

    fn sprite_region(idx: SpriteIdx) -> Region {
        let (x0, y0) = Self::sprite_origin(idx);
        Region::new(SPRITE_SHEET_WIDTH_IN_BYTES, x0, y0, SPRITE_WIDTH, SPRITE_HEIGHT)
    }

    fn full_region() -> Region {
        Region::new(
            SPRITE_SHEET_WIDTH_IN_BYTES,
            0,
            0,
            SPRITE_SHEET_WIDTH,
            SPRITE_SHEET_HEIGHT,
        )
    }

    pub fn view(&self) -> SpriteView<'_> {
        SpriteView::new(&self.data, Self::full_region())
    }

    pub fn view_mut(&mut self) -> SpriteViewMut<'_> {
        SpriteViewMut::new(&mut self.data, Self::full_region())
    }

    pub fn sprite(&self, idx: SpriteIdx) -> SpriteView<'_> {
        SpriteView::new(&self.data, Self::sprite_region(idx))
    }

    pub fn sprite_mut(&mut self, idx: SpriteIdx) -> SpriteViewMut<'_> {
        SpriteViewMut::new(&mut self.data, Self::sprite_region(idx))
    }

    pub fn get(&self, x: Coord, y: Coord) -> Color {
        self.view().get(x, y)
    }

    pub fn set(&mut self, x: Coord, y: Coord, c: Color) {
        self.view_mut().set(x, y, c);
    }
}

/// 128x64 grid of sprite indices, one byte per cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileMap {
    cells: Vec<SpriteIdx>,
}

impl Default for TileMap {
    fn default() -> Self {
        Self {
            cells: vec![0; TILE_MAP_WIDTH * TILE_MAP_HEIGHT],
        }
    }
}

impl TileMap {
    pub fn new() -> Self {
        Self::default()
    }

    fn index(x: Coord, y: Coord) -> usize {
        debug_assert!(x < TILE_MAP_WIDTH && y < TILE_MAP_HEIGHT);
        y * TILE_MAP_WIDTH + x
    }

    pub fn get(&self, x: Coord, y: Coord) -> SpriteIdx {
        self.cells[Self::index(x, y)]
    }

    pub fn set(&mut self, x: Coord, y: Coord, sprite: SpriteIdx) {
        self.cells[Self::index(x, y)] = sprite;
    }

    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    pub fn bytes(&self) -> &[u8] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite::byte_offset;

    #[test]
    fn test_sheet_set_get_keeps_neighbor() {
        let mut sheet = SpriteSheet::new();
        for c in Color::ALL {
            let x = 2 * c.index() + 1;
            let y = 100 + c.index();
            sheet.set(x - 1, y, Color::Peach);
            sheet.set(x, y, c);
            assert_eq!(sheet.get(x, y), c);
            assert_eq!(sheet.get(x - 1, y), Color::Peach);
        }
    }

    #[test]
    fn test_sheet_byte_layout() {
        let mut sheet = SpriteSheet::new();
        sheet.set(10, 3, Color::Red);
        sheet.set(11, 3, Color::Yellow);
        assert_eq!(sheet.bytes()[3 * 64 + 5], 0xA8);
    }

    #[test]
    fn test_sprite_origin() {
        assert_eq!(SpriteSheet::sprite_origin(0), (0, 0));
        assert_eq!(SpriteSheet::sprite_origin(1), (8, 0));
        assert_eq!(SpriteSheet::sprite_origin(16), (0, 8));
        assert_eq!(SpriteSheet::sprite_origin(17), (8, 8));
        assert_eq!(SpriteSheet::sprite_origin(35), (24, 16));
        assert_eq!(SpriteSheet::sprite_origin(255), (120, 120));
    }

    #[test]
    fn test_sprite_view_aliases_sheet() {
        let mut sheet = SpriteSheet::new();
        sheet.sprite_mut(18).set(3, 2, Color::Green);
        assert_eq!(sheet.get(16 + 3, 8 + 2), Color::Green);
        assert_eq!(sheet.sprite(18).get(3, 2), Color::Green);
        assert_eq!(sheet.sprite(18).byte_at(3, 2).0, 0xB0);
        let offset = byte_offset(16 + 3, 8 + 2, SPRITE_SHEET_WIDTH_IN_BYTES);
        assert_eq!(sheet.bytes()[offset], 0xB0);
    }

    #[test]
    fn test_from_bytes_checks_size() {
        assert!(SpriteSheet::from_bytes(vec![0; BYTES_PER_SPRITE_SHEET]).is_ok());
        assert!(matches!(
            SpriteSheet::from_bytes(vec![0; 10]),
            Err(GfxError::SheetSize {
                expected: 8192,
                actual: 10
            })
        ));
    }

    #[test]
    fn test_tile_map() {
        let mut map = TileMap::new();
        map.set(127, 63, 42);
        map.set(0, 1, 7);
        assert_eq!(map.get(127, 63), 42);
        assert_eq!(map.bytes()[128], 7);
        map.clear();
        assert_eq!(map.get(127, 63), 0);
    }
}
