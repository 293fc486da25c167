pub type ColorRGB = [u8; 3];

pub fn split_rgb(rgb: u32) -> ColorRGB {
    [(rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8]
}

pub fn pack_argb(a: u8, [r, g, b]: ColorRGB) -> u32 {
    (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

pub fn alpha(argb: u32) -> u8 {
    (argb >> 24) as u8
}

// Narrow an 8-bit channel down to `bits` bits, rounding to nearest.
pub fn scale_channel(c: u8, bits: u32) -> u32 {
    let max = (1u32 << bits) - 1;
    (c as u32 * max + 127) / 255
}
