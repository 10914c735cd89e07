//! Packed ARGB8888 colors and the few conversions the shaders need.

pub const BLACK: u32 = 0xFF000000;
pub const WHITE: u32 = 0xFFFFFFFF;
pub const RED: u32 = 0xFFFF0000;
pub const GREEN: u32 = 0xFF00FF00;
pub const BLUE: u32 = 0xFF0000FF;

/// Pack 8-bit channels into ARGB8888.
#[inline]
pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Unpack ARGB8888 into `[r, g, b, a]` bytes.
#[inline]
pub const fn to_rgba8(color: u32) -> [u8; 4] {
    [
        (color >> 16) as u8,
        (color >> 8) as u8,
        color as u8,
        (color >> 24) as u8,
    ]
}

/// Scale the RGB channels by `intensity`, keeping alpha.
#[inline]
pub fn modulate(color: u32, intensity: f32) -> u32 {
    map_channels(color, |c| c * intensity)
}

/// Apply `f` to each RGB channel (as `0.0..=255.0`), clamping the result back to a byte.
#[inline]
pub fn map_channels(color: u32, f: impl Fn(f32) -> f32) -> u32 {
    let [r, g, b, a] = to_rgba8(color);
    let channel = |c: u8| f(c as f32).clamp(0.0, 255.0) as u8;
    from_rgba8(channel(r), channel(g), channel(b), a)
}
